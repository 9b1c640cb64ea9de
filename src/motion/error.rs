//! Error types for motion records and lead-state resolution

use thiserror::Error;

use super::handpath::HandpathCategory;
use super::types::{Location, MotionType};

/// Data-integrity errors raised while constructing or validating a motion
/// record. These are fatal: a record that fails validation must not be used
/// for geometry.
#[derive(Debug, Error)]
pub enum MotionError {
    /// Static motions must start and end at the same location
    #[error("static motion must start and end at the same location (got {start} -> {end})")]
    StaticEndpoints { start: Location, end: Location },

    /// Dash motions travel between antipodal locations
    #[error("dash motion must travel between antipodal locations (got {start} -> {end})")]
    DashEndpoints { start: Location, end: Location },

    /// The float turns sentinel is only meaningful on pro/anti shifts
    #[error("float turns are only valid on pro or anti motions (got {motion_type})")]
    FloatOnNonShift { motion_type: MotionType },

    /// Turn counts are half-step rationals in 0..=3
    #[error("turns must be a multiple of 0.5 between 0 and 3 (got {value})")]
    InvalidTurns { value: f64 },

    /// Only "fl" is accepted as a non-numeric turns value
    #[error("unknown turns sentinel '{value}' (expected \"fl\")")]
    InvalidTurnsSentinel { value: String },

    /// A pictograph's blue slot must hold the blue motion and vice versa
    #[error("pictograph motion colors do not match their slots")]
    ColorMismatch,
}

/// Errors from lead-state determination.
#[derive(Debug, Error)]
pub enum LeadStateError {
    /// The two motions classify to different handpath categories
    #[error("motions have incompatible directions ({a:?} vs {b:?})")]
    IncompatibleHandpaths {
        a: Option<HandpathCategory>,
        b: Option<HandpathCategory>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_error_display() {
        let err = MotionError::StaticEndpoints {
            start: Location::N,
            end: Location::E,
        };
        assert!(err.to_string().contains("n -> e"));
    }

    #[test]
    fn test_incompatible_handpaths_display() {
        let err = LeadStateError::IncompatibleHandpaths {
            a: Some(HandpathCategory::CwShift),
            b: Some(HandpathCategory::Dash),
        };
        assert!(err.to_string().contains("incompatible"));
    }
}
