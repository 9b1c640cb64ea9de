//! Grid mode derivation: diamond, box, or skewed
//!
//! The grid mode is derived from the pair of motions, never stored. Each
//! motion either stays within the cardinal subset, stays within the
//! intercardinal subset, or straddles both (skewed).

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::GridError;
use crate::motion::MotionData;

/// Derived grid mode for a pictograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    Diamond,
    Box,
    Skewed,
}

impl GridMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GridMode::Diamond => "diamond",
            GridMode::Box => "box",
            GridMode::Skewed => "skewed",
        }
    }
}

impl std::fmt::Display for GridMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which location subset a single motion's endpoints occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubsetUse {
    CardinalOnly,
    IntercardinalOnly,
    Skewed,
}

fn classify_motion(motion: &MotionData) -> SubsetUse {
    match (motion.start_loc.is_cardinal(), motion.end_loc.is_cardinal()) {
        (true, true) => SubsetUse::CardinalOnly,
        (false, false) => SubsetUse::IntercardinalOnly,
        _ => SubsetUse::Skewed,
    }
}

/// Derive the grid mode for a pair of motions.
///
/// Either motion straddling the subsets makes the whole pictograph skewed.
/// Otherwise both-cardinal is diamond and both-intercardinal is box. A
/// mismatch of pure subsets (one motion cardinal-only, the other
/// intercardinal-only) has no principled answer: in lenient mode it defaults
/// to diamond with a warning, in strict mode it is an error so tests can
/// surface genuine data problems.
pub fn derive_mode(a: &MotionData, b: &MotionData, strict: bool) -> Result<GridMode, GridError> {
    let use_a = classify_motion(a);
    let use_b = classify_motion(b);

    match (use_a, use_b) {
        (SubsetUse::Skewed, _) | (_, SubsetUse::Skewed) => Ok(GridMode::Skewed),
        (SubsetUse::CardinalOnly, SubsetUse::CardinalOnly) => Ok(GridMode::Diamond),
        (SubsetUse::IntercardinalOnly, SubsetUse::IntercardinalOnly) => Ok(GridMode::Box),
        _ if strict => Err(GridError::MixedSubsets),
        _ => {
            warn!(
                blue = %a.id,
                red = %b.id,
                "motions mix cardinal-only and intercardinal-only endpoints; defaulting to diamond"
            );
            Ok(GridMode::Diamond)
        }
    }
}

/// Lenient derivation for code paths that must not fail (prop placement,
/// orchestrator fallbacks). Identical to `derive_mode(a, b, false)` except it
/// can never return an error.
pub fn derive_mode_lenient(a: &MotionData, b: &MotionData) -> GridMode {
    match derive_mode(a, b, false) {
        Ok(mode) => mode,
        // Unreachable with strict = false, but stay total.
        Err(_) => GridMode::Diamond,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Color, Location, MotionType, Orientation, RotationDirection, Turns};

    fn motion(start: Location, end: Location) -> MotionData {
        MotionData::new(
            "m",
            Color::Blue,
            MotionType::Pro,
            start,
            end,
            Orientation::In,
            Orientation::In,
            RotationDirection::Cw,
            Turns::Half(2),
        )
        .unwrap()
    }

    #[test]
    fn test_both_cardinal_is_diamond() {
        let a = motion(Location::N, Location::E);
        let b = motion(Location::S, Location::W);
        assert_eq!(derive_mode(&a, &b, false).unwrap(), GridMode::Diamond);
    }

    #[test]
    fn test_both_intercardinal_is_box() {
        let a = motion(Location::NE, Location::SE);
        let b = motion(Location::SW, Location::NW);
        assert_eq!(derive_mode(&a, &b, false).unwrap(), GridMode::Box);
    }

    #[test]
    fn test_straddling_motion_is_skewed() {
        let a = motion(Location::N, Location::NE);
        let b = motion(Location::S, Location::W);
        assert_eq!(derive_mode(&a, &b, false).unwrap(), GridMode::Skewed);
    }

    #[test]
    fn test_mixed_subsets_defaults_to_diamond_leniently() {
        let a = motion(Location::N, Location::E);
        let b = motion(Location::SW, Location::NW);
        assert_eq!(derive_mode(&a, &b, false).unwrap(), GridMode::Diamond);
        assert_eq!(derive_mode_lenient(&a, &b), GridMode::Diamond);
    }

    #[test]
    fn test_mixed_subsets_errors_in_strict_mode() {
        let a = motion(Location::N, Location::E);
        let b = motion(Location::SW, Location::NW);
        assert!(matches!(
            derive_mode(&a, &b, true),
            Err(GridError::MixedSubsets)
        ));
    }
}
