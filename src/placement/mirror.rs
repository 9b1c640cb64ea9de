//! Mirror decision for arrow glyphs
//!
//! Anti arrows are chirally inverted relative to every other motion type:
//! they mirror on clockwise rotation where the rest mirror on
//! counterclockwise. No rotation means no mirror.

use crate::motion::{RotationDirection, WorkingMotionType};

/// Whether the arrow glyph must be horizontally mirrored.
pub fn should_mirror(motion_type: WorkingMotionType, rotation: RotationDirection) -> bool {
    match rotation {
        RotationDirection::NoRotation => false,
        RotationDirection::Cw => matches!(motion_type, WorkingMotionType::Anti),
        RotationDirection::Ccw => !matches!(motion_type, WorkingMotionType::Anti),
    }
}

/// Apply the mirror post-step to a rotation angle.
pub fn apply_mirror(angle: f64, mirrored: bool) -> f64 {
    if mirrored {
        (360.0 - angle).rem_euclid(360.0)
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anti_mirrors_on_cw() {
        assert!(should_mirror(WorkingMotionType::Anti, RotationDirection::Cw));
        assert!(!should_mirror(WorkingMotionType::Anti, RotationDirection::Ccw));
    }

    #[test]
    fn test_other_types_mirror_on_ccw() {
        for t in [
            WorkingMotionType::Pro,
            WorkingMotionType::Float,
            WorkingMotionType::Dash,
            WorkingMotionType::Static,
        ] {
            assert!(!should_mirror(t, RotationDirection::Cw));
            assert!(should_mirror(t, RotationDirection::Ccw));
        }
    }

    #[test]
    fn test_no_rotation_never_mirrors() {
        for t in [
            WorkingMotionType::Pro,
            WorkingMotionType::Anti,
            WorkingMotionType::Float,
            WorkingMotionType::Dash,
            WorkingMotionType::Static,
        ] {
            assert!(!should_mirror(t, RotationDirection::NoRotation));
        }
    }

    #[test]
    fn test_mirror_involution() {
        for angle in [0.0, 45.0, 90.0, 135.5, 270.0, 359.0] {
            let twice = apply_mirror(apply_mirror(angle, true), true);
            assert!((twice - angle).abs() < 1e-9, "angle {} came back as {}", angle, twice);
        }
    }

    #[test]
    fn test_mirror_of_zero_stays_in_range() {
        assert_eq!(apply_mirror(0.0, true), 0.0);
    }
}
