//! Arrow rotation calculation
//!
//! Angles are degrees in SVG convention: clockwise positive, 0 pointing
//! right, always normalized to 0..360. Every motion type resolves through a
//! fixed per-location table; a handful of notation letters carry hard-coded
//! zero-turn angle tables that take precedence over the general rule.

use tracing::warn;

use crate::motion::{
    classify_handpath, Color, HandpathCategory, Letter, Location, MotionData, Pictograph,
    RotationDirection, Turns, WorkingMotionType,
};

use super::mirror::{apply_mirror, should_mirror};

/// The location an arrow glyph is drawn at.
///
/// Static arrows sit at their (unmoving) location, dash arrows at their
/// destination, and shift arrows halfway along the compass arc between start
/// and end.
pub fn arrow_location(motion: &MotionData) -> Location {
    match motion.working_type() {
        WorkingMotionType::Static => motion.start_loc,
        WorkingMotionType::Dash => motion.end_loc,
        WorkingMotionType::Pro | WorkingMotionType::Anti | WorkingMotionType::Float => {
            match classify_handpath(motion.start_loc, motion.end_loc) {
                Some(HandpathCategory::CwShift) => motion.start_loc.step_clockwise(1),
                Some(HandpathCategory::CcwShift) => motion.start_loc.step_clockwise(7),
                _ => motion.end_loc,
            }
        }
    }
}

/// Compute the rotation angle for a motion's arrow glyph.
///
/// `mirrored` is the already-decided mirror flag; mirroring is applied as the
/// final post-step so mirrored glyphs keep their visual heading.
pub fn rotation_for(
    pictograph: &Pictograph,
    motion: &MotionData,
    arrow_loc: Location,
    mirrored: bool,
) -> f64 {
    let angle = match motion.working_type() {
        WorkingMotionType::Pro => pro_angle(motion, arrow_loc),
        WorkingMotionType::Anti => anti_angle(motion, arrow_loc),
        WorkingMotionType::Float => float_angle(motion, arrow_loc),
        WorkingMotionType::Dash => dash_angle(pictograph, motion, arrow_loc),
        WorkingMotionType::Static => static_angle(pictograph, motion, arrow_loc),
    };
    apply_mirror(angle.rem_euclid(360.0), mirrored)
}

/// Compass heading of a location, degrees clockwise from north.
fn compass_angle(location: Location) -> f64 {
    match location {
        Location::N => 0.0,
        Location::NE => 45.0,
        Location::E => 90.0,
        Location::SE => 135.0,
        Location::S => 180.0,
        Location::SW => 225.0,
        Location::W => 270.0,
        Location::NW => 315.0,
    }
}

/// Shift arrow angle for clockwise travel: tangent to the ring.
fn shift_cw_angle(location: Location) -> f64 {
    match location {
        Location::N => 315.0,
        Location::NE => 0.0,
        Location::E => 45.0,
        Location::SE => 90.0,
        Location::S => 135.0,
        Location::SW => 180.0,
        Location::W => 225.0,
        Location::NW => 270.0,
    }
}

/// Shift arrow angle for counterclockwise travel: the opposing tangent.
fn shift_ccw_angle(location: Location) -> f64 {
    match location {
        Location::N => 45.0,
        Location::NE => 90.0,
        Location::E => 135.0,
        Location::SE => 180.0,
        Location::S => 225.0,
        Location::SW => 270.0,
        Location::W => 315.0,
        Location::NW => 0.0,
    }
}

fn pro_angle(motion: &MotionData, arrow_loc: Location) -> f64 {
    match motion.rotation_direction {
        RotationDirection::Cw => shift_cw_angle(arrow_loc),
        RotationDirection::Ccw => shift_ccw_angle(arrow_loc),
        RotationDirection::NoRotation => {
            warn!(id = %motion.id, "pro motion without a rotation direction, using 0");
            0.0
        }
    }
}

fn anti_angle(motion: &MotionData, arrow_loc: Location) -> f64 {
    // Anti arrows use the tables with the senses swapped. The alternate table
    // (a half-turn away) applies when the start orientation is non-radial and
    // the turn count is an odd half (0.5, 1.5, 2.5).
    let regular = match motion.rotation_direction {
        RotationDirection::Cw => shift_ccw_angle(arrow_loc),
        RotationDirection::Ccw => shift_cw_angle(arrow_loc),
        RotationDirection::NoRotation => {
            warn!(id = %motion.id, "anti motion without a rotation direction, using 0");
            return 0.0;
        }
    };
    if !motion.start_ori.is_radial() && motion.turns.is_odd_half() {
        (regular + 180.0).rem_euclid(360.0)
    } else {
        regular
    }
}

fn float_angle(motion: &MotionData, arrow_loc: Location) -> f64 {
    // Float arrows key off the hand rotation direction derived from the
    // handpath, defaulting to clockwise when the path is unclassified.
    match classify_handpath(motion.start_loc, motion.end_loc) {
        Some(HandpathCategory::CcwShift) => shift_ccw_angle(arrow_loc),
        _ => shift_cw_angle(arrow_loc),
    }
}

fn dash_angle(pictograph: &Pictograph, motion: &MotionData, arrow_loc: Location) -> f64 {
    if motion.rotation_direction == RotationDirection::NoRotation {
        return dash_no_rotation_angle(motion);
    }

    if let Some(angle) = dash_letter_override(pictograph, motion) {
        return angle;
    }

    oriented_shift_angle(motion, arrow_loc)
}

/// Rotationless dash arrows point along the direction of travel.
fn dash_no_rotation_angle(motion: &MotionData) -> f64 {
    use Location::*;
    match (motion.start_loc, motion.end_loc) {
        (N, S) => 90.0,
        (S, N) => 270.0,
        (E, W) => 180.0,
        (W, E) => 0.0,
        (NE, SW) => 135.0,
        (SW, NE) => 315.0,
        (SE, NW) => 225.0,
        (NW, SE) => 45.0,
        (start, end) => {
            warn!(id = %motion.id, %start, %end, "dash without antipodal endpoints, using 0");
            0.0
        }
    }
}

/// Hard-coded zero-turn angles for the dash letter families.
///
/// Applies only when this motion carries zero turns. If the companion motion
/// has turns of its own, this motion's angle is derived from the companion's
/// instead: a half-turn away from whatever the companion resolves to.
fn dash_letter_override(pictograph: &Pictograph, motion: &MotionData) -> Option<f64> {
    let letter = pictograph.letter_for(motion)?;
    if !letter.has_dash_angle_override() || !motion.turns.is_zero() {
        return None;
    }

    let other = pictograph.other(motion.color);
    if other.turns != Turns::ZERO {
        let other_mirrored = should_mirror(other.working_type(), other.rotation_direction);
        let companion = rotation_for(pictograph, other, arrow_location(other), other_mirrored);
        return Some((companion + 180.0).rem_euclid(360.0));
    }

    dash_override_angle(letter, motion.color, motion.start_loc, motion.end_loc)
}

fn dash_override_angle(
    letter: &Letter,
    color: Color,
    start: Location,
    end: Location,
) -> Option<f64> {
    use Location::*;
    let red_angle = if letter.is_phi_dash() || letter.is_psi_dash() {
        match (start, end) {
            (N, S) => 90.0,
            (E, W) => 180.0,
            (S, N) => 270.0,
            (W, E) => 0.0,
            (NE, SW) => 135.0,
            (SE, NW) => 225.0,
            (SW, NE) => 315.0,
            (NW, SE) => 45.0,
            _ => return None,
        }
    } else {
        // Lambda family.
        match (start, end) {
            (N, S) => 270.0,
            (E, W) => 0.0,
            (S, N) => 90.0,
            (W, E) => 180.0,
            (NE, SW) => 315.0,
            (SE, NW) => 45.0,
            (SW, NE) => 135.0,
            (NW, SE) => 225.0,
            _ => return None,
        }
    };
    Some(match color {
        Color::Red => red_angle,
        Color::Blue => (red_angle + 180.0).rem_euclid(360.0),
    })
}

fn static_angle(pictograph: &Pictograph, motion: &MotionData, arrow_loc: Location) -> f64 {
    if motion.rotation_direction == RotationDirection::NoRotation {
        return 0.0;
    }

    if let Some(letter) = pictograph.letter_for(motion) {
        if letter.has_static_angle_override() && motion.turns.is_zero() {
            if let Some(angle) = static_override_angle(motion.color, arrow_loc) {
                return angle;
            }
        }
    }

    let base = match motion.rotation_direction {
        RotationDirection::Cw => compass_angle(arrow_loc),
        RotationDirection::Ccw => (compass_angle(arrow_loc) + 180.0).rem_euclid(360.0),
        RotationDirection::NoRotation => 0.0,
    };
    if motion.start_ori.is_radial() {
        base
    } else {
        (base + 90.0).rem_euclid(360.0)
    }
}

/// Hard-coded zero-turn static angles for the psi letter.
fn static_override_angle(color: Color, location: Location) -> Option<f64> {
    let red_angle = (compass_angle(location) + 90.0).rem_euclid(360.0);
    let angle = match color {
        Color::Red => red_angle,
        Color::Blue => (red_angle + 180.0).rem_euclid(360.0),
    };
    Some(angle)
}

/// Dash arrows with live rotation fall back to the orientation-gated shift
/// tables: the radial tables directly, the non-radial ones a quarter turn on.
fn oriented_shift_angle(motion: &MotionData, arrow_loc: Location) -> f64 {
    let base = match motion.rotation_direction {
        RotationDirection::Cw => shift_cw_angle(arrow_loc),
        RotationDirection::Ccw => shift_ccw_angle(arrow_loc),
        RotationDirection::NoRotation => 0.0,
    };
    if motion.start_ori.is_radial() {
        base
    } else {
        (base + 90.0).rem_euclid(360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{MotionType, Orientation};

    fn motion(
        color: Color,
        motion_type: MotionType,
        start: Location,
        end: Location,
        rotation: RotationDirection,
        turns: Turns,
    ) -> MotionData {
        MotionData::new(
            format!("{}-m", color),
            color,
            motion_type,
            start,
            end,
            Orientation::In,
            Orientation::In,
            rotation,
            turns,
        )
        .unwrap()
    }

    fn beat(letter: Option<&str>, blue: MotionData, red: MotionData) -> Pictograph {
        Pictograph::new(letter.map(Letter::new), blue, red)
    }

    fn static_motion(color: Color, loc: Location) -> MotionData {
        motion(
            color,
            MotionType::Static,
            loc,
            loc,
            RotationDirection::NoRotation,
            Turns::ZERO,
        )
    }

    #[test]
    fn test_pro_cw_table() {
        let blue = motion(
            Color::Blue,
            MotionType::Pro,
            Location::N,
            Location::E,
            RotationDirection::Cw,
            Turns::Half(2),
        );
        let picto = beat(None, blue.clone(), static_motion(Color::Red, Location::S));
        assert_eq!(rotation_for(&picto, &blue, Location::NE, false), 0.0);
        assert_eq!(rotation_for(&picto, &blue, Location::SE, false), 90.0);
    }

    #[test]
    fn test_rotation_is_pure() {
        let blue = motion(
            Color::Blue,
            MotionType::Pro,
            Location::N,
            Location::E,
            RotationDirection::Cw,
            Turns::Half(2),
        );
        let picto = beat(None, blue.clone(), static_motion(Color::Red, Location::S));
        let first = rotation_for(&picto, &blue, Location::SE, true);
        let second = rotation_for(&picto, &blue, Location::SE, true);
        assert_eq!(first, second);
    }

    #[test]
    fn test_anti_swaps_senses() {
        let blue = motion(
            Color::Blue,
            MotionType::Anti,
            Location::N,
            Location::E,
            RotationDirection::Cw,
            Turns::Half(2),
        );
        let picto = beat(None, blue.clone(), static_motion(Color::Red, Location::S));
        // Anti cw reads from the ccw table.
        assert_eq!(
            rotation_for(&picto, &blue, Location::NE, false),
            shift_ccw_angle(Location::NE)
        );
    }

    #[test]
    fn test_anti_alternate_table() {
        let mut blue = motion(
            Color::Blue,
            MotionType::Anti,
            Location::N,
            Location::E,
            RotationDirection::Cw,
            Turns::Half(1),
        );
        blue.start_ori = Orientation::Clock;
        let picto = beat(None, blue.clone(), static_motion(Color::Red, Location::S));
        let regular = shift_ccw_angle(Location::NE);
        assert_eq!(
            rotation_for(&picto, &blue, Location::NE, false),
            (regular + 180.0) % 360.0
        );

        // Whole turns keep the regular table even with non-radial orientation.
        blue.turns = Turns::Half(2);
        let picto = beat(None, blue.clone(), static_motion(Color::Red, Location::S));
        assert_eq!(rotation_for(&picto, &blue, Location::NE, false), regular);
    }

    #[test]
    fn test_float_uses_handpath_direction() {
        let blue = motion(
            Color::Blue,
            MotionType::Pro,
            Location::E,
            Location::N,
            RotationDirection::Cw,
            Turns::Float,
        );
        let picto = beat(None, blue.clone(), static_motion(Color::Red, Location::S));
        // E -> N is a counterclockwise handpath.
        assert_eq!(
            rotation_for(&picto, &blue, Location::NE, false),
            shift_ccw_angle(Location::NE)
        );
    }

    #[test]
    fn test_dash_no_rotation_points_along_travel() {
        let blue = motion(
            Color::Blue,
            MotionType::Dash,
            Location::N,
            Location::S,
            RotationDirection::NoRotation,
            Turns::ZERO,
        );
        let picto = beat(None, blue.clone(), static_motion(Color::Red, Location::E));
        assert_eq!(rotation_for(&picto, &blue, Location::S, false), 90.0);
    }

    #[test]
    fn test_phi_dash_override_angle() {
        let red = motion(
            Color::Red,
            MotionType::Dash,
            Location::N,
            Location::S,
            RotationDirection::Cw,
            Turns::ZERO,
        );
        let blue = motion(
            Color::Blue,
            MotionType::Dash,
            Location::S,
            Location::N,
            RotationDirection::Cw,
            Turns::ZERO,
        );
        let picto = beat(Some("Φ-"), blue, red.clone());
        assert_eq!(rotation_for(&picto, &red, Location::S, false), 90.0);
        // Blue is the red angle half a turn on: (270 + 180) % 360.
        assert_eq!(
            rotation_for(&picto, &picto.blue, Location::N, false),
            90.0
        );
    }

    #[test]
    fn test_dash_override_companion_rule() {
        // Red carries turns, so blue's zero-turn dash derives its angle from
        // red's resolved angle plus a half turn.
        let red = motion(
            Color::Red,
            MotionType::Dash,
            Location::N,
            Location::S,
            RotationDirection::Cw,
            Turns::Half(2),
        );
        let blue = motion(
            Color::Blue,
            MotionType::Dash,
            Location::S,
            Location::N,
            RotationDirection::Cw,
            Turns::ZERO,
        );
        let picto = beat(Some("Φ-"), blue.clone(), red.clone());
        let red_mirrored = should_mirror(red.working_type(), red.rotation_direction);
        let companion = rotation_for(&picto, &red, arrow_location(&red), red_mirrored);
        assert_eq!(
            rotation_for(&picto, &blue, Location::N, false),
            (companion + 180.0) % 360.0
        );
    }

    #[test]
    fn test_unknown_letter_falls_back_to_orientation_table() {
        let red = motion(
            Color::Red,
            MotionType::Dash,
            Location::N,
            Location::S,
            RotationDirection::Cw,
            Turns::ZERO,
        );
        let blue = static_motion(Color::Blue, Location::E);
        let picto = beat(Some("Z"), blue, red.clone());
        assert_eq!(
            rotation_for(&picto, &red, Location::S, false),
            shift_cw_angle(Location::S)
        );
    }

    #[test]
    fn test_static_psi_override() {
        let red = motion(
            Color::Red,
            MotionType::Static,
            Location::N,
            Location::N,
            RotationDirection::Cw,
            Turns::ZERO,
        );
        let blue = static_motion(Color::Blue, Location::N);
        let picto = beat(Some("Ψ"), blue, red.clone());
        assert_eq!(rotation_for(&picto, &red, Location::N, false), 90.0);
    }

    #[test]
    fn test_static_no_rotation_is_zero() {
        let red = static_motion(Color::Red, Location::W);
        let blue = static_motion(Color::Blue, Location::E);
        let picto = beat(None, blue, red.clone());
        assert_eq!(rotation_for(&picto, &red, Location::W, false), 0.0);
    }

    #[test]
    fn test_mirror_post_step() {
        let blue = motion(
            Color::Blue,
            MotionType::Pro,
            Location::N,
            Location::E,
            RotationDirection::Cw,
            Turns::Half(2),
        );
        let picto = beat(None, blue.clone(), static_motion(Color::Red, Location::S));
        let plain = rotation_for(&picto, &blue, Location::SE, false);
        let mirrored = rotation_for(&picto, &blue, Location::SE, true);
        assert_eq!(mirrored, (360.0 - plain) % 360.0);
    }

    #[test]
    fn test_arrow_location_for_shifts() {
        let cw = motion(
            Color::Blue,
            MotionType::Pro,
            Location::N,
            Location::E,
            RotationDirection::Cw,
            Turns::Half(2),
        );
        assert_eq!(arrow_location(&cw), Location::NE);

        let ccw = motion(
            Color::Blue,
            MotionType::Pro,
            Location::E,
            Location::N,
            RotationDirection::Ccw,
            Turns::Half(2),
        );
        assert_eq!(arrow_location(&ccw), Location::NE);
    }

    #[test]
    fn test_arrow_location_for_static_and_dash() {
        let st = static_motion(Color::Blue, Location::SW);
        assert_eq!(arrow_location(&st), Location::SW);

        let dash = motion(
            Color::Blue,
            MotionType::Dash,
            Location::N,
            Location::S,
            RotationDirection::NoRotation,
            Turns::ZERO,
        );
        assert_eq!(arrow_location(&dash), Location::S);
    }
}
