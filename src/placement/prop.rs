//! Prop placement and beta separation
//!
//! Props sit on the hand point of their motion's end location. When both
//! tracked points end at the identical location (a beta position) the two
//! props would overlap, so each is pushed 25 units along a direction chosen
//! by location, orientation radiality, and color. The direction tables are
//! built so opposite colors always separate in opposite directions.

use tracing::warn;

use crate::config::PlacementConfig;
use crate::grid::{hand_point, GridMode, Point};
use crate::motion::{Color, Location, MotionData, Orientation, Pictograph};

/// Final placement for a prop glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropPlacement {
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees, independent of the arrow's angle.
    pub rotation_angle: f64,
}

/// Eight-way separation direction for beta offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeparationDirection {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl SeparationDirection {
    /// Unit vector in canvas coordinates (y down), scaled to `magnitude`.
    fn vector(self, magnitude: f64) -> (f64, f64) {
        let d = magnitude * std::f64::consts::FRAC_1_SQRT_2;
        match self {
            SeparationDirection::Up => (0.0, -magnitude),
            SeparationDirection::Down => (0.0, magnitude),
            SeparationDirection::Left => (-magnitude, 0.0),
            SeparationDirection::Right => (magnitude, 0.0),
            SeparationDirection::UpLeft => (-d, -d),
            SeparationDirection::UpRight => (d, -d),
            SeparationDirection::DownLeft => (-d, d),
            SeparationDirection::DownRight => (d, d),
        }
    }
}

/// Place a prop for one motion of a pictograph.
///
/// Never fails: a missing direction entry logs a warning and skips the
/// separation offset.
pub fn place_prop(
    config: &PlacementConfig,
    pictograph: &Pictograph,
    motion: &MotionData,
    grid_mode: GridMode,
) -> PropPlacement {
    let base = hand_point(motion.end_loc);

    let (dx, dy) = if pictograph.ends_with_beta() {
        beta_offset(config, motion, grid_mode)
    } else {
        (0.0, 0.0)
    };

    PropPlacement {
        x: base.x + dx,
        y: base.y + dy,
        rotation_angle: prop_rotation(motion.end_ori, motion.end_loc),
    }
}

/// Hand point a prop rests on before any separation.
pub fn prop_base_position(end_loc: Location) -> Point {
    hand_point(end_loc)
}

fn beta_offset(config: &PlacementConfig, motion: &MotionData, grid_mode: GridMode) -> (f64, f64) {
    let radial = motion.end_ori.is_radial();
    let direction = match grid_mode {
        GridMode::Box => box_direction(motion.end_loc, radial, motion.color),
        // Skewed beats fall back to the diamond tables.
        GridMode::Diamond | GridMode::Skewed => {
            diamond_direction(motion.end_loc, radial, motion.color)
        }
    };

    match direction {
        Some(dir) => dir.vector(config.beta_offset_magnitude),
        None => {
            warn!(
                id = %motion.id,
                location = %motion.end_loc,
                mode = %grid_mode,
                "no beta separation direction resolved; skipping offset"
            );
            (0.0, 0.0)
        }
    }
}

/// Diamond-mode separation directions.
///
/// Radial props separate perpendicular to the radial axis (red clockwise of
/// it, blue counterclockwise); non-radial props separate along the axis
/// itself (red outward, blue inward).
fn diamond_direction(
    location: Location,
    radial: bool,
    color: Color,
) -> Option<SeparationDirection> {
    use SeparationDirection::*;
    let red = if radial {
        match location {
            Location::N => Right,
            Location::E => Down,
            Location::S => Left,
            Location::W => Up,
            Location::NE => DownRight,
            Location::SE => DownLeft,
            Location::SW => UpLeft,
            Location::NW => UpRight,
        }
    } else {
        match location {
            Location::N => Up,
            Location::E => Right,
            Location::S => Down,
            Location::W => Left,
            Location::NE => UpRight,
            Location::SE => DownRight,
            Location::SW => DownLeft,
            Location::NW => UpLeft,
        }
    };
    Some(match color {
        Color::Red => red,
        Color::Blue => opposite(red),
    })
}

/// Box-mode separation directions: the diamond rule advanced one compass
/// step clockwise.
fn box_direction(location: Location, radial: bool, color: Color) -> Option<SeparationDirection> {
    use SeparationDirection::*;
    let red = if radial {
        match location {
            Location::N => DownRight,
            Location::E => DownLeft,
            Location::S => UpLeft,
            Location::W => UpRight,
            Location::NE => Down,
            Location::SE => Left,
            Location::SW => Up,
            Location::NW => Right,
        }
    } else {
        match location {
            Location::N => UpRight,
            Location::E => DownRight,
            Location::S => DownLeft,
            Location::W => UpLeft,
            Location::NE => Right,
            Location::SE => Down,
            Location::SW => Left,
            Location::NW => Up,
        }
    };
    Some(match color {
        Color::Red => red,
        Color::Blue => opposite(red),
    })
}

fn opposite(dir: SeparationDirection) -> SeparationDirection {
    use SeparationDirection::*;
    match dir {
        Up => Down,
        Down => Up,
        Left => Right,
        Right => Left,
        UpLeft => DownRight,
        UpRight => DownLeft,
        DownLeft => UpRight,
        DownRight => UpLeft,
    }
}

/// Prop rotation: orientation by location, independent of the arrow angle.
///
/// An `in` prop points at the grid center, `out` away from it; `clock` and
/// `counter` are the two tangents.
fn prop_rotation(orientation: Orientation, location: Location) -> f64 {
    let inward: f64 = match location {
        Location::N => 90.0,
        Location::NE => 135.0,
        Location::E => 180.0,
        Location::SE => 225.0,
        Location::S => 270.0,
        Location::SW => 315.0,
        Location::W => 0.0,
        Location::NW => 45.0,
    };
    let offset = match orientation {
        Orientation::In => 0.0,
        Orientation::Clock => 90.0,
        Orientation::Out => 180.0,
        Orientation::Counter => 270.0,
    };
    (inward + offset).rem_euclid(360.0)
}
