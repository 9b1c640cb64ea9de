//! Canvas coordinate anchors for arrows
//!
//! All geometry lives in a fixed 950x950 canvas with the grid center at
//! (475, 475). Two coordinate families exist: the inner "hand point" ring,
//! used by static and dash arrows, and the outer "layer-2" ring used by
//! shift arrows (pro/anti/float).
//!
//! In diamond mode only the diagonal layer-2 points exist, so cardinal
//! requests resolve to the clockwise-nearest diagonal (N -> NE and so on).
//! Box mode mirrors the rule (NE -> E). This many-to-one mapping is
//! intentional, not a lookup failure.

use crate::grid::GridMode;
use crate::motion::{Location, WorkingMotionType};

/// Side length of the square drawing canvas.
pub const CANVAS_SIZE: f64 = 950.0;
/// Grid center, both axes.
pub const CENTER: f64 = 475.0;

/// Radius of the inner hand-point ring.
const HAND_RADIUS: f64 = 143.0;
/// Radius of the outer layer-2 ring.
const LAYER2_RADIUS: f64 = 270.0;

/// A point in canvas coordinates (y grows downward, SVG convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The canvas center.
    pub fn center() -> Self {
        Self::new(CENTER, CENTER)
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Which coordinate family an arrow anchors in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionTypeClass {
    /// Pro, anti and float arrows anchor on the outer layer-2 ring.
    Shift,
    /// Static and dash arrows anchor on the inner hand-point ring.
    StaticDash,
}

impl From<WorkingMotionType> for MotionTypeClass {
    fn from(t: WorkingMotionType) -> Self {
        match t {
            WorkingMotionType::Pro | WorkingMotionType::Anti | WorkingMotionType::Float => {
                MotionTypeClass::Shift
            }
            WorkingMotionType::Dash | WorkingMotionType::Static => MotionTypeClass::StaticDash,
        }
    }
}

fn ring_point(location: Location, radius: f64) -> Point {
    let d = radius * std::f64::consts::FRAC_1_SQRT_2;
    match location {
        Location::N => Point::new(CENTER, CENTER - radius),
        Location::NE => Point::new(CENTER + d, CENTER - d),
        Location::E => Point::new(CENTER + radius, CENTER),
        Location::SE => Point::new(CENTER + d, CENTER + d),
        Location::S => Point::new(CENTER, CENTER + radius),
        Location::SW => Point::new(CENTER - d, CENTER + d),
        Location::W => Point::new(CENTER - radius, CENTER),
        Location::NW => Point::new(CENTER - d, CENTER - d),
    }
}

/// Hand point for a location (inner ring). Available in every grid mode.
pub fn hand_point(location: Location) -> Point {
    ring_point(location, HAND_RADIUS)
}

/// Resolve which layer-2 location actually holds the point for a request.
///
/// Diamond mode has no cardinal layer-2 points; cardinal requests snap to the
/// clockwise-nearest diagonal. Box mode has no diagonal points; diagonal
/// requests snap to the clockwise-nearest cardinal. Skewed mode keeps all
/// eight.
fn resolve_layer2_location(location: Location, mode: GridMode) -> Location {
    match mode {
        GridMode::Diamond if location.is_cardinal() => location.step_clockwise(1),
        GridMode::Box if location.is_intercardinal() => location.step_clockwise(1),
        _ => location,
    }
}

/// Layer-2 point for a location in the given grid mode (outer ring).
pub fn layer2_point(location: Location, mode: GridMode) -> Point {
    ring_point(resolve_layer2_location(location, mode), LAYER2_RADIUS)
}

/// Initial anchor for an arrow before any per-letter adjustment.
pub fn initial_anchor(class: MotionTypeClass, location: Location, mode: GridMode) -> Point {
    match class {
        MotionTypeClass::StaticDash => hand_point(location),
        MotionTypeClass::Shift => layer2_point(location, mode),
    }
}
