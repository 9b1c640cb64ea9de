//! Grid domain: named positions, mode derivation, and canvas anchors

pub mod coordinates;
pub mod error;
pub mod mode;
pub mod position;

pub use coordinates::{
    hand_point, initial_anchor, layer2_point, MotionTypeClass, Point, CANVAS_SIZE, CENTER,
};
pub use error::GridError;
pub use mode::{derive_mode, derive_mode_lenient, GridMode};
pub use position::{locations_for, position_for, GridPosition};
