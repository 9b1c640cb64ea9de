//! Motion domain: notation records and the pure classifiers over them

pub mod error;
pub mod handpath;
pub mod lead_state;
pub mod types;

pub use error::{LeadStateError, MotionError};
pub use handpath::{classify_handpath, HandpathCategory};
pub use lead_state::{assign, leading, trailing};
pub use types::{
    Color, LeadState, Letter, Location, MotionData, MotionType, Orientation, Pictograph,
    RotationDirection, Turns, WorkingMotionType, CLOCKWISE_SEQUENCE,
};
