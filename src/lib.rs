//! Kinetic Pictograph - motion-to-geometry resolution for a two-point movement notation
//!
//! This library turns abstract motion records (how two tracked points move
//! between compass-grid locations) into drawable placements: position,
//! rotation angle, and mirror flag for directional arrows and prop glyphs on
//! a fixed 950x950 canvas. Identical notation always resolves to identical
//! geometry; every calculator is a pure function over immutable inputs.
//!
//! # Example
//!
//! ```rust
//! use kinetic_pictograph::motion::{
//!     Color, Location, MotionData, MotionType, Orientation, Pictograph, RotationDirection, Turns,
//! };
//! use kinetic_pictograph::{resolve, PlacementConfig};
//!
//! let blue = MotionData::new(
//!     "b1", Color::Blue, MotionType::Pro,
//!     Location::N, Location::E,
//!     Orientation::In, Orientation::In,
//!     RotationDirection::Cw, Turns::Half(2),
//! ).unwrap();
//! let red = MotionData::new(
//!     "r1", Color::Red, MotionType::Pro,
//!     Location::S, Location::W,
//!     Orientation::In, Orientation::In,
//!     RotationDirection::Cw, Turns::Half(2),
//! ).unwrap();
//!
//! let placements = resolve(&Pictograph::new(None, blue, red), &PlacementConfig::default());
//! assert!(!placements.blue_arrow.mirrored);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod motion;
pub mod placement;

pub use config::PlacementConfig;
pub use error::PlacementError;
pub use grid::{GridMode, GridPosition, Point, CANVAS_SIZE, CENTER};
pub use motion::{MotionData, Pictograph};
pub use placement::{
    resolve_pictograph, ArrowPlacement, PictographPlacements, PropPlacement,
    SpecialPlacementStore, TomlOverrideSource,
};

/// Resolve a pictograph with the bundled override document.
///
/// This is the main entry point for the library. Callers that manage their
/// own override data should build a [`SpecialPlacementStore`] and use
/// [`resolve_pictograph`] directly.
pub fn resolve(pictograph: &Pictograph, config: &PlacementConfig) -> PictographPlacements {
    let store = SpecialPlacementStore::new(TomlOverrideSource::default());
    resolve_pictograph(&store, config, pictograph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{
        Color, Location, MotionType, Orientation, RotationDirection, Turns,
    };

    fn pro(color: Color, start: Location, end: Location) -> MotionData {
        MotionData::new(
            format!("{}-m", color),
            color,
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
    fn test_resolve_produces_all_placements() {
        let picto = Pictograph::new(
            None,
            pro(Color::Blue, Location::N, Location::E),
            pro(Color::Red, Location::S, Location::W),
        );
        let placements = resolve(&picto, &PlacementConfig::default());
        assert_eq!(placements.grid_mode, GridMode::Diamond);
        assert!(placements.position.is_some());
        assert!((0.0..360.0).contains(&placements.blue_arrow.rotation_angle));
        assert!((0.0..360.0).contains(&placements.red_arrow.rotation_angle));
    }
}
