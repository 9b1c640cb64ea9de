//! Placement orchestration
//!
//! Composes anchor lookup, mirror decision, rotation, and adjustment into a
//! single drawable placement per motion, plus the whole-pictograph variant.
//! The orchestrator never throws out to the caller: any internal failure
//! degrades that motion to a center-anchored, unrotated, unmirrored
//! placement and the rest of the diagram carries on.

use tracing::warn;

use crate::config::PlacementConfig;
use crate::error::PlacementError;
use crate::grid::{
    derive_mode, derive_mode_lenient, initial_anchor, position_for, GridMode, GridPosition,
    MotionTypeClass, Point,
};
use crate::motion::{Color, Pictograph};

use super::adjustment::adjustment_for;
use super::mirror::should_mirror;
use super::prop::{place_prop, PropPlacement};
use super::rotation::{arrow_location, rotation_for};
use super::special::{OverrideSource, SpecialPlacementStore};

/// Final placement for an arrow glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPlacement {
    pub x: f64,
    pub y: f64,
    /// Degrees in 0..360, SVG convention.
    pub rotation_angle: f64,
    /// Whether the glyph is drawn horizontally flipped.
    pub mirrored: bool,
}

impl ArrowPlacement {
    /// The safe fallback: canvas center, no rotation, no mirror.
    pub fn center_fallback() -> Self {
        let center = Point::center();
        ArrowPlacement {
            x: center.x,
            y: center.y,
            rotation_angle: 0.0,
            mirrored: false,
        }
    }
}

/// Resolved placements for a whole pictograph.
#[derive(Debug, Clone, PartialEq)]
pub struct PictographPlacements {
    pub grid_mode: GridMode,
    /// Named end position, if the end locations form a valid pair.
    pub position: Option<GridPosition>,
    pub blue_arrow: ArrowPlacement,
    pub red_arrow: ArrowPlacement,
    pub blue_prop: PropPlacement,
    pub red_prop: PropPlacement,
}

/// Resolve the arrow placement for one motion. Never fails; internal errors
/// degrade to the canvas-center fallback.
pub fn resolve_arrow<S: OverrideSource>(
    store: &SpecialPlacementStore<S>,
    config: &PlacementConfig,
    pictograph: &Pictograph,
    color: Color,
) -> ArrowPlacement {
    match try_resolve_arrow(store, config, pictograph, color) {
        Ok(placement) => placement,
        Err(err) => {
            warn!(
                %color,
                error = %err,
                "arrow placement failed; falling back to canvas center"
            );
            ArrowPlacement::center_fallback()
        }
    }
}

fn try_resolve_arrow<S: OverrideSource>(
    store: &SpecialPlacementStore<S>,
    config: &PlacementConfig,
    pictograph: &Pictograph,
    color: Color,
) -> Result<ArrowPlacement, PlacementError> {
    let motion = pictograph.motion(color);
    motion.validate()?;

    let grid_mode = derive_mode(&pictograph.blue, &pictograph.red, config.strict_grid_mode)?;
    let working = motion.working_type();
    let arrow_loc = arrow_location(motion);

    let anchor = initial_anchor(MotionTypeClass::from(working), arrow_loc, grid_mode);
    let mirrored = should_mirror(working, motion.rotation_direction);
    let rotation_angle = rotation_for(pictograph, motion, arrow_loc, mirrored);
    let (dx, dy) = adjustment_for(
        store,
        config,
        pictograph,
        motion,
        arrow_loc,
        grid_mode,
        rotation_angle,
    );

    Ok(ArrowPlacement {
        x: anchor.x + dx,
        y: anchor.y + dy,
        rotation_angle,
        mirrored,
    })
}

/// Resolve every placement in a pictograph: both arrows and both props.
///
/// Partial-failure isolation: one bad motion degrades to the center fallback
/// without aborting the rest.
pub fn resolve_pictograph<S: OverrideSource>(
    store: &SpecialPlacementStore<S>,
    config: &PlacementConfig,
    pictograph: &Pictograph,
) -> PictographPlacements {
    let grid_mode = derive_mode_lenient(&pictograph.blue, &pictograph.red);

    let position = match position_for(pictograph.blue.end_loc, pictograph.red.end_loc) {
        Ok(position) => Some(position),
        Err(err) => {
            warn!(error = %err, "end locations name no grid position");
            None
        }
    };

    PictographPlacements {
        grid_mode,
        position,
        blue_arrow: resolve_arrow(store, config, pictograph, Color::Blue),
        red_arrow: resolve_arrow(store, config, pictograph, Color::Red),
        blue_prop: place_prop(config, pictograph, &pictograph.blue, grid_mode),
        red_prop: place_prop(config, pictograph, &pictograph.red, grid_mode),
    }
}
