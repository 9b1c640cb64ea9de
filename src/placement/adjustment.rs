//! Arrow pixel adjustment
//!
//! The adjustment is a small offset added to the arrow's anchor point. It
//! comes from the special placement store when the letter has an override
//! entry, and from a default radial formula otherwise. Offsets are expressed
//! in the arrow's local frame and rotated by the arrow's own angle before
//! being applied, so an override tuned at one location stays visually
//! consistent at every rotation of that arrow.

use crate::config::PlacementConfig;
use crate::grid::GridMode;
use crate::motion::{Location, MotionData, Pictograph};

use super::special::{
    layer_folder_for, orientation_key, turns_tuple, OverrideKey, OverrideSource,
    SpecialPlacementStore,
};

/// Compute the world-frame adjustment for an arrow.
pub fn adjustment_for<S: OverrideSource>(
    store: &SpecialPlacementStore<S>,
    config: &PlacementConfig,
    pictograph: &Pictograph,
    motion: &MotionData,
    arrow_loc: Location,
    grid_mode: GridMode,
    rotation_angle: f64,
) -> (f64, f64) {
    let local = special_adjustment(store, pictograph, motion, grid_mode)
        .unwrap_or_else(|| default_adjustment(config, arrow_loc, grid_mode));
    rotate_offset(local, rotation_angle)
}

fn special_adjustment<S: OverrideSource>(
    store: &SpecialPlacementStore<S>,
    pictograph: &Pictograph,
    motion: &MotionData,
    grid_mode: GridMode,
) -> Option<(f64, f64)> {
    let letter = pictograph.letter_for(motion)?.clone();
    let key = OverrideKey {
        grid_mode,
        layer: layer_folder_for(orientation_key(
            pictograph.blue.start_ori,
            pictograph.red.start_ori,
        )),
        letter,
    };
    let turns_key = turns_tuple(pictograph.blue.turns, pictograph.red.turns);
    store.adjustment(&key, &turns_key, motion.color.as_str())
}

/// Default local-frame offset: a radial nudge scaled by grid mode and by
/// whether the arrow sits on a cardinal or diagonal point.
fn default_adjustment(
    config: &PlacementConfig,
    arrow_loc: Location,
    grid_mode: GridMode,
) -> (f64, f64) {
    let mode_scale = match grid_mode {
        GridMode::Diamond | GridMode::Box => 1.0,
        GridMode::Skewed => config.skewed_adjustment_scale,
    };
    let location_scale = if arrow_loc.is_cardinal() {
        1.0
    } else {
        std::f64::consts::FRAC_1_SQRT_2
    };
    (config.default_adjustment_radius * mode_scale * location_scale, 0.0)
}

/// Rotate a local-frame offset into the world frame (SVG convention:
/// clockwise positive, y down).
fn rotate_offset(offset: (f64, f64), degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    let (sin_a, cos_a) = radians.sin_cos();
    let (dx, dy) = offset;
    (dx * cos_a - dy * sin_a, dx * sin_a + dy * cos_a)
}
