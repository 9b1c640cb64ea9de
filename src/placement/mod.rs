//! Placement engine: rotation, mirroring, adjustment, and orchestration
//!
//! This module turns motion records into drawable placements. Everything is
//! a pure function of its inputs; the only state anywhere is the override
//! store's memoization cache.

pub mod adjustment;
pub mod mirror;
pub mod orchestrator;
pub mod prop;
pub mod rotation;
pub mod special;

pub use adjustment::adjustment_for;
pub use mirror::{apply_mirror, should_mirror};
pub use orchestrator::{
    resolve_arrow, resolve_pictograph, ArrowPlacement, PictographPlacements,
};
pub use prop::{place_prop, PropPlacement};
pub use rotation::{arrow_location, rotation_for};
pub use special::{
    layer_folder_for, orientation_key, turns_tuple, LayerFolder, OverrideError, OverrideKey,
    OverrideSource, OverrideTable, SpecialPlacementStore, TomlOverrideSource,
};
