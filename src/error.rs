//! Crate-level error type composing the module errors

use thiserror::Error;

use crate::grid::GridError;
use crate::motion::{LeadStateError, MotionError};

/// Errors that can occur inside the placement pipeline.
///
/// These never escape the orchestrator boundary; they exist so internal
/// steps can propagate with `?` before the orchestrator degrades a failed
/// motion to the canvas-center fallback.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// Invalid motion record
    #[error(transparent)]
    Motion(#[from] MotionError),

    /// Lead-state resolution failure
    #[error(transparent)]
    LeadState(#[from] LeadStateError),

    /// Grid position or mode derivation failure
    #[error(transparent)]
    Grid(#[from] GridError),
}
