//! Error types for grid derivation

use thiserror::Error;

use crate::motion::Location;

/// Errors from grid position and grid mode derivation.
#[derive(Debug, Error)]
pub enum GridError {
    /// The location pair is outside the 32-pair domain of named positions.
    /// This is a data-integrity bug in the caller, never a recoverable state.
    #[error("no grid position is defined for location pair ({a}, {b})")]
    UnknownLocationPair { a: Location, b: Location },

    /// Strict grid-mode derivation refused to default a cardinal/intercardinal
    /// mismatch to diamond
    #[error(
        "motions mix cardinal-only and intercardinal-only endpoints; \
         refusing to default to diamond in strict mode"
    )]
    MixedSubsets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_pair_display() {
        let err = GridError::UnknownLocationPair {
            a: Location::N,
            b: Location::NE,
        };
        assert!(err.to_string().contains("(n, ne)"));
    }
}
