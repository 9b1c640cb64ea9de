//! Named grid positions: the bijection between location pairs and position names
//!
//! Every valid combination of the two tracked points' locations has exactly
//! one name. Alpha positions hold the points at antipodal locations, beta
//! positions at the identical location, and gamma positions a quarter-turn
//! (two compass steps) apart in either direction: 8 + 8 + 16 = 32 names.

use serde::{Deserialize, Serialize};

use super::error::GridError;
use crate::motion::Location;

/// Named grid position for a (blue location, red location) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridPosition {
    Alpha1,
    Alpha2,
    Alpha3,
    Alpha4,
    Alpha5,
    Alpha6,
    Alpha7,
    Alpha8,
    Beta1,
    Beta2,
    Beta3,
    Beta4,
    Beta5,
    Beta6,
    Beta7,
    Beta8,
    Gamma1,
    Gamma2,
    Gamma3,
    Gamma4,
    Gamma5,
    Gamma6,
    Gamma7,
    Gamma8,
    Gamma9,
    Gamma10,
    Gamma11,
    Gamma12,
    Gamma13,
    Gamma14,
    Gamma15,
    Gamma16,
}

impl GridPosition {
    pub fn name(self) -> &'static str {
        use GridPosition::*;
        match self {
            Alpha1 => "alpha1",
            Alpha2 => "alpha2",
            Alpha3 => "alpha3",
            Alpha4 => "alpha4",
            Alpha5 => "alpha5",
            Alpha6 => "alpha6",
            Alpha7 => "alpha7",
            Alpha8 => "alpha8",
            Beta1 => "beta1",
            Beta2 => "beta2",
            Beta3 => "beta3",
            Beta4 => "beta4",
            Beta5 => "beta5",
            Beta6 => "beta6",
            Beta7 => "beta7",
            Beta8 => "beta8",
            Gamma1 => "gamma1",
            Gamma2 => "gamma2",
            Gamma3 => "gamma3",
            Gamma4 => "gamma4",
            Gamma5 => "gamma5",
            Gamma6 => "gamma6",
            Gamma7 => "gamma7",
            Gamma8 => "gamma8",
            Gamma9 => "gamma9",
            Gamma10 => "gamma10",
            Gamma11 => "gamma11",
            Gamma12 => "gamma12",
            Gamma13 => "gamma13",
            Gamma14 => "gamma14",
            Gamma15 => "gamma15",
            Gamma16 => "gamma16",
        }
    }

    pub fn all() -> [GridPosition; 32] {
        PAIR_TABLE.map(|(_, _, p)| p)
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The full (blue, red) pair table. Alpha entries walk the blue point
/// clockwise from S, beta entries from N; gamma 1-8 put red two clockwise
/// steps ahead of blue, gamma 9-16 two counterclockwise steps.
const PAIR_TABLE: [(Location, Location, GridPosition); 32] = {
    use GridPosition::*;
    use Location::*;
    [
        (S, N, Alpha1),
        (SW, NE, Alpha2),
        (W, E, Alpha3),
        (NW, SE, Alpha4),
        (N, S, Alpha5),
        (NE, SW, Alpha6),
        (E, W, Alpha7),
        (SE, NW, Alpha8),
        (N, N, Beta1),
        (NE, NE, Beta2),
        (E, E, Beta3),
        (SE, SE, Beta4),
        (S, S, Beta5),
        (SW, SW, Beta6),
        (W, W, Beta7),
        (NW, NW, Beta8),
        (W, N, Gamma1),
        (NW, NE, Gamma2),
        (N, E, Gamma3),
        (NE, SE, Gamma4),
        (E, S, Gamma5),
        (SE, SW, Gamma6),
        (S, W, Gamma7),
        (SW, NW, Gamma8),
        (E, N, Gamma9),
        (SE, NE, Gamma10),
        (S, E, Gamma11),
        (SW, SE, Gamma12),
        (W, S, Gamma13),
        (NW, SW, Gamma14),
        (N, W, Gamma15),
        (NE, NW, Gamma16),
    ]
};

/// Resolve a (blue, red) location pair to its grid position.
///
/// Pairs outside the 32-pair domain (one compass step apart, or three) have
/// no name; that is a data-integrity error, never silently defaulted.
pub fn position_for(loc_a: Location, loc_b: Location) -> Result<GridPosition, GridError> {
    PAIR_TABLE
        .iter()
        .find(|(a, b, _)| *a == loc_a && *b == loc_b)
        .map(|(_, _, p)| *p)
        .ok_or(GridError::UnknownLocationPair { a: loc_a, b: loc_b })
}

/// The (blue, red) location pair for a grid position. Total: every position
/// names exactly one pair.
pub fn locations_for(position: GridPosition) -> (Location, Location) {
    use GridPosition::*;
    use Location::*;
    match position {
        Alpha1 => (S, N),
        Alpha2 => (SW, NE),
        Alpha3 => (W, E),
        Alpha4 => (NW, SE),
        Alpha5 => (N, S),
        Alpha6 => (NE, SW),
        Alpha7 => (E, W),
        Alpha8 => (SE, NW),
        Beta1 => (N, N),
        Beta2 => (NE, NE),
        Beta3 => (E, E),
        Beta4 => (SE, SE),
        Beta5 => (S, S),
        Beta6 => (SW, SW),
        Beta7 => (W, W),
        Beta8 => (NW, NW),
        Gamma1 => (W, N),
        Gamma2 => (NW, NE),
        Gamma3 => (N, E),
        Gamma4 => (NE, SE),
        Gamma5 => (E, S),
        Gamma6 => (SE, SW),
        Gamma7 => (S, W),
        Gamma8 => (SW, NW),
        Gamma9 => (E, N),
        Gamma10 => (SE, NE),
        Gamma11 => (S, E),
        Gamma12 => (SW, SE),
        Gamma13 => (W, S),
        Gamma14 => (NW, SW),
        Gamma15 => (N, W),
        Gamma16 => (NE, NW),
    }
}
