//! Handpath classification: the rotational category of a start -> end pair
//!
//! A motion's handpath is independent of its stored motion type; it describes
//! the purely geometric character of the transition. Rotation tables for
//! float motions and lead-state resolution both key off this category.

use super::types::Location;

/// Rotational category of a single motion's start -> end transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandpathCategory {
    CwShift,
    CcwShift,
    Dash,
    Static,
}

/// Clockwise neighbor pairs among the cardinal locations.
const CARDINAL_CW_PAIRS: [(Location, Location); 4] = [
    (Location::N, Location::E),
    (Location::E, Location::S),
    (Location::S, Location::W),
    (Location::W, Location::N),
];

/// Clockwise neighbor pairs among the intercardinal locations.
const DIAGONAL_CW_PAIRS: [(Location, Location); 4] = [
    (Location::NE, Location::SE),
    (Location::SE, Location::SW),
    (Location::SW, Location::NW),
    (Location::NW, Location::NE),
];

/// Classify a start/end location pair into its handpath category.
///
/// Identity pairs are static, antipodal pairs are dashes, and neighbor pairs
/// within one subset (cardinal or intercardinal) are clockwise or
/// counterclockwise shifts. Any other pair (for example a single-step move
/// that crosses between the subsets) has no category; callers must handle
/// `None`.
pub fn classify_handpath(start: Location, end: Location) -> Option<HandpathCategory> {
    if start == end {
        return Some(HandpathCategory::Static);
    }
    if end == start.antipode() {
        return Some(HandpathCategory::Dash);
    }
    let pair = (start, end);
    if CARDINAL_CW_PAIRS.contains(&pair) || DIAGONAL_CW_PAIRS.contains(&pair) {
        return Some(HandpathCategory::CwShift);
    }
    let reversed = (end, start);
    if CARDINAL_CW_PAIRS.contains(&reversed) || DIAGONAL_CW_PAIRS.contains(&reversed) {
        return Some(HandpathCategory::CcwShift);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_cw_shift() {
        assert_eq!(
            classify_handpath(Location::N, Location::E),
            Some(HandpathCategory::CwShift)
        );
        assert_eq!(
            classify_handpath(Location::W, Location::N),
            Some(HandpathCategory::CwShift)
        );
    }

    #[test]
    fn test_cardinal_ccw_shift() {
        assert_eq!(
            classify_handpath(Location::E, Location::N),
            Some(HandpathCategory::CcwShift)
        );
        assert_eq!(
            classify_handpath(Location::N, Location::W),
            Some(HandpathCategory::CcwShift)
        );
    }

    #[test]
    fn test_diagonal_shifts() {
        assert_eq!(
            classify_handpath(Location::NE, Location::SE),
            Some(HandpathCategory::CwShift)
        );
        assert_eq!(
            classify_handpath(Location::SE, Location::NE),
            Some(HandpathCategory::CcwShift)
        );
    }

    #[test]
    fn test_dash_pairs() {
        for loc in Location::all() {
            assert_eq!(
                classify_handpath(loc, loc.antipode()),
                Some(HandpathCategory::Dash)
            );
        }
    }

    #[test]
    fn test_static_pairs() {
        for loc in Location::all() {
            assert_eq!(classify_handpath(loc, loc), Some(HandpathCategory::Static));
        }
    }

    #[test]
    fn test_cross_subset_pair_is_unclassified() {
        assert_eq!(classify_handpath(Location::N, Location::NE), None);
        assert_eq!(classify_handpath(Location::SW, Location::S), None);
    }
}
