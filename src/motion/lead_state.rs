//! Lead-state determination for two simultaneous motions
//!
//! Given two motions that share a handpath category, decides which one is
//! geometrically "ahead" on the compass cycle. The resolution order is:
//! chained endpoints first (one motion's end feeding the other's start),
//! then modular angular comparison over the clockwise location sequence.

use super::error::LeadStateError;
use super::handpath::{classify_handpath, HandpathCategory};
use super::types::{LeadState, MotionData};

/// The motion that leads on the compass cycle.
pub fn leading<'a>(
    a: &'a MotionData,
    b: &'a MotionData,
) -> Result<&'a MotionData, LeadStateError> {
    resolve(a, b).map(|(lead, _)| lead)
}

/// The motion that trails on the compass cycle.
pub fn trailing<'a>(
    a: &'a MotionData,
    b: &'a MotionData,
) -> Result<&'a MotionData, LeadStateError> {
    resolve(a, b).map(|(_, trail)| trail)
}

/// Copies of both motions with their lead states filled in.
pub fn assign(
    a: &MotionData,
    b: &MotionData,
) -> Result<(MotionData, MotionData), LeadStateError> {
    let (lead, _) = resolve(a, b)?;
    let a_leads = std::ptr::eq(lead, a);
    let mut a = a.clone();
    let mut b = b.clone();
    a.lead_state = Some(if a_leads { LeadState::Leading } else { LeadState::Trailing });
    b.lead_state = Some(if a_leads { LeadState::Trailing } else { LeadState::Leading });
    Ok((a, b))
}

fn resolve<'a>(
    a: &'a MotionData,
    b: &'a MotionData,
) -> Result<(&'a MotionData, &'a MotionData), LeadStateError> {
    let cat_a = classify_handpath(a.start_loc, a.end_loc);
    let cat_b = classify_handpath(b.start_loc, b.end_loc);
    let category = match (cat_a, cat_b) {
        (Some(ca), Some(cb)) if ca == cb => ca,
        _ => {
            return Err(LeadStateError::IncompatibleHandpaths { a: cat_a, b: cat_b });
        }
    };

    // Chained endpoints: the motion whose end feeds the other's start trails.
    if a.end_loc == b.start_loc {
        return Ok((b, a));
    }
    if b.end_loc == a.start_loc {
        return Ok((a, b));
    }

    // Angular comparison over the clockwise sequence. For clockwise travel the
    // motion on the shorter clockwise arc ahead of the other leads; for
    // counterclockwise travel the sense inverts. Dash and static motions use
    // the clockwise convention.
    let cw_sense = !matches!(category, HandpathCategory::CcwShift);
    Ok(order_by_angle(a, b, cw_sense))
}

fn order_by_angle<'a>(
    a: &'a MotionData,
    b: &'a MotionData,
    cw_sense: bool,
) -> (&'a MotionData, &'a MotionData) {
    let d_ab = a.start_loc.clockwise_distance(b.start_loc);
    let d_ba = b.start_loc.clockwise_distance(a.start_loc);

    if d_ab == d_ba {
        // Antipodal (or identical) starts: compare end locations, and if those
        // tie as well fall back to the clockwise index so the ordering stays
        // independent of argument order.
        let e_ab = a.end_loc.clockwise_distance(b.end_loc);
        let e_ba = b.end_loc.clockwise_distance(a.end_loc);
        if e_ab != e_ba {
            return pick(a, b, e_ab < e_ba, cw_sense);
        }
        let a_first = a.start_loc.clockwise_index() <= b.start_loc.clockwise_index();
        return if a_first { (a, b) } else { (b, a) };
    }

    pick(a, b, d_ab < d_ba, cw_sense)
}

fn pick<'a>(
    a: &'a MotionData,
    b: &'a MotionData,
    b_ahead_cw: bool,
    cw_sense: bool,
) -> (&'a MotionData, &'a MotionData) {
    // b_ahead_cw: b sits on the shorter clockwise arc from a.
    if b_ahead_cw == cw_sense {
        (b, a)
    } else {
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::types::{Color, Location, MotionType, Orientation, RotationDirection, Turns};

    fn shift(id: &str, color: Color, start: Location, end: Location) -> MotionData {
        MotionData::new(
            id,
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
    fn test_incompatible_categories_error() {
        let a = shift("a", Color::Blue, Location::N, Location::E);
        let b = shift("b", Color::Red, Location::E, Location::N);
        let err = leading(&a, &b).unwrap_err();
        assert!(matches!(err, LeadStateError::IncompatibleHandpaths { .. }));
    }

    #[test]
    fn test_chained_motion_trails() {
        // a ends where b starts: a is feeding b, so a trails.
        let a = shift("a", Color::Blue, Location::N, Location::E);
        let b = shift("b", Color::Red, Location::E, Location::S);
        assert_eq!(leading(&a, &b).unwrap().id, "b");
        assert_eq!(trailing(&a, &b).unwrap().id, "a");
    }

    #[test]
    fn test_chained_symmetric_case() {
        let a = shift("a", Color::Blue, Location::E, Location::S);
        let b = shift("b", Color::Red, Location::N, Location::E);
        assert_eq!(leading(&a, &b).unwrap().id, "a");
    }

    #[test]
    fn test_angular_cw_resolution() {
        // Clockwise shifts starting at NW and E: E sits 3 clockwise steps
        // ahead of NW (versus 5 the other way), so the E motion leads.
        let a = shift("a", Color::Blue, Location::NW, Location::NE);
        let b = shift("b", Color::Red, Location::E, Location::S);
        assert_eq!(leading(&a, &b).unwrap().id, "b");
        assert_eq!(trailing(&a, &b).unwrap().id, "a");
    }

    #[test]
    fn test_angular_ccw_resolution() {
        // Counterclockwise shifts starting at N and SE: SE is clockwise-ahead
        // of N, so under the inverted sense the N motion leads.
        let a = shift("a", Color::Blue, Location::N, Location::W);
        let b = shift("b", Color::Red, Location::SE, Location::NE);
        assert_eq!(leading(&a, &b).unwrap().id, "a");
        assert_eq!(trailing(&a, &b).unwrap().id, "b");
    }

    #[test]
    fn test_totality_distinct_starts() {
        let a = shift("a", Color::Blue, Location::NW, Location::NE);
        let b = shift("b", Color::Red, Location::E, Location::S);
        let lead = leading(&a, &b).unwrap().id.clone();
        let trail = trailing(&a, &b).unwrap().id.clone();
        assert_ne!(lead, trail);
        assert!(["a", "b"].contains(&lead.as_str()));
        assert!(["a", "b"].contains(&trail.as_str()));
    }

    #[test]
    fn test_antipodal_starts_stable_across_argument_order() {
        let a = shift("a", Color::Blue, Location::W, Location::N);
        let b = shift("b", Color::Red, Location::E, Location::S);
        assert_eq!(leading(&a, &b).unwrap().id, leading(&b, &a).unwrap().id);
        assert_eq!(trailing(&a, &b).unwrap().id, trailing(&b, &a).unwrap().id);
    }

    #[test]
    fn test_assign_sets_lead_states() {
        let a = shift("a", Color::Blue, Location::NW, Location::NE);
        let b = shift("b", Color::Red, Location::E, Location::S);
        let (a2, b2) = assign(&a, &b).unwrap();
        assert_eq!(a2.lead_state, Some(LeadState::Trailing));
        assert_eq!(b2.lead_state, Some(LeadState::Leading));
    }
}
