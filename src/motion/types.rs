//! Core domain types for the motion notation
//!
//! Everything here is a closed set: the notation only ever speaks about eight
//! compass locations, four orientations, and a handful of motion categories.
//! Geometry downstream is pure table lookup over these enums, so identical
//! notation always resolves to identical placements.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::MotionError;

/// One of the eight compass locations a tracked point can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// The canonical clockwise ordering of locations.
///
/// This is the only ordering the engine recognizes; all angular comparisons
/// (lead-state resolution, shift midpoints) are modular walks over this array.
pub const CLOCKWISE_SEQUENCE: [Location; 8] = [
    Location::NW,
    Location::N,
    Location::NE,
    Location::E,
    Location::SE,
    Location::S,
    Location::SW,
    Location::W,
];

impl Location {
    /// All eight locations, in clockwise order starting from NW.
    pub fn all() -> [Location; 8] {
        CLOCKWISE_SEQUENCE
    }

    /// Whether this is one of the four cardinal directions (N/E/S/W).
    pub fn is_cardinal(self) -> bool {
        matches!(self, Location::N | Location::E | Location::S | Location::W)
    }

    /// Whether this is one of the four intercardinal directions.
    pub fn is_intercardinal(self) -> bool {
        !self.is_cardinal()
    }

    /// The location directly opposite on the compass.
    pub fn antipode(self) -> Location {
        match self {
            Location::N => Location::S,
            Location::NE => Location::SW,
            Location::E => Location::W,
            Location::SE => Location::NW,
            Location::S => Location::N,
            Location::SW => Location::NE,
            Location::W => Location::E,
            Location::NW => Location::SE,
        }
    }

    /// Index of this location in [`CLOCKWISE_SEQUENCE`].
    pub fn clockwise_index(self) -> usize {
        match self {
            Location::NW => 0,
            Location::N => 1,
            Location::NE => 2,
            Location::E => 3,
            Location::SE => 4,
            Location::S => 5,
            Location::SW => 6,
            Location::W => 7,
        }
    }

    /// Number of clockwise steps from `self` to `other` (0..=7).
    pub fn clockwise_distance(self, other: Location) -> usize {
        (other.clockwise_index() + 8 - self.clockwise_index()) % 8
    }

    /// The location `steps` clockwise steps away.
    pub fn step_clockwise(self, steps: usize) -> Location {
        CLOCKWISE_SEQUENCE[(self.clockwise_index() + steps) % 8]
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Location::N => "n",
            Location::NE => "ne",
            Location::E => "e",
            Location::SE => "se",
            Location::S => "s",
            Location::SW => "sw",
            Location::W => "w",
            Location::NW => "nw",
        };
        write!(f, "{}", s)
    }
}

/// Orientation of a tracked point relative to the grid center.
///
/// `In`/`Out` are radial, `Clock`/`Counter` are non-radial. The split gates
/// which lookup table applies in rotation and beta-offset calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    In,
    Out,
    Clock,
    Counter,
}

impl Orientation {
    pub fn is_radial(self) -> bool {
        matches!(self, Orientation::In | Orientation::Out)
    }
}

/// Motion type as it is stored in notation records.
///
/// Deliberately has no float variant: float is a transient working state and
/// must never be persisted. See [`WorkingMotionType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    Pro,
    Anti,
    Dash,
    Static,
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Dash => "dash",
            MotionType::Static => "static",
        };
        write!(f, "{}", s)
    }
}

/// Motion type as the calculators see it, including the transient float state.
///
/// A motion works as `Float` when a pro/anti record carries the float turns
/// sentinel. The storage enum cannot represent float, so the "float is never
/// persisted" invariant holds by construction rather than by runtime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkingMotionType {
    Pro,
    Anti,
    Float,
    Dash,
    Static,
}

impl From<MotionType> for WorkingMotionType {
    fn from(t: MotionType) -> Self {
        match t {
            MotionType::Pro => WorkingMotionType::Pro,
            MotionType::Anti => WorkingMotionType::Anti,
            MotionType::Dash => WorkingMotionType::Dash,
            MotionType::Static => WorkingMotionType::Static,
        }
    }
}

/// Direction of rotation for a motion's arrow glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationDirection {
    Cw,
    Ccw,
    #[serde(rename = "none")]
    NoRotation,
}

/// Turn count for a motion: a half-step rational in 0..=3, or the float
/// sentinel marking a transient float motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TurnsRepr", into = "TurnsRepr")]
pub enum Turns {
    /// Number of half-turns (0..=6, i.e. 0 through 3 in half steps).
    Half(u8),
    /// Transient float sentinel (`"fl"` in notation).
    Float,
}

impl Turns {
    pub const ZERO: Turns = Turns::Half(0);

    /// Build from a turn count; must be a multiple of 0.5 in 0..=3.
    pub fn new(value: f64) -> Result<Self, MotionError> {
        let halves = value * 2.0;
        let rounded = halves.round();
        if (halves - rounded).abs() > 1e-9 || !(0.0..=6.0).contains(&rounded) {
            return Err(MotionError::InvalidTurns { value });
        }
        Ok(Turns::Half(rounded as u8))
    }

    /// The numeric turn count, or `None` for the float sentinel.
    pub fn value(self) -> Option<f64> {
        match self {
            Turns::Half(h) => Some(f64::from(h) / 2.0),
            Turns::Float => None,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Turns::Half(0)
    }

    pub fn is_float(self) -> bool {
        self == Turns::Float
    }

    /// True for the odd half counts 0.5, 1.5 and 2.5, which select the
    /// alternate anti rotation table.
    pub fn is_odd_half(self) -> bool {
        matches!(self, Turns::Half(1) | Turns::Half(3) | Turns::Half(5))
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turns::Float => write!(f, "fl"),
            Turns::Half(h) if h % 2 == 0 => write!(f, "{}", h / 2),
            Turns::Half(h) => write!(f, "{}.5", h / 2),
        }
    }
}

/// Serde bridge: turns appear in beat files either as a number or as `"fl"`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TurnsRepr {
    Count(f64),
    Sentinel(String),
}

impl TryFrom<TurnsRepr> for Turns {
    type Error = MotionError;

    fn try_from(repr: TurnsRepr) -> Result<Self, Self::Error> {
        match repr {
            TurnsRepr::Count(v) => Turns::new(v),
            TurnsRepr::Sentinel(s) if s == "fl" => Ok(Turns::Float),
            TurnsRepr::Sentinel(s) => Err(MotionError::InvalidTurnsSentinel { value: s }),
        }
    }
}

impl From<Turns> for TurnsRepr {
    fn from(turns: Turns) -> Self {
        match turns.value() {
            Some(v) => TurnsRepr::Count(v),
            None => TurnsRepr::Sentinel("fl".to_string()),
        }
    }
}

/// Color identifying one of the two tracked points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Notation letter, used only as a key into the override tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Letter(pub String);

impl Letter {
    pub fn new(s: impl Into<String>) -> Self {
        Letter(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_phi_dash(&self) -> bool {
        self.0 == "Φ-"
    }

    pub fn is_psi_dash(&self) -> bool {
        self.0 == "Ψ-"
    }

    pub fn is_psi(&self) -> bool {
        self.0 == "Ψ"
    }

    pub fn is_lambda(&self) -> bool {
        self.0 == "Λ"
    }

    pub fn is_lambda_dash(&self) -> bool {
        self.0 == "Λ-"
    }

    /// Letters whose dash arrows carry hard-coded zero-turn angles.
    pub fn has_dash_angle_override(&self) -> bool {
        self.is_phi_dash() || self.is_psi_dash() || self.is_lambda() || self.is_lambda_dash()
    }

    /// Letters whose static arrows carry hard-coded zero-turn angles.
    pub fn has_static_angle_override(&self) -> bool {
        self.is_psi()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a motion leads or trails its sibling on the compass cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadState {
    Leading,
    Trailing,
}

/// Immutable per-tracked-point motion record for one beat.
///
/// Construction is validated: static motions must not move, dash motions must
/// travel between antipodal locations, and the float turns sentinel is only
/// meaningful on pro/anti shifts. Violations are data-integrity errors and
/// abort construction rather than produce silently-wrong geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MotionData {
    pub id: String,
    pub color: Color,
    pub motion_type: MotionType,
    pub start_loc: Location,
    pub end_loc: Location,
    pub start_ori: Orientation,
    /// Always derived from start orientation, motion type and turns by the
    /// orientation calculator upstream; stored opaque here.
    pub end_ori: Orientation,
    pub rotation_direction: RotationDirection,
    pub turns: Turns,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_state: Option<LeadState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<Letter>,
}

impl MotionData {
    /// Validate the record's internal invariants.
    pub fn validate(&self) -> Result<(), MotionError> {
        match self.motion_type {
            MotionType::Static if self.start_loc != self.end_loc => {
                return Err(MotionError::StaticEndpoints {
                    start: self.start_loc,
                    end: self.end_loc,
                });
            }
            MotionType::Dash if self.end_loc != self.start_loc.antipode() => {
                return Err(MotionError::DashEndpoints {
                    start: self.start_loc,
                    end: self.end_loc,
                });
            }
            MotionType::Dash | MotionType::Static if self.turns.is_float() => {
                return Err(MotionError::FloatOnNonShift {
                    motion_type: self.motion_type,
                });
            }
            _ => {}
        }
        Ok(())
    }

    /// Validating constructor; prefer this over a bare struct literal when
    /// the fields come from external data.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        color: Color,
        motion_type: MotionType,
        start_loc: Location,
        end_loc: Location,
        start_ori: Orientation,
        end_ori: Orientation,
        rotation_direction: RotationDirection,
        turns: Turns,
    ) -> Result<Self, MotionError> {
        let motion = MotionData {
            id: id.into(),
            color,
            motion_type,
            start_loc,
            end_loc,
            start_ori,
            end_ori,
            rotation_direction,
            turns,
            lead_state: None,
            letter: None,
        };
        motion.validate()?;
        Ok(motion)
    }

    /// The motion type the calculators dispatch on: float when a shift record
    /// carries the float turns sentinel, the stored type otherwise.
    pub fn working_type(&self) -> WorkingMotionType {
        match (self.motion_type, self.turns) {
            (MotionType::Pro | MotionType::Anti, Turns::Float) => WorkingMotionType::Float,
            (t, _) => t.into(),
        }
    }
}

/// One notation beat: an optional letter plus one motion per tracked point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pictograph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<Letter>,
    pub blue: MotionData,
    pub red: MotionData,
}

impl Pictograph {
    pub fn new(letter: Option<Letter>, blue: MotionData, red: MotionData) -> Self {
        Pictograph { letter, blue, red }
    }

    pub fn motion(&self, color: Color) -> &MotionData {
        match color {
            Color::Blue => &self.blue,
            Color::Red => &self.red,
        }
    }

    /// The sibling of the motion with the given color.
    pub fn other(&self, color: Color) -> &MotionData {
        self.motion(color.other())
    }

    /// Both tracked points end at the identical location (the beta case).
    pub fn ends_with_beta(&self) -> bool {
        self.blue.end_loc == self.red.end_loc
    }

    /// The letter governing a motion's overrides: the motion's own letter if
    /// set, the beat letter otherwise.
    pub fn letter_for<'a>(&'a self, motion: &'a MotionData) -> Option<&'a Letter> {
        motion.letter.as_ref().or(self.letter.as_ref())
    }

    /// Validate both motions and the color assignment.
    pub fn validate(&self) -> Result<(), MotionError> {
        if self.blue.color != Color::Blue || self.red.color != Color::Red {
            return Err(MotionError::ColorMismatch);
        }
        self.blue.validate()?;
        self.red.validate()?;
        Ok(())
    }
}
