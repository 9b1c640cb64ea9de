//! Special placement store: per-letter pixel adjustment overrides
//!
//! Override tables are partitioned by grid mode, layer folder, and letter,
//! then keyed by the beat's turns tuple and finally by arrow identity. The
//! data source is injected behind [`OverrideSource`]; the bundled
//! implementation reads TOML documents the same way stylesheets usually do,
//! with an embedded default document.
//!
//! Key matching is deliberately forgiving about whitespace because the
//! documents are hand-edited: turns tuples match exactly or
//! whitespace-insensitively, arrow keys match exactly or trimmed on either
//! side. A miss at any stage is a typed `None`, never an error.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use thiserror::Error;
use tracing::warn;

use crate::grid::GridMode;
use crate::motion::{Letter, Orientation, Turns};

/// Adjustment entries for one letter: turns tuple -> arrow key -> (dx, dy).
pub type OverrideTable = HashMap<String, HashMap<String, [f64; 2]>>;

/// Layer partition for override tables, derived from the orientation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerFolder {
    FromLayer1,
    FromLayer3Blue1Red2,
    NotFound,
}

impl LayerFolder {
    pub fn as_str(self) -> &'static str {
        match self {
            LayerFolder::FromLayer1 => "from_layer1",
            LayerFolder::FromLayer3Blue1Red2 => "from_layer3_blue1_red2",
            LayerFolder::NotFound => "not_found",
        }
    }
}

/// Orientation key for a beat, naming which layer its adjustments live in.
///
/// Layer 1 is both points radial, layer 2 both non-radial, layer 3 mixed.
pub fn orientation_key(blue: Orientation, red: Orientation) -> &'static str {
    match (blue.is_radial(), red.is_radial()) {
        (true, true) => "from_layer1",
        (false, false) => "from_layer2",
        (true, false) => "from_layer3_blue1_red2",
        (false, true) => "from_layer3_blue2_red1",
    }
}

/// Map an orientation key string onto a layer folder by substring.
///
/// Only layer 1 and the blue1/red2 flavor of layer 3 have override data;
/// everything else resolves to `NotFound` and the store reports a miss.
pub fn layer_folder_for(orientation_key: &str) -> LayerFolder {
    if orientation_key.contains("layer1") {
        LayerFolder::FromLayer1
    } else if orientation_key.contains("layer3") {
        LayerFolder::FromLayer3Blue1Red2
    } else {
        LayerFolder::NotFound
    }
}

/// Turns tuple key for a beat, blue first: `"(1, 0.5)"`, `"(0, fl)"`.
pub fn turns_tuple(blue: Turns, red: Turns) -> String {
    format!("({}, {})", blue, red)
}

/// Address of one override table in the external document store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverrideKey {
    pub grid_mode: GridMode,
    pub layer: LayerFolder,
    pub letter: Letter,
}

/// Injected retrieval of override tables. The store never knows where the
/// documents come from; a miss is `None`.
pub trait OverrideSource {
    fn fetch(&self, key: &OverrideKey) -> Option<OverrideTable>;
}

/// Errors loading a TOML override document.
#[derive(Debug, Error)]
pub enum OverrideError {
    #[error("failed to read override document: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse override document TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Nested document shape: grid mode -> layer folder -> letter -> table.
type Document = HashMap<String, HashMap<String, HashMap<String, OverrideTable>>>;

/// Default override document bundled with the crate. Sparse on purpose:
/// only letters whose geometry the default formula gets wrong need entries.
const DEFAULT_OVERRIDES: &str = r#"
[diamond.from_layer1."Φ-"."(0, 0)"]
blue = [25.0, -10.0]
red = [-25.0, 10.0]

[diamond.from_layer1."Ψ-"."(0, 0)"]
blue = [0.0, -25.0]
red = [0.0, 25.0]

[diamond.from_layer1."Λ"."(0, 0)"]
blue = [18.0, 0.0]
red = [-18.0, 0.0]

[diamond.from_layer3_blue1_red2."G"."(1, 1)"]
blue = [12.0, -8.0]
red = [-12.0, 8.0]

[box.from_layer1."Ψ-"."(0, 0.5)"]
blue = [0.0, -22.0]
red = [0.0, 22.0]
"#;

/// Override source backed by a TOML document.
#[derive(Debug, Clone)]
pub struct TomlOverrideSource {
    document: Document,
}

impl TomlOverrideSource {
    pub fn from_str(content: &str) -> Result<Self, OverrideError> {
        let document: Document = toml::from_str(content)?;
        Ok(Self { document })
    }

    pub fn from_file(path: &Path) -> Result<Self, OverrideError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// An empty source, for callers that want the default formula only.
    pub fn empty() -> Self {
        Self {
            document: Document::new(),
        }
    }
}

impl Default for TomlOverrideSource {
    fn default() -> Self {
        Self::from_str(DEFAULT_OVERRIDES).expect("embedded override document should be valid TOML")
    }
}

impl OverrideSource for TomlOverrideSource {
    fn fetch(&self, key: &OverrideKey) -> Option<OverrideTable> {
        self.document
            .get(key.grid_mode.as_str())?
            .get(key.layer.as_str())?
            .get(key.letter.as_str())
            .cloned()
    }
}

/// Indexed, memoized access to the override tables.
///
/// Tables are fetched from the source once per key and cached; `reload`
/// drops the cache so updated documents are picked up.
pub struct SpecialPlacementStore<S: OverrideSource> {
    source: S,
    cache: RwLock<HashMap<OverrideKey, Option<OverrideTable>>>,
}

impl<S: OverrideSource> SpecialPlacementStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Look up the pixel adjustment for an arrow, or `None` on any miss.
    pub fn adjustment(
        &self,
        key: &OverrideKey,
        turns_key: &str,
        arrow_key: &str,
    ) -> Option<(f64, f64)> {
        if key.layer == LayerFolder::NotFound {
            return None;
        }
        self.ensure_cached(key);

        let cache = match self.cache.read() {
            Ok(cache) => cache,
            Err(_) => {
                warn!("special placement cache lock poisoned; treating as a miss");
                return None;
            }
        };
        let table = cache.get(key)?.as_ref()?;
        let arrows = match_turns_key(table, turns_key)?;
        match_arrow_key(arrows, arrow_key).map(|[dx, dy]| (dx, dy))
    }

    /// Drop the memoized tables; the next lookup re-fetches from the source.
    pub fn reload(&self) {
        match self.cache.write() {
            Ok(mut cache) => cache.clear(),
            Err(_) => warn!("special placement cache lock poisoned; reload skipped"),
        }
    }

    fn ensure_cached(&self, key: &OverrideKey) {
        {
            let cache = match self.cache.read() {
                Ok(cache) => cache,
                Err(_) => return,
            };
            if cache.contains_key(key) {
                return;
            }
        }
        let fetched = self.source.fetch(key);
        if let Ok(mut cache) = self.cache.write() {
            cache.entry(key.clone()).or_insert(fetched);
        }
    }
}

/// Turns tuple matching: exact, then whitespace-insensitive.
fn match_turns_key<'a>(
    table: &'a OverrideTable,
    turns_key: &str,
) -> Option<&'a HashMap<String, [f64; 2]>> {
    if let Some(arrows) = table.get(turns_key) {
        return Some(arrows);
    }
    let normalized = strip_whitespace(turns_key);
    table
        .iter()
        .find(|(k, _)| strip_whitespace(k) == normalized)
        .map(|(_, v)| v)
}

/// Arrow key matching: exact, trimmed input, then trimmed table key.
fn match_arrow_key(arrows: &HashMap<String, [f64; 2]>, arrow_key: &str) -> Option<[f64; 2]> {
    if let Some(entry) = arrows.get(arrow_key) {
        return Some(*entry);
    }
    let trimmed = arrow_key.trim();
    if let Some(entry) = arrows.get(trimmed) {
        return Some(*entry);
    }
    arrows
        .iter()
        .find(|(k, _)| k.trim() == trimmed)
        .map(|(_, v)| *v)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
