use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use geo::{LineString, Polygon};
use serde_json::{Number, Value};

/// Value of the grouping attribute shared by an outline and its cross-sections.
///
/// Ids compare by their normalized text, so a numeric `10` in one layer groups
/// with a textual `"10"` in the other. Numeric ids are written back as numbers.
#[derive(Clone, Debug)]
pub struct GlacierId {
    key: String,
    numeric: bool,
}

impl GlacierId {
    pub fn new(id: impl Into<String>) -> GlacierId {
        GlacierId {
            key: id.into(),
            numeric: false,
        }
    }

    pub fn numeric(id: impl Into<String>) -> GlacierId {
        GlacierId {
            key: id.into(),
            numeric: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// The id as an attribute value, a number if it was read as one
    pub fn to_value(&self) -> Value {
        if self.numeric {
            if let Ok(n) = self.key.parse::<Number>() {
                return Value::Number(n);
            }
        }
        Value::String(self.key.clone())
    }
}

impl PartialEq for GlacierId {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for GlacierId {}

impl Hash for GlacierId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for GlacierId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GlacierId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for GlacierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

#[derive(Clone, Debug)]
pub struct CrossSection {
    // position in the cross-section layer
    pub index: usize,
    pub line: LineString,
}

#[derive(Clone, Debug)]
pub struct GlacierGroup {
    pub id: GlacierId,
    pub outline: Polygon,
    pub cross_sections: Vec<CrossSection>,
}
