//! Recursive value model shared by parse results and caller defaults.
//!
//! Mappings merge recursively; every other value (lists included) overwrites
//! wholesale. Key order is insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from keys to values.
pub type Map = IndexMap<String, Value>;

/// A parsed (or default) value.
///
/// `Null` and `Float` never come out of the parser itself; they exist so
/// caller-supplied defaults loaded from JSON keep their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(Map),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Loose truthiness: empty strings, zero, NaN and null are false,
    /// containers are always true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Str(s) => !s.is_empty(),
            Self::List(_) | Self::Map(_) => true,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Self::Map(m)
    }
}

/// Write `value` at a dot-delimited `path`, creating intermediate mappings.
///
/// An intermediate segment that holds a non-mapping value is replaced by an
/// empty mapping. The final segment is always overwritten.
pub fn set_path(target: &mut Map, path: &str, value: Value) {
    let Some((head, tail)) = path.split_once('.') else {
        target.insert(path.to_string(), value);
        return;
    };

    let slot = target
        .entry(head.to_string())
        .or_insert_with(|| Value::Map(Map::new()));
    match slot {
        Value::Map(inner) => set_path(inner, tail, value),
        other => {
            let mut inner = Map::new();
            set_path(&mut inner, tail, value);
            *other = Value::Map(inner);
        }
    }
}

/// Deep-merge `source` into `target` in place.
///
/// Keys holding mappings on both sides merge recursively; anything else from
/// `source` replaces the existing value.
pub fn merge(target: &mut Map, source: Map) {
    for (key, incoming) in source {
        match incoming {
            Value::Map(incoming) => match target.get_mut(&key) {
                Some(Value::Map(existing)) => merge(existing, incoming),
                _ => {
                    target.insert(key, Value::Map(incoming));
                }
            },
            incoming => {
                target.insert(key, incoming);
            }
        }
    }
}
