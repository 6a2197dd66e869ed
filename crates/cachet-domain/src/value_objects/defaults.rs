//! Fallback values for multi-key reads

use serde_json::Value;
use std::collections::HashMap;

/// Fallback used by `get_multiple` for keys that are not cached
#[derive(Debug, Clone, PartialEq)]
pub enum MultipleDefault {
    /// One fallback shared by every key
    Single(Option<Value>),
    /// A fallback per key; keys missing from the map fall back to `None`
    PerKey(HashMap<String, Value>),
}

impl MultipleDefault {
    /// Fallback for `key`
    pub fn for_key(&self, key: &str) -> Option<Value> {
        match self {
            Self::Single(value) => value.clone(),
            Self::PerKey(values) => values.get(key).cloned(),
        }
    }
}

impl Default for MultipleDefault {
    fn default() -> Self {
        Self::Single(None)
    }
}

impl From<Value> for MultipleDefault {
    fn from(value: Value) -> Self {
        Self::Single(Some(value))
    }
}

impl From<Option<Value>> for MultipleDefault {
    fn from(value: Option<Value>) -> Self {
        Self::Single(value)
    }
}

impl From<HashMap<String, Value>> for MultipleDefault {
    fn from(values: HashMap<String, Value>) -> Self {
        Self::PerKey(values)
    }
}
