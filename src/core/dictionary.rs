//! Translation dictionary loading and flattening.
//!
//! A dictionary is a nested JSON object. Only leaves become keys:
//! `{"Common": {"save": "Save"}}` flattens to `Common.save`.

use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// Read and parse a locale file. Nesting depth is not limited.
pub fn load_dictionary(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {}", path.display()))?;

    let mut deserializer = serde_json::Deserializer::from_str(&content);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(&mut deserializer)
        .and_then(|value| deserializer.end().map(|()| value))
        .with_context(|| format!("Failed to parse locale file: {}", path.display()))?;

    Ok(value)
}

/// Collect the dot-joined path of every leaf beneath `value`.
///
/// Anything that is not an object is a leaf, arrays included. A top-level
/// value that is not an object has no keys.
pub fn flatten_keys(value: &Value, prefix: &str) -> BTreeSet<String> {
    let Value::Object(map) = value else {
        return BTreeSet::new();
    };

    map.iter()
        .flat_map(|(key, val)| {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            match val {
                Value::Object(_) => flatten_keys(val, &full_key),
                _ => BTreeSet::from([full_key]),
            }
        })
        .collect()
}
