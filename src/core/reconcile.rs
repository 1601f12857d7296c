use std::collections::BTreeSet;

use serde::Serialize;

use super::extract::KeyUsages;

/// Outcome of one analysis pass.
///
/// Field order is the order of the emitted JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Literal keys used in source but absent from the dictionary, ascending.
    pub missing_keys: Vec<String>,
    /// Distinct literal keys used. Dynamic keys are not counted.
    pub used_key_count: usize,
    /// Leaf keys in the dictionary.
    pub translation_key_count: usize,
    /// Distinct unresolved template keys, ascending.
    pub dynamic_keys: Vec<String>,
}

pub fn reconcile(dictionary_keys: &BTreeSet<String>, usages: &KeyUsages) -> Report {
    let missing_keys = usages
        .literal
        .difference(dictionary_keys)
        .cloned()
        .collect();

    Report {
        missing_keys,
        used_key_count: usages.literal.len(),
        translation_key_count: dictionary_keys.len(),
        dynamic_keys: usages.dynamic.iter().cloned().collect(),
    }
}
