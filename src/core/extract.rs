//! Lexical detection of translation calls such as `t("Common.save")`.
//!
//! This is a pattern match over raw text, not a parse. It does not see
//! concatenated arguments, escaped quotes, or keys passed through variables.

use std::collections::BTreeSet;

use anyhow::{Context, Result, ensure};
use regex::Regex;

/// Marker that opens a template-literal interpolation.
pub const INTERPOLATION_MARKER: &str = "${";

/// One key argument found in a translation call.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyUsage {
    /// Fully spelled out in the source, e.g. `t("nav.home")`.
    Literal(String),
    /// Template with interpolation, e.g. `` t(`item.${id}.label`) ``. Kept raw.
    Dynamic(String),
}

impl KeyUsage {
    pub fn classify(payload: &str) -> Self {
        if payload.contains(INTERPOLATION_MARKER) {
            Self::Dynamic(payload.to_string())
        } else {
            Self::Literal(payload.to_string())
        }
    }
}

/// Distinct key usages, split by kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyUsages {
    pub literal: BTreeSet<String>,
    pub dynamic: BTreeSet<String>,
}

impl KeyUsages {
    pub fn insert(&mut self, usage: KeyUsage) {
        match usage {
            KeyUsage::Literal(key) => self.literal.insert(key),
            KeyUsage::Dynamic(key) => self.dynamic.insert(key),
        };
    }

    pub fn merge(&mut self, other: KeyUsages) {
        self.literal.extend(other.literal);
        self.dynamic.extend(other.dynamic);
    }
}

impl FromIterator<KeyUsage> for KeyUsages {
    fn from_iter<I: IntoIterator<Item = KeyUsage>>(iter: I) -> Self {
        let mut usages = Self::default();
        iter.into_iter().for_each(|usage| usages.insert(usage));
        usages
    }
}

/// Finds translation calls for a fixed set of call names.
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    pattern: Regex,
}

impl KeyExtractor {
    /// Build an extractor matching `name(` followed by a quoted key, for each name.
    ///
    /// The payload may not contain any quote character, so `t("it's")`
    /// is not a match. `\s*` spans newlines, so calls split across lines match.
    pub fn new(call_names: &[String]) -> Result<Self> {
        ensure!(!call_names.is_empty(), "At least one call name is required.");

        let names = call_names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(
            r#"\b(?:{names})\(\s*(?:"([^"'`]+)"|'([^"'`]+)'|`([^"'`]+)`)"#
        );
        let pattern = Regex::new(&source)
            .with_context(|| format!("Invalid translation call pattern: {}", source))?;

        Ok(Self { pattern })
    }

    /// Every key usage in `source`, in order of appearance.
    pub fn extract<'a>(&'a self, source: &'a str) -> impl Iterator<Item = KeyUsage> + 'a {
        self.pattern.captures_iter(source).filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|payload| KeyUsage::classify(payload.as_str()))
        })
    }
}
