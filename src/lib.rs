//! Keygap - find translation keys used in source but missing from the locale file
//!
//! Keygap flattens a nested JSON locale file into dot-delimited keys, scans
//! JavaScript/TypeScript sources for `t("...")` calls, and reports which
//! literal keys have no translation. Template keys such as `` t(`a.${b}`) ``
//! are listed separately since their value is only known at runtime.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, output, exit status)
//! - `config`: Project layout and scan settings
//! - `core`: Analysis engine (flatten, scan, reconcile)

pub mod cli;
pub mod config;
pub mod core;
