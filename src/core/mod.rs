//! Core analysis engine.
//!
//! One pass in strict sequence:
//!
//! 1. **Flatten**: load the locale file and flatten it to leaf keys (`dictionary`)
//! 2. **Scan**: walk the source tree (`scanner`) and pull key usages out of each file (`extract`)
//! 3. **Reconcile**: diff used literal keys against the dictionary (`reconcile`)

pub mod dictionary;
pub mod extract;
pub mod reconcile;
pub mod scanner;

pub use dictionary::{flatten_keys, load_dictionary};
pub use extract::{KeyExtractor, KeyUsage, KeyUsages};
pub use reconcile::{Report, reconcile};
pub use scanner::{read_source, source_files};

use anyhow::Result;

use crate::config::Config;

/// A directory entry the walk could not visit.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    pub path: Option<String>,
    pub error: String,
}

/// Report plus the bookkeeping shown in verbose mode.
#[derive(Debug)]
pub struct Analysis {
    pub report: Report,
    pub source_files_checked: usize,
    pub warnings: Vec<ScanWarning>,
}

/// Run the whole analysis for `config`.
///
/// A missing or malformed locale file, or a source file that cannot be read
/// as UTF-8, aborts the run. Directories the walk cannot enter are skipped
/// and recorded as warnings.
pub fn analyze(config: &Config) -> Result<Analysis> {
    let dictionary = load_dictionary(&config.locale_path())?;
    let dictionary_keys = flatten_keys(&dictionary, "");

    let extractor = KeyExtractor::new(&config.call_names)?;
    let mut usages = KeyUsages::default();
    let mut source_files_checked = 0;
    let mut warnings = Vec::new();

    for entry in source_files(config) {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warnings.push(ScanWarning {
                    path: e.path().map(|p| p.display().to_string()),
                    error: e.to_string(),
                });
                continue;
            }
        };

        let source = read_source(&path)?;
        usages.merge(extractor.extract(&source).collect());
        source_files_checked += 1;
    }

    Ok(Analysis {
        report: reconcile(&dictionary_keys, &usages),
        source_files_checked,
        warnings,
    })
}
