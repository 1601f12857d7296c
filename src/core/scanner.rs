//! Source tree traversal.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;

/// Lazily walk the configured source root, yielding every source file.
///
/// Any non-directory entry with a source extension is yielded, including
/// dangling symlinks, so that reading it fails instead of skipping it.
///
/// Ignored directories below the root are pruned before they are entered.
/// Entries are visited in file-name order, so walking an unchanged tree
/// twice gives the same sequence. Walk errors are yielded to the caller
/// rather than ending the walk.
pub fn source_files(config: &Config) -> impl Iterator<Item = walkdir::Result<PathBuf>> + '_ {
    WalkDir::new(config.source_dir())
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !is_pruned(entry, config))
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                let path = entry.path();
                let is_candidate =
                    !entry.file_type().is_dir() && !path.is_dir() && config.is_source_file(path);
                is_candidate.then(|| Ok(entry.into_path()))
            }
            Err(e) => Some(Err(e)),
        })
}

fn is_pruned(entry: &DirEntry, config: &Config) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.is_ignored_dir(name))
}

/// Read a source file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))
}
