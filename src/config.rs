use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Directory names never descended into while scanning sources.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    ".cache",
    ".next",
    "coverage",
    "public",
];

pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx"];

/// Everything the analysis needs to know about a project.
///
/// Paths in `source_root` and `locale_file` are relative to `project_root`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub project_root: PathBuf,
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,
    #[serde(default = "default_locale_file")]
    pub locale_file: PathBuf,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignored_dirs")]
    pub ignored_dirs: Vec<String>,
    #[serde(default = "default_call_names")]
    pub call_names: Vec<String>,
}

fn default_source_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_locale_file() -> PathBuf {
    ["src", "locales", "en.json"].iter().collect()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_ignored_dirs() -> Vec<String> {
    DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_call_names() -> Vec<String> {
    vec!["t".to_string()]
}

impl Config {
    /// Default layout anchored at `project_root`.
    pub fn for_project(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            source_root: default_source_root(),
            locale_file: default_locale_file(),
            extensions: default_extensions(),
            ignored_dirs: default_ignored_dirs(),
            call_names: default_call_names(),
        }
    }

    /// Default layout anchored at the current working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to resolve the current directory.")?;
        Ok(Self::for_project(cwd))
    }

    pub fn source_dir(&self) -> PathBuf {
        self.project_root.join(&self.source_root)
    }

    pub fn locale_path(&self) -> PathBuf {
        self.project_root.join(&self.locale_file)
    }

    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.iter().any(|d| d == name)
    }

    /// Suffix match on the whole file name, so `types.d.ts` counts as `.ts`.
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.extensions.iter().any(|ext| name.ends_with(ext.as_str())))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config.")
    }
}
