//! `[source]` section configuration.
//!
//! Where the Jupyter Book v1 sources live and which files become redirects.
//!
//! # Example
//!
//! ```toml
//! [source]
//! dir = "."                                        # Book root (relative to redirects.toml)
//! extensions = ["md", "ipynb", "rst"]              # Files that produced v1 pages
//! exclude = ["_build", ".ipynb_checkpoints"]       # Directory names to skip
//! toc = "_toc.yml"                                 # Table of contents (relative to dir)
//! use_toc = true                                   # Only redirect pages the TOC lists
//! ```
//!
//! Hidden directories (leading `.`) are always skipped. When the book has a
//! table of contents, only the pages it lists become redirects.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::utils::path::resolve_path;

/// Source discovery settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Book root directory.
    pub dir: PathBuf,

    /// File extensions (without dot) that Jupyter Book rendered to pages.
    pub extensions: Vec<String>,

    /// Directory names never descended into.
    pub exclude: Vec<String>,

    /// Jupyter Book table of contents, relative to `dir`.
    pub toc: PathBuf,

    /// Restrict sources to the TOC when the file exists.
    pub use_toc: bool,
}

impl SourceConfig {
    pub const DIR: FieldPath = FieldPath::new("source.dir");
    pub const EXTENSIONS: FieldPath = FieldPath::new("source.extensions");

    /// Table of contents to read, unless disabled.
    pub fn toc_path(&self) -> Option<PathBuf> {
        self.use_toc.then(|| resolve_path(&self.toc, &self.dir))
    }

    /// Whether `path` has one of the configured extensions (case-insensitive).
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Drop a leading `.` users tend to write (`".md"` -> `"md"`).
    pub fn normalize_extensions(&mut self) {
        for ext in &mut self.extensions {
            *ext = ext.trim().trim_start_matches('.').to_string();
        }
        self.extensions.retain(|e| !e.is_empty());
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.dir.is_dir() {
            diag.error_with_hint(
                Self::DIR,
                format!("source directory `{}` does not exist", self.dir.display()),
                "point `[source] dir` or `--source` at the Jupyter Book root",
            );
        }
        if self.extensions.is_empty() {
            diag.error(Self::EXTENSIONS, "at least one extension is required");
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            extensions: vec!["md".into(), "ipynb".into(), "rst".into()],
            exclude: vec!["_build".into(), ".ipynb_checkpoints".into(), ".git".into()],
            toc: PathBuf::from("_toc.yml"),
            use_toc: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_source_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.source.dir, PathBuf::from("."));
        assert_eq!(config.source.extensions, vec!["md", "ipynb", "rst"]);
        assert!(config.source.exclude.contains(&"_build".to_string()));
        assert_eq!(config.source.toc, PathBuf::from("_toc.yml"));
        assert!(config.source.use_toc);
    }

    #[test]
    fn test_toc_path() {
        let config = test_parse_config("[source]\ndir = \"/book\"\ntoc = \"meta/toc.yml\"");
        let mut source = config.source;
        assert_eq!(source.toc_path(), Some(PathBuf::from("/book/meta/toc.yml")));

        source.use_toc = false;
        assert_eq!(source.toc_path(), None);
    }

    #[test]
    fn test_source_parsing() {
        let config =
            test_parse_config("[source]\ndir = \"book\"\nextensions = [\"md\"]\nexclude = []");
        assert_eq!(config.source.dir, PathBuf::from("book"));
        assert_eq!(config.source.extensions, vec!["md"]);
        assert!(config.source.exclude.is_empty());
    }

    #[test]
    fn test_matches_extension() {
        let source = SourceConfig::default();
        assert!(source.matches_extension(Path::new("a/intro.md")));
        assert!(source.matches_extension(Path::new("Notebook.IPYNB")));
        assert!(!source.matches_extension(Path::new("logo.png")));
        assert!(!source.matches_extension(Path::new("Makefile")));
    }

    #[test]
    fn test_normalize_extensions() {
        let mut source = SourceConfig {
            extensions: vec![".md".into(), " ipynb ".into(), ".".into()],
            ..SourceConfig::default()
        };
        source.normalize_extensions();
        assert_eq!(source.extensions, vec!["md", "ipynb"]);
    }

    #[test]
    fn test_validate_missing_dir() {
        let source = SourceConfig {
            dir: PathBuf::from("/nonexistent/book"),
            extensions: Vec::new(),
            ..SourceConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        source.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.fields(), vec![SourceConfig::DIR, SourceConfig::EXTENSIONS]);
    }
}
