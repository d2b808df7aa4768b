//! `[output]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [output]
//! dir = "_build/html"     # Where redirect pages are written
//! clean = false           # Remove the directory before writing
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// Output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving `<old path>.html` files.
    pub dir: PathBuf,

    /// Remove `dir` before writing.
    pub clean: bool,
}

impl OutputConfig {
    pub const DIR: FieldPath = FieldPath::new("output.dir");

    /// `clean` must never remove the sources.
    pub fn validate(&self, source_dir: &Path, diag: &mut ConfigDiagnostics) {
        if self.clean && source_dir.starts_with(&self.dir) {
            diag.error_with_hint(
                Self::DIR,
                format!(
                    "refusing to clean `{}`: it contains the source directory",
                    self.dir.display()
                ),
                "choose a dedicated output directory or drop `clean`",
            );
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("_build/html"),
            clean: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_output_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.output.dir, PathBuf::from("_build/html"));
        assert!(!config.output.clean);
    }

    #[test]
    fn test_output_parsing() {
        let config = test_parse_config("[output]\ndir = \"public\"\nclean = true");
        assert_eq!(config.output.dir, PathBuf::from("public"));
        assert!(config.output.clean);
    }

    #[test]
    fn test_clean_refuses_source_parent() {
        let output = OutputConfig {
            dir: PathBuf::from("/site"),
            clean: true,
        };
        let mut diag = ConfigDiagnostics::new();
        output.validate(Path::new("/site/book"), &mut diag);
        assert_eq!(diag.len(), 1);

        let mut diag = ConfigDiagnostics::new();
        output.validate(Path::new("/elsewhere"), &mut diag);
        assert_eq!(diag.len(), 0);
    }

    #[test]
    fn test_no_clean_allows_same_dir() {
        let output = OutputConfig {
            dir: PathBuf::from("/site"),
            clean: false,
        };
        let mut diag = ConfigDiagnostics::new();
        output.validate(Path::new("/site"), &mut diag);
        assert_eq!(diag.len(), 0);
    }
}
