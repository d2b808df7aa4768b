//! Configuration management for `redirects.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [source], [target], [output]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file discovery
//! └── mod.rs         # RedirectConfig (this file)
//! ```
//!
//! The file is optional: without one, defaults apply and the CLI supplies
//! whatever else is needed (usually `--base-url`).

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{OutputConfig, SourceConfig, TargetConfig};
pub use types::{ConfigDiagnostics, ConfigError};

use crate::{
    cli::{Cli, Commands, GenerateArgs},
    log,
    utils::path::resolve_path,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing redirects.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedirectConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative config paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Source discovery
    #[serde(default)]
    pub source: SourceConfig,

    /// New site location
    #[serde(default)]
    pub target: TargetConfig,

    /// Redirect page output
    #[serde(default)]
    pub output: OutputConfig,
}

impl RedirectConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file; the project root is its
    /// parent directory, or cwd when no file exists. CLI options are applied
    /// on top, then `generate` is validated.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None => Self {
                root: cwd.clone(),
                ..Self::default()
            },
        };

        config.normalize_paths();

        if let Commands::Generate { args } = &cli.command {
            config.apply_generate_args(args, &cwd);
            config.validate()?;
        }

        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Resolve config-relative paths against the root.
    fn normalize_paths(&mut self) {
        self.source.dir = resolve_path(&self.source.dir, &self.root);
        self.output.dir = resolve_path(&self.output.dir, &self.root);
        self.source.normalize_extensions();
    }

    /// Apply generate arguments from CLI.
    ///
    /// CLI paths are relative to cwd, not to the config file.
    fn apply_generate_args(&mut self, args: &GenerateArgs, cwd: &Path) {
        crate::logger::set_verbose(args.verbose);

        if let Some(source) = &args.source {
            self.source.dir = resolve_path(source, cwd);
        }
        if let Some(output) = &args.output {
            self.output.dir = resolve_path(output, cwd);
        }
        if let Some(url) = &args.base_url {
            self.target.base_url = Some(url.clone());
        }
        if let Some(extensions) = &args.extensions {
            self.source.extensions = extensions.clone();
            self.source.normalize_extensions();
        }
        self.source.use_toc &= !args.no_toc;
        self.output.clean |= args.clean;
    }

    /// Validate everything `generate` depends on, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.source.validate(&mut diag);
        self.target.validate(&mut diag);
        self.output.validate(&self.source.dir, &mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Base URL after validation. Empty when unset.
    pub fn base_url(&self) -> &str {
        self.target.base_url.as_deref().unwrap_or_default()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> RedirectConfig {
    let (parsed, ignored) = RedirectConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Config rooted at `source`, ready for `generate`.
#[cfg(test)]
pub fn test_config(source: &Path, output: &Path) -> RedirectConfig {
    RedirectConfig {
        root: source.to_path_buf(),
        source: SourceConfig {
            dir: source.to_path_buf(),
            ..SourceConfig::default()
        },
        target: TargetConfig {
            base_url: Some("https://example.com".to_string()),
        },
        output: OutputConfig {
            dir: output.to_path_buf(),
            clean: false,
        },
        ..RedirectConfig::default()
    }
}

// ============================================================================
// tests
// ============================================================================
