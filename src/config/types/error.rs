//! Configuration error types.

use super::FieldPath;
use crate::logger::paint;
use owo_colors::Style;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// One invalid field, with an optional fix.
#[derive(Debug, Clone)]
struct Diagnostic {
    field: FieldPath,
    message: String,
    hint: Option<&'static str>,
}

/// Validation errors collected across all sections, reported together.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<Diagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: &'static str,
    ) {
        self.push(field, message.into(), Some(hint));
    }

    fn push(&mut self, field: FieldPath, message: String, hint: Option<&'static str>) {
        self.errors.push(Diagnostic {
            field,
            message,
            hint,
        });
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Offending fields in report order.
    #[cfg(test)]
    pub fn fields(&self) -> Vec<FieldPath> {
        self.errors.iter().map(|e| e.field).collect()
    }

    /// `Err(self)` when anything was reported.
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimmed = Style::new().dimmed();
        writeln!(
            f,
            "{}\n",
            paint("config validation failed:", Style::new().red().bold())
        )?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f, "\n")?;
            }
            writeln!(
                f,
                "{}{}{}",
                paint("[", dimmed),
                paint(err.field.as_str(), Style::new().cyan()),
                paint("]", dimmed)
            )?;
            write!(f, "{} {}", paint("→", Style::new().red()), err.message)?;
            if let Some(hint) = err.hint {
                write!(f, "\n  {} {hint}", paint("hint:", Style::new().yellow()))?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                paint("found", dimmed),
                paint(self.errors.len(), Style::new().red().bold()),
                paint("errors", dimmed)
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    const BASE_URL: FieldPath = FieldPath::new("target.base_url");

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("redirects.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("redirects.toml"));
    }

    #[test]
    fn test_diagnostics_into_result() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());

        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(BASE_URL, "missing", "pass --base-url");
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.fields(), vec![BASE_URL]);
        assert!(err.to_string().contains("pass --base-url"));
    }

    #[test]
    fn test_diagnostics_display_counts_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(BASE_URL, "first problem");
        diag.error(BASE_URL, "second problem");
        let display = diag.to_string();
        assert!(display.contains("first problem"));
        assert!(display.contains("second problem"));
        assert!(display.contains("target.base_url"));
        assert!(display.contains("errors"));
    }

    #[test]
    fn test_diagnostics_plain_without_color() {
        owo_colors::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(BASE_URL, "missing", "pass --base-url");
        diag.error(BASE_URL, "not absolute");

        let display = ConfigError::Diagnostics(diag).to_string();
        assert!(!display.contains('\x1b'), "escape codes in {display:?}");
        assert!(display.starts_with("config validation failed:"));
        assert!(display.contains("[target.base_url]"));
        assert!(display.ends_with("found 2 errors"));
    }
}
