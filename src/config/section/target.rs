//! `[target]` section configuration.
//!
//! Where the MyST / Jupyter Book v2 site is published.
//!
//! # Example
//!
//! ```toml
//! [target]
//! base_url = "https://example.github.io/book"
//! ```
//!
//! Redirects point at `{base_url}/{slug}/`.

use serde::Deserialize;

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::utils::path::route::is_absolute_http_url;

/// Destination site settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Absolute URL of the new site root.
    pub base_url: Option<String>,
}

impl TargetConfig {
    pub const BASE_URL: FieldPath = FieldPath::new("target.base_url");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self.base_url.as_deref() {
            None | Some("") => diag.error_with_hint(
                Self::BASE_URL,
                "base URL is required to build redirect targets",
                "set `[target] base_url` or pass `--base-url https://...`",
            ),
            Some(url) if !is_absolute_http_url(url) => diag.error(
                Self::BASE_URL,
                format!("`{url}` is not an absolute http(s) URL"),
            ),
            Some(_) => {}
        }
    }
}
