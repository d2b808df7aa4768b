//! Config field path used in diagnostics.

use crate::logger::paint;
use owo_colors::Style;
use std::fmt;

/// Dotted path of a `redirects.toml` field, e.g. `target.base_url`.
///
/// Sections expose their paths as associated consts so diagnostics never
/// spell them out by hand:
///
/// ```ignore
/// diag.error(TargetConfig::BASE_URL, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&paint(format!("`{}`", self.0), Style::new().bright_blue()))
    }
}
