//! `slug` command: print the MyST slug for each path.

use std::path::Path;

use crate::config::RedirectConfig;
use crate::config::SourceConfig;
use crate::utils::path::slug::{sanitize, slugify_path};

/// Print `input -> slug` for every input, one per line on stdout.
pub fn print_slugs(inputs: &[String], config: &RedirectConfig) {
    for input in inputs {
        println!("{} -> {}", input, slug_for_input(input, &config.source));
    }
}

/// Slug for a CLI argument.
///
/// A known source extension (`.md`, `.ipynb`, ...) is stripped first; any
/// other input is treated as an extension-less path, so `v1.2` stays intact.
pub fn slug_for_input(input: &str, source: &SourceConfig) -> String {
    let normalized = input.replace('\\', "/");
    let path = Path::new(&normalized);
    if source.matches_extension(path) {
        slugify_path(path)
    } else {
        sanitize(&normalized)
    }
}
