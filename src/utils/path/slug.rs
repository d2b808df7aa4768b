//! URL slugification for documentation paths.
//!
//! MyST builds page URLs from the source path: every directory segment is
//! lowercased and runs of anything that is not `[a-z0-9]` collapse to a
//! single `-`. Case changes are *not* word boundaries: `TestMixedCase`
//! becomes `testmixedcase`, not `test-mixed-case`.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Runs of characters that become a single `-`.
static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Convert an extension-less, `/`-separated path into a URL slug.
///
/// Total over all input: empty or separator-only segments yield empty
/// segments, and the number of `/`-separated segments is preserved.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize("nested/Test_File"), "nested/test-file");
/// assert_eq!(sanitize("_LeadingUnderscore"), "leadingunderscore");
/// ```
pub fn sanitize(path: &str) -> String {
    path.split('/')
        .map(sanitize_segment)
        .collect::<Vec<_>>()
        .join("/")
}

fn sanitize_segment(segment: &str) -> String {
    let lower = segment.to_lowercase();
    SEPARATOR_RUN
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_owned()
}

/// Slugify a filesystem path relative to the source root.
///
/// The extension is dropped and components are joined with `/` regardless
/// of platform before [`sanitize`] runs.
pub fn slugify_path(path: impl AsRef<Path>) -> String {
    sanitize(&path_to_url_form(path.as_ref()))
}

/// Join the components of `path` with `/`, dropping the file extension.
pub fn path_to_url_form(path: &Path) -> String {
    let stripped = path.with_extension("");
    stripped
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
