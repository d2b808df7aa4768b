//! URL helpers for redirect targets and legacy page locations.
//!
//! - Destination URLs: `base_url` + slug, always with a trailing slash
//! - Legacy locations: where Jupyter Book v1 served a source file

use std::path::{Path, PathBuf};

/// Build the MyST destination URL for a slug.
///
/// Trailing slashes on `base_url` are trimmed so the join never produces `//`.
/// An empty slug points at the site root.
///
/// # Examples
/// ```ignore
/// assert_eq!(destination_url("https://example.com", "overview"), "https://example.com/overview/");
/// assert_eq!(destination_url("https://example.com/docs/", "a/b"), "https://example.com/docs/a/b/");
/// assert_eq!(destination_url("https://example.com", ""), "https://example.com/");
/// ```
pub fn destination_url(base_url: &str, slug: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let slug = slug.trim_matches('/');
    if slug.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{slug}/")
    }
}

/// Where Jupyter Book v1 served a source file: same relative path, `.html`.
///
/// Case and punctuation are kept as-is because that is what old links point at.
///
/// # Examples
/// ```ignore
/// assert_eq!(legacy_page_path(Path::new("nested/Test_File.md")), PathBuf::from("nested/Test_File.html"));
/// ```
#[inline]
pub fn legacy_page_path(relative_source: &Path) -> PathBuf {
    relative_source.with_extension("html")
}

/// Check if a string parses as an absolute `http(s)` URL.
pub fn is_absolute_http_url(candidate: &str) -> bool {
    url::Url::parse(candidate)
        .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_url() {
        assert_eq!(
            destination_url("https://example.com", "overview"),
            "https://example.com/overview/"
        );
        assert_eq!(
            destination_url("https://example.com/", "nested/test-file"),
            "https://example.com/nested/test-file/"
        );
        assert_eq!(
            destination_url("https://example.github.io/book///", "a"),
            "https://example.github.io/book/a/"
        );
    }

    #[test]
    fn test_destination_url_empty_slug() {
        assert_eq!(destination_url("https://example.com", ""), "https://example.com/");
        assert_eq!(destination_url("https://example.com/docs/", ""), "https://example.com/docs/");
    }

    #[test]
    fn test_legacy_page_path() {
        assert_eq!(
            legacy_page_path(Path::new("overview.md")),
            PathBuf::from("overview.html")
        );
        assert_eq!(
            legacy_page_path(Path::new("nested/Test_File.ipynb")),
            PathBuf::from("nested/Test_File.html")
        );
    }

    #[test]
    fn test_is_absolute_http_url() {
        assert!(is_absolute_http_url("https://example.com"));
        assert!(is_absolute_http_url("http://localhost:3000/docs"));
        assert!(!is_absolute_http_url("example.com"));
        assert!(!is_absolute_http_url("/docs/"));
        assert!(!is_absolute_http_url("mailto:user@example.com"));
        assert!(!is_absolute_http_url("file:///tmp/site"));
    }
}
