//! Mapping source files to redirect targets.

use std::path::{Path, PathBuf};

use crate::utils::path::route::{destination_url, legacy_page_path};
use crate::utils::path::slug::slugify_path;

/// One redirect page to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Source file relative to the source root (`nested/Test_File.md`)
    pub source: PathBuf,
    /// Where v1 served it, relative to the output dir (`nested/Test_File.html`)
    pub legacy_path: PathBuf,
    /// MyST slug (`nested/test-file`)
    pub slug: String,
    /// Absolute target URL (`https://example.com/nested/test-file/`)
    pub destination: String,
}

impl Redirect {
    pub fn new(relative_source: &Path, base_url: &str) -> Self {
        let slug = slugify_path(relative_source);
        let destination = destination_url(base_url, &slug);
        Self {
            source: relative_source.to_path_buf(),
            legacy_path: legacy_page_path(relative_source),
            slug,
            destination,
        }
    }

    /// Render this redirect's page.
    pub fn html(&self) -> String {
        super::generate_redirect_html(&self.destination)
    }

    /// Legacy URL path as a browser would request it (`/nested/Test_File.html`).
    pub fn legacy_url(&self) -> String {
        let parts: Vec<_> = self
            .legacy_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        format!("/{}", parts.join("/"))
    }
}

/// Plan one redirect per source file.
///
/// `sources` may be absolute (under `source_dir`) or already relative.
pub fn plan_redirects(sources: &[PathBuf], source_dir: &Path, base_url: &str) -> Vec<Redirect> {
    sources
        .iter()
        .map(|path| {
            let relative = path.strip_prefix(source_dir).unwrap_or(path);
            Redirect::new(relative, base_url)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com";

    #[test]
    fn test_redirect_new() {
        let redirect = Redirect::new(Path::new("nested/Test_File.md"), BASE);
        assert_eq!(redirect.source, PathBuf::from("nested/Test_File.md"));
        assert_eq!(redirect.legacy_path, PathBuf::from("nested/Test_File.html"));
        assert_eq!(redirect.slug, "nested/test-file");
        assert_eq!(redirect.destination, "https://example.com/nested/test-file/");
        assert_eq!(redirect.legacy_url(), "/nested/Test_File.html");
    }

    #[test]
    fn test_plan_redirects_scenarios() {
        let sources: Vec<PathBuf> = [
            "overview.md",
            "Test_File.md",
            "TestMixedCase.md",
            "Test With Spaces.md",
            "_LeadingUnderscore.md",
            "Multiple___Special.md",
            "charters/MediaStrategy.md",
            "nested/Test_File.md",
        ]
        .iter()
        .map(|p| Path::new("/book").join(p))
        .collect();

        let slugs: Vec<_> = plan_redirects(&sources, Path::new("/book"), BASE)
            .into_iter()
            .map(|r| r.slug)
            .collect();
        assert_eq!(
            slugs,
            vec![
                "overview",
                "test-file",
                "testmixedcase",
                "test-with-spaces",
                "leadingunderscore",
                "multiple-special",
                "charters/mediastrategy",
                "nested/test-file",
            ]
        );
    }

    #[test]
    fn test_plan_redirects_relative_sources() {
        let plan = plan_redirects(&[PathBuf::from("intro.ipynb")], Path::new("/book"), BASE);
        assert_eq!(plan[0].legacy_path, PathBuf::from("intro.html"));
        assert_eq!(plan[0].destination, "https://example.com/intro/");
    }

    #[test]
    fn test_redirect_html_points_at_destination() {
        let redirect = Redirect::new(Path::new("overview.md"), "https://example.com/");
        let html = redirect.html();
        assert!(html.contains(r#"content="0; url=https://example.com/overview/""#));
    }
}
