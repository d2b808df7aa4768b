//! Source discovery.

use anyhow::Result;
use jwalk::WalkDir;
use std::path::{Path, PathBuf};

use super::toc::{read_toc, resolve_toc};
use crate::config::SourceConfig;
use crate::utils::path::fs::is_skipped_component;
use crate::utils::plural_count;
use crate::{debug, log};

/// Collect every source file under `source.dir` that became a v1 page.
///
/// With a table of contents, those are the pages it lists. Without one,
/// every file with a matching extension counts. Sorted, so output and logs
/// are stable between runs.
pub fn collect_sources(source: &SourceConfig) -> Result<Vec<PathBuf>> {
    let walked = walk_sources(source);

    let Some(toc) = source.toc_path().filter(|path| path.is_file()) else {
        debug!("generate"; "no table of contents, using every source file");
        return Ok(walked);
    };

    let entries = read_toc(&toc)?;
    let files = resolve_toc(&entries, source, &walked);
    log!(
        "toc";
        "{} lists {}",
        toc.display(),
        plural_count(files.len(), "source file")
    );
    Ok(files)
}

/// Every file under `source.dir` with a configured extension.
///
/// Any path with a hidden or excluded component (relative to the source
/// root) is skipped.
fn walk_sources(source: &SourceConfig) -> Vec<PathBuf> {
    let root = source.dir.as_path();
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .skip_hidden(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| source.matches_extension(path))
        .filter(|path| !is_skipped(path, root, &source.exclude))
        .collect();
    files.sort();
    files
}

fn is_skipped(path: &Path, root: &Path, exclude: &[String]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .any(|name| is_skipped_component(name, exclude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# title").unwrap();
    }

    fn relative(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_collect_sources_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "overview.md");
        touch(root, "nested/Test_File.ipynb");
        touch(root, "charters/MediaStrategy.md");
        touch(root, "_static/logo.png");
        touch(root, "_config.yml");
        touch(root, "_build/html/overview.md");
        touch(root, ".ipynb_checkpoints/overview-checkpoint.ipynb");
        touch(root, ".hidden.md");

        let source = SourceConfig {
            dir: root.to_path_buf(),
            ..SourceConfig::default()
        };
        let files = collect_sources(&source).unwrap();
        assert_eq!(
            relative(&files, root),
            vec![
                "charters/MediaStrategy.md",
                "nested/Test_File.ipynb",
                "overview.md"
            ]
        );
    }

    #[test]
    fn test_collect_sources_custom_extensions_and_exclude() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "a.md");
        touch(root, "b.rst");
        touch(root, "drafts/c.md");

        let source = SourceConfig {
            dir: root.to_path_buf(),
            extensions: vec!["md".into()],
            exclude: vec!["drafts".into()],
            ..SourceConfig::default()
        };
        let files = collect_sources(&source).unwrap();
        assert_eq!(relative(&files, root), vec!["a.md"]);
    }

    #[test]
    fn test_collect_sources_missing_dir() {
        let source = SourceConfig {
            dir: PathBuf::from("/nonexistent/book"),
            ..SourceConfig::default()
        };
        assert!(collect_sources(&source).unwrap().is_empty());
    }

    #[test]
    fn test_collect_sources_limited_to_toc() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "intro.md");
        touch(root, "guide/Setup.ipynb");
        touch(root, "notes/draft.md");
        touch(root, "README.md");
        fs::write(
            root.join("_toc.yml"),
            "format: jb-book\nroot: intro\nchapters:\n  - file: guide/Setup\n",
        )
        .unwrap();

        let source = SourceConfig {
            dir: root.to_path_buf(),
            ..SourceConfig::default()
        };
        let files = collect_sources(&source).unwrap();
        assert_eq!(relative(&files, root), vec!["guide/Setup.ipynb", "intro.md"]);

        let walk_all = SourceConfig {
            use_toc: false,
            ..source
        };
        assert_eq!(collect_sources(&walk_all).unwrap().len(), 4);
    }

    #[test]
    fn test_collect_sources_invalid_toc() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "intro.md");
        fs::write(dir.path().join("_toc.yml"), "root: [intro").unwrap();

        let source = SourceConfig {
            dir: dir.path().to_path_buf(),
            ..SourceConfig::default()
        };
        let err = collect_sources(&source).unwrap_err();
        assert!(err.to_string().contains("_toc.yml"));
    }
}
