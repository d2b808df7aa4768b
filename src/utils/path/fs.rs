//! Filesystem path helpers.
//!
//! - `resolve_path` - anchor a relative path at a base directory
//! - `is_skipped_component` - hidden or excluded directory names

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` unless it is already absolute.
///
/// # Example
/// ```ignore
/// // `[source] dir = "book"` in /site/redirects.toml
/// let dir = resolve_path(Path::new("book"), Path::new("/site"));
/// assert_eq!(dir, PathBuf::from("/site/book"));
/// ```
#[inline]
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        normalize_path(&base.join(path))
    }
}

/// Lexically drop `.` components and fold `..` where possible.
///
/// Does not touch the filesystem, so it works for paths that don't exist yet
/// (e.g. an output directory that has not been created).
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// A directory entry name that discovery never descends into.
///
/// Hidden names (leading `.`) are always skipped; `exclude` adds exact names
/// such as `_build`.
pub fn is_skipped_component(name: &str, exclude: &[String]) -> bool {
    (name.starts_with('.') && name != "." && name != "..") || exclude.iter().any(|e| e == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_absolute() {
        let resolved = resolve_path(Path::new("/abs/book"), Path::new("/site"));
        assert_eq!(resolved, PathBuf::from("/abs/book"));
    }

    #[test]
    fn test_resolve_path_relative() {
        let resolved = resolve_path(Path::new("./book"), Path::new("/site"));
        assert_eq!(resolved, PathBuf::from("/site/book"));

        let resolved = resolve_path(Path::new("../shared/book"), Path::new("/site/conf"));
        assert_eq!(resolved, PathBuf::from("/site/shared/book"));
    }

    #[test]
    fn test_normalize_path_keeps_leading_parent() {
        assert_eq!(normalize_path(Path::new("../a/./b")), PathBuf::from("../a/b"));
        assert_eq!(normalize_path(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn test_is_skipped_component() {
        let exclude = vec!["_build".to_string()];
        assert!(is_skipped_component(".git", &exclude));
        assert!(is_skipped_component(".ipynb_checkpoints", &exclude));
        assert!(is_skipped_component("_build", &exclude));
        assert!(!is_skipped_component("_static", &exclude));
        assert!(!is_skipped_component("charters", &exclude));
        assert!(!is_skipped_component(".", &exclude));
    }
}
