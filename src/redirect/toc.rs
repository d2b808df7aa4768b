//! Jupyter Book v1 table of contents (`_toc.yml`).
//!
//! Only pages listed in the TOC were published, so when a book has one it
//! decides which sources get redirects. Both layouts are understood:
//!
//! ```yaml
//! format: jb-book            # root + parts/chapters, nested sections
//! root: intro
//! parts:
//!   - caption: Guide
//!     chapters:
//!       - file: guide/setup
//!         sections:
//!           - file: guide/Advanced_Setup.md
//!       - glob: notebooks/*
//!       - url: https://example.com   # off-site, skipped
//! ```
//!
//! `jb-article` books use `root` + `sections`; older books use top-level
//! `chapters`, or `subtrees`/`entries`. One node shape covers all of them.

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SourceConfig;
use crate::log;
use crate::utils::path::fs::normalize_path;
use crate::utils::path::slug::path_to_url_form;

/// Page reference found in the TOC, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocEntry {
    /// Path relative to the book root, extension optional.
    File(String),
    /// Pattern over extension-less paths relative to the book root.
    Glob(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TocNode {
    root: Option<String>,
    file: Option<String>,
    glob: Option<String>,
    parts: Vec<TocNode>,
    chapters: Vec<TocNode>,
    sections: Vec<TocNode>,
    subtrees: Vec<TocNode>,
    entries: Vec<TocNode>,
}

impl TocNode {
    fn visit(&self, out: &mut Vec<TocEntry>) {
        if let Some(root) = &self.root {
            out.push(TocEntry::File(root.clone()));
        }
        if let Some(file) = &self.file {
            out.push(TocEntry::File(file.clone()));
        }
        if let Some(glob) = &self.glob {
            out.push(TocEntry::Glob(glob.clone()));
        }
        let children = self
            .parts
            .iter()
            .chain(&self.chapters)
            .chain(&self.sections)
            .chain(&self.subtrees)
            .chain(&self.entries);
        for child in children {
            child.visit(out);
        }
    }
}

/// Read every page reference from a `_toc.yml`.
pub fn read_toc(path: &Path) -> Result<Vec<TocEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read table of contents {}", path.display()))?;
    parse_toc(&content)
        .with_context(|| format!("Failed to parse table of contents {}", path.display()))
}

fn parse_toc(content: &str) -> Result<Vec<TocEntry>> {
    let root: TocNode = serde_yaml::from_str(content)?;
    let mut entries = Vec::new();
    root.visit(&mut entries);
    Ok(entries)
}

/// Map TOC entries to source files under `source.dir`.
///
/// `file` entries without an extension take the first configured extension
/// that exists on disk. `glob` entries are matched against `walked`, the
/// files discovery found. Entries with no source file are skipped with a
/// warning. The result is sorted and free of duplicates.
pub fn resolve_toc(
    entries: &[TocEntry],
    source: &SourceConfig,
    walked: &[PathBuf],
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in entries {
        match entry {
            TocEntry::File(file) => match resolve_file(file, source) {
                Some(path) => files.push(path),
                None => log!(
                    "warning";
                    "toc entry `{}` has no source file in the book, skipping",
                    file
                ),
            },
            TocEntry::Glob(pattern) => files.extend(match_glob(pattern, &source.dir, walked)),
        }
    }
    files.sort();
    files.dedup();
    files
}

fn resolve_file(file: &str, source: &SourceConfig) -> Option<PathBuf> {
    let path = normalize_path(&source.dir.join(file.trim_start_matches('/')));
    if !path.starts_with(normalize_path(&source.dir)) {
        return None;
    }
    if source.matches_extension(&path) && path.is_file() {
        return Some(path);
    }
    source
        .extensions
        .iter()
        .map(|ext| {
            let mut candidate = path.clone().into_os_string();
            candidate.push(".");
            candidate.push(ext);
            PathBuf::from(candidate)
        })
        .find(|candidate| candidate.is_file())
}

fn match_glob(pattern: &str, root: &Path, walked: &[PathBuf]) -> Vec<PathBuf> {
    let Ok(compiled) = Pattern::new(pattern.trim_start_matches('/')) else {
        log!("warning"; "invalid toc glob `{}`, skipping", pattern);
        return Vec::new();
    };
    let options = MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    };
    walked
        .iter()
        .filter(|path| {
            let relative = path.strip_prefix(root).unwrap_or(path.as_path());
            compiled.matches_with(&path_to_url_form(relative), options)
        })
        .cloned()
        .collect()
}
