//! Conflict detection between planned redirects.
//!
//! Two kinds of collision matter:
//! - several sources sanitize to the same slug (`Test_File.md`, `test-file.md`),
//!   so one of them will not exist on the new site under that URL
//! - several sources share a legacy page (`intro.md`, `intro.ipynb`), so the
//!   later write would overwrite the earlier one
//!
//! Both are reported as warnings; generation continues. A shared legacy page
//! is written once, for the first source in plan order.

use std::path::PathBuf;

use rustc_hash::{FxHashMap, FxHashSet};

use super::Redirect;
use crate::log;
use crate::utils::plural_count;

/// What the conflicting sources share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Slug,
    LegacyPath,
}

impl ConflictKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::LegacyPath => "page",
        }
    }
}

/// Several sources claiming the same slug or legacy page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectConflict {
    pub kind: ConflictKind,
    /// The shared slug or legacy URL
    pub key: String,
    /// Sources relative to the source root, in plan order
    pub sources: Vec<PathBuf>,
}

/// Find every slug and legacy page claimed by more than one source.
///
/// Result is sorted by kind, then key.
pub fn detect_conflicts(redirects: &[Redirect]) -> Vec<RedirectConflict> {
    let mut conflicts = collect_duplicates(redirects, ConflictKind::Slug, |r| r.slug.clone());
    conflicts.extend(collect_duplicates(
        redirects,
        ConflictKind::LegacyPath,
        Redirect::legacy_url,
    ));
    conflicts
}

fn collect_duplicates(
    redirects: &[Redirect],
    kind: ConflictKind,
    key_of: impl Fn(&Redirect) -> String,
) -> Vec<RedirectConflict> {
    let mut claims: FxHashMap<String, Vec<PathBuf>> = FxHashMap::default();
    for redirect in redirects {
        claims
            .entry(key_of(redirect))
            .or_default()
            .push(redirect.source.clone());
    }

    let mut conflicts: Vec<_> = claims
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(key, sources)| RedirectConflict { kind, key, sources })
        .collect();
    conflicts.sort_by(|a, b| a.key.cmp(&b.key));
    conflicts
}

/// Keep only the first redirect for each legacy page.
///
/// Afterwards every output file has exactly one writer.
pub fn retain_first_legacy_claim(redirects: &mut Vec<Redirect>) {
    let mut seen = FxHashSet::default();
    redirects.retain(|r| seen.insert(r.legacy_path.clone()));
}

/// Print conflicts using the standard log format.
///
/// Output format:
/// ```text
/// [conflict] slug `test-file` (2 sources)
///   - Test_File.md
///   - test-file.md
/// ```
pub fn log_conflicts(conflicts: &[RedirectConflict]) {
    for conflict in conflicts {
        log!(
            "conflict";
            "{} `{}` ({})",
            conflict.kind.label(),
            conflict.key,
            plural_count(conflict.sources.len(), "source")
        );
        for source in &conflict.sources {
            eprintln!("  - {}", source.display());
        }
    }
}
