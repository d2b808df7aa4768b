//! Redirect page writing.
//!
//! Pages are independent files, so they are written in parallel.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::Redirect;
use crate::logger::ProgressLine;
use crate::{debug, log};

/// Outcome of a `write_redirects` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Pages written to disk (0 on dry runs)
    pub written: usize,
    /// Pages that would be written on a dry run
    pub planned: usize,
}

/// Write every redirect page under `output_dir`.
///
/// With `clean`, `output_dir` is removed first. With `dry_run`, each page is
/// logged and nothing on disk changes (`clean` included).
pub fn write_redirects(
    redirects: &[Redirect],
    output_dir: &Path,
    clean: bool,
    dry_run: bool,
) -> Result<WriteSummary> {
    if dry_run {
        for redirect in redirects {
            log!("dry-run"; "{} -> {}", redirect.legacy_url(), redirect.destination);
        }
        return Ok(WriteSummary {
            written: 0,
            planned: redirects.len(),
        });
    }

    if clean && output_dir.exists() {
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("failed to clean `{}`", output_dir.display()))?;
        debug!("clean"; "removed {}", output_dir.display());
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create `{}`", output_dir.display()))?;

    let progress = ProgressLine::new("redirect", &[("pages", redirects.len())]);
    redirects
        .par_iter()
        .try_for_each(|redirect| -> Result<()> {
            write_redirect_file(redirect, output_dir)?;
            debug!("redirect"; "{} -> {}", redirect.legacy_url(), redirect.destination);
            progress.inc("pages");
            Ok(())
        })?;
    progress.finish();

    Ok(WriteSummary {
        written: redirects.len(),
        planned: redirects.len(),
    })
}

/// `nested/Test_File.html` -> `{output_dir}/nested/Test_File.html`
fn compute_output_path(redirect: &Redirect, output_dir: &Path) -> PathBuf {
    output_dir.join(&redirect.legacy_path)
}

fn write_redirect_file(redirect: &Redirect, output_dir: &Path) -> Result<()> {
    let output_file = compute_output_path(redirect, output_dir);

    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }

    fs::write(&output_file, redirect.html())
        .with_context(|| format!("failed to write `{}`", output_file.display()))?;

    Ok(())
}
