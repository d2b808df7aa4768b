//! `generate` command: discover sources, plan and write redirect pages.

use anyhow::Result;

use crate::config::RedirectConfig;
use crate::redirect::{
    WriteSummary, collect_sources, detect_conflicts, log_conflicts, plan_redirects,
    retain_first_legacy_claim, write_redirects,
};
use crate::utils::plural_count;
use crate::{debug, log};

/// Run the full pipeline for a validated config.
pub fn generate_redirects(config: &RedirectConfig, dry_run: bool) -> Result<WriteSummary> {
    if let Some(path) = &config.config_path {
        debug!("config"; "using {}", path.display());
    }

    let sources = collect_sources(&config.source)?;
    if sources.is_empty() {
        log!(
            "warning";
            "no source files ({}) found in {}",
            config.source.extensions.join(", "),
            config.source.dir.display()
        );
        return Ok(WriteSummary::default());
    }
    log!(
        "generate";
        "found {} in {}",
        plural_count(sources.len(), "source file"),
        config.source.dir.display()
    );

    let mut redirects = plan_redirects(&sources, &config.source.dir, config.base_url());

    let conflicts = detect_conflicts(&redirects);
    if !conflicts.is_empty() {
        log!(
            "warning";
            "{} found, the first source in each group wins",
            plural_count(conflicts.len(), "conflict")
        );
        log_conflicts(&conflicts);
        retain_first_legacy_claim(&mut redirects);
    }

    let summary = write_redirects(
        &redirects,
        &config.output.dir,
        config.output.clean,
        dry_run,
    )?;

    if dry_run {
        log!(
            "dry-run";
            "would write {} to {}",
            plural_count(summary.planned, "redirect page"),
            config.output.dir.display()
        );
    } else {
        log!(
            "generate";
            "wrote {} to {}",
            plural_count(summary.written, "redirect page"),
            config.output.dir.display()
        );
    }

    Ok(summary)
}
