//! Redirect pages from Jupyter Book v1 locations to MyST slugs.
//!
//! # Pipeline
//!
//! ```text
//! collect_sources ──► plan_redirects ──► detect_conflicts ──► write_redirects
//! (_toc.yml, jwalk)    (slug + URL)       (warn only)          (rayon)
//! ```
//!
//! [`generate_redirect_html`] is the only piece that produces page content;
//! everything else decides where pages go and what they point at.

mod collect;
mod conflict;
mod plan;
mod toc;
mod write;

pub use collect::collect_sources;
pub use conflict::{detect_conflicts, log_conflicts, retain_first_legacy_claim};
pub use plan::{Redirect, plan_redirects};
pub use write::{WriteSummary, write_redirects};

use crate::embed::build::{REDIRECT_HTML, RedirectVars};

/// Render the redirect page for `destination`.
///
/// The URL lands verbatim in the refresh meta tag, the fallback link's
/// `href` and the link text. Nothing is escaped: only pass trusted,
/// absolute URLs.
pub fn generate_redirect_html(destination: &str) -> String {
    REDIRECT_HTML.render(&RedirectVars {
        destination_url: destination,
    })
}
