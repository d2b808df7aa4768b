//! Embedded static resources.
//!
//! - `template` - Template types for typed variable injection
//! - `build` - Output templates (redirect.html)
//!
//! # Usage
//!
//! ```ignore
//! use embed::build::{REDIRECT_HTML, RedirectVars};
//!
//! let html = REDIRECT_HTML.render(&RedirectVars {
//!     destination_url: "https://example.com/overview/",
//! });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod build {
    use super::{Template, TemplateVars};

    /// Placeholder replaced by the redirect destination.
    pub const DESTINATION_PLACEHOLDER: &str = "__DESTINATION_URL__";

    /// Variables for redirect.html template.
    pub struct RedirectVars<'a> {
        pub destination_url: &'a str,
    }

    impl TemplateVars for RedirectVars<'_> {
        // Inserted verbatim: no escaping, no validation.
        fn apply(&self, content: &str) -> String {
            content.replace(DESTINATION_PLACEHOLDER, self.destination_url)
        }
    }

    /// Redirect page: meta refresh plus a fallback link.
    pub const REDIRECT_HTML: Template<RedirectVars<'static>> =
        Template::new(include_str!("build/redirect.html"));
}
