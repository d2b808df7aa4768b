//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `resolve_path`)
//! - [`route`]: URL utilities (`destination_url`, `legacy_page_path`)
//! - [`slug`]: URL slugification (`sanitize`, `slugify_path`)

pub mod fs;
pub mod route;
pub mod slug;

pub use fs::resolve_path;
