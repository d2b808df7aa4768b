//! Configuration section definitions.
//!
//! Each module corresponds to a section in `redirects.toml`:
//!
//! | Module   | TOML Section | Purpose                              |
//! |----------|--------------|--------------------------------------|
//! | `source` | `[source]`   | Book root, extensions, exclusions    |
//! | `target` | `[target]`   | New site base URL                    |
//! | `output` | `[output]`   | Redirect page directory              |

mod output;
mod source;
mod target;

pub use output::OutputConfig;
pub use source::SourceConfig;
pub use target::TargetConfig;
