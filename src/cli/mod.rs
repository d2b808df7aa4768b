//! Command-line interface module.

mod args;
pub mod generate;
pub mod preview;
pub mod slug;

pub use args::{Cli, Commands, GenerateArgs};
