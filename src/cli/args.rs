//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Redirect Jupyter Book v1 page URLs to their MyST slugs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: redirects.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "redirects.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write one redirect page per source file
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Print the slug for each path
    #[command(visible_alias = "s")]
    Slug {
        /// Paths relative to the book root. Known source extensions are stripped.
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
    },

    /// Print the redirect page for a destination URL
    #[command(visible_alias = "p")]
    Preview {
        /// Destination URL, inserted verbatim
        #[arg(value_hint = clap::ValueHint::Url)]
        url: String,
    },
}

/// Generate command arguments. Each one overrides `redirects.toml`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Jupyter Book v1 source directory
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Directory receiving the redirect pages
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Base URL of the new MyST site.
    ///
    /// Example: redirect to a GitHub Pages project site:
    ///   myst-redirects generate --base-url "https://example.github.io/book"
    #[arg(short = 'U', long = "base-url", value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Source file extensions (comma-separated, e.g. `md,ipynb`)
    #[arg(short, long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Redirect every source file, even when the book has a _toc.yml
    #[arg(long)]
    pub no_toc: bool,

    /// Remove the output directory before writing
    #[arg(short, long)]
    pub clean: bool,

    /// Show what would be written without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
