//! myst-redirects - redirect Jupyter Book v1 pages to their MyST URLs.

mod cli;
mod config;
mod embed;
mod logger;
mod redirect;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::RedirectConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = RedirectConfig::load(&cli)?;

    match &cli.command {
        Commands::Generate { args } => {
            cli::generate::generate_redirects(&config, args.dry_run).map(|_| ())
        }
        Commands::Slug { paths } => {
            cli::slug::print_slugs(paths, &config);
            Ok(())
        }
        Commands::Preview { url } => {
            cli::preview::print_preview(url);
            Ok(())
        }
    }
}
