//! Lodestar CLI Application
//!
//! Command-line interface for generating personalized AI learning
//! roadmaps from a course catalog.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use lodestar_core::Catalog;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

/// Catalog bundled into the binary, used when no --catalog-file is given.
const DEFAULT_CATALOG: &str = include_str!("../data/catalog.json");

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let catalog = match catalog_file {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::from_path(&path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?
        }
        None => Catalog::from_json(DEFAULT_CATALOG).context("Bundled catalog is invalid")?,
    };
    info!("Catalog loaded with {} courses", catalog.courses().len());

    let cli = Cli::new(catalog, TerminalRenderer::new(!no_color));

    match command {
        Some(Generate(args)) => cli.generate(args),
        Some(Courses(args)) => cli.list_courses(&args),
        Some(Pathways) => cli.show_pathways(),
        Some(Validate) => cli.validate(),
        None => cli.show_pathways(),
    }
}
