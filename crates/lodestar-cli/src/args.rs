use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CoursesArgs, GenerateArgs};

/// Main command-line interface for the Lodestar roadmap generator
///
/// Lodestar turns a short questionnaire (experience, goal, weekly time
/// budget, target role, math background, timeline, prior courses,
/// interests) and a course catalog into a personalized, week-scheduled
/// learning roadmap. The catalog is bundled into the binary; pass
/// --catalog-file to use your own.
#[derive(Parser)]
#[command(version, about, name = "lodestar")]
pub struct Args {
    /// Path to a catalog JSON file. Uses the bundled catalog when omitted
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Lodestar CLI
///
/// - `generate`: build a roadmap from questionnaire answers
/// - `courses`: browse the course catalog
/// - `pathways`: describe the three role pathways
/// - `validate`: check pathway templates against the catalog
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a personalized roadmap
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// List catalog courses
    #[command(alias = "c")]
    Courses(CoursesArgs),
    /// Describe the role pathways
    Pathways,
    /// Report pathway template ids missing from the catalog
    Validate,
}
