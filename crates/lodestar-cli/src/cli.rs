//! Command handlers and their clap argument wrappers.
//!
//! Follows the parameter wrapper pattern: argument structs carry the
//! clap derives and convert into core types ([`AnswerSet`]) before any
//! business logic runs, keeping the core free of CLI concerns.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Args;
use lodestar_core::{
    generate_roadmap, AnswerSet, Catalog, CourseList, Difficulty, PathwayOverviews,
};
use log::{debug, info};

use crate::renderer::TerminalRenderer;

/// Generate a personalized roadmap
///
/// Answers can come from flags, from a previously saved answer-set JSON
/// file (--answers-file), or both; flags override file values. Any
/// unrecognized answer value falls back to a conservative default
/// instead of failing.
#[derive(Args)]
pub struct GenerateArgs {
    /// Read answers from a JSON file (the decoded form of a shared link)
    #[arg(long)]
    pub answers_file: Option<PathBuf>,

    /// Experience level: none, some-python, ml-basics, professional
    #[arg(long)]
    pub experience: Option<String>,

    /// Learning goal: career-switch, upskill, research, curiosity
    #[arg(long)]
    pub goal: Option<String>,

    /// Weekly hours: 2-5, 5-10, 10-20, 20+
    #[arg(long = "time")]
    pub time_commitment: Option<String>,

    /// Target role: builder, researcher, enterprise, undecided
    #[arg(long = "role")]
    pub target_role: Option<String>,

    /// Math background: minimal, moderate, strong, expert
    #[arg(long = "math")]
    pub math_background: Option<String>,

    /// Timeline: 3-months, 6-months, 12-months, no-rush
    #[arg(long)]
    pub timeline: Option<String>,

    /// Course id already completed (repeatable)
    #[arg(long = "prior-course")]
    pub prior_courses: Vec<String>,

    /// Interest category tag, e.g. agents or rag (repeatable)
    #[arg(long = "interest")]
    pub interests: Vec<String>,

    /// Print the roadmap as JSON instead of rendering it
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Build the core answer set: file first, then flag overrides.
    fn into_answer_set(self) -> Result<AnswerSet> {
        let mut answers = match &self.answers_file {
            Some(path) => AnswerSet::from_path(path)
                .with_context(|| format!("Failed to load answers from {}", path.display()))?,
            None => AnswerSet::default(),
        };

        if let Some(experience) = self.experience {
            answers.experience = experience;
        }
        if let Some(goal) = self.goal {
            answers.goal = goal;
        }
        if let Some(time_commitment) = self.time_commitment {
            answers.time_commitment = time_commitment;
        }
        if let Some(target_role) = self.target_role {
            answers.target_role = target_role;
        }
        if let Some(math_background) = self.math_background {
            answers.math_background = math_background;
        }
        if let Some(timeline) = self.timeline {
            answers.timeline = timeline;
        }
        answers.prior_courses.extend(self.prior_courses);
        answers.interests.extend(self.interests);

        Ok(answers)
    }
}

/// List catalog courses
#[derive(Args)]
pub struct CoursesArgs {
    /// Only show courses with this category tag
    #[arg(long)]
    pub category: Option<String>,

    /// Only show courses at this difficulty
    #[arg(long)]
    pub difficulty: Option<String>,
}

/// CLI command handler that coordinates the catalog and the renderer.
pub struct Cli {
    catalog: Catalog,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(catalog: Catalog, renderer: TerminalRenderer) -> Self {
        Self { catalog, renderer }
    }

    /// Handle the generate command.
    pub fn generate(&self, args: GenerateArgs) -> Result<()> {
        let json = args.json;
        let answers = args.into_answer_set()?;
        debug!("Resolved answers: {answers:?}");

        let roadmap = generate_roadmap(&self.catalog, &answers);
        info!(
            "Generated {} roadmap: {} courses over {} weeks",
            roadmap.pathway.as_str(),
            roadmap.summary.total_courses,
            roadmap.summary.total_weeks
        );

        if json {
            let output =
                serde_json::to_string_pretty(&roadmap).context("Failed to serialize roadmap")?;
            println!("{output}");
            Ok(())
        } else {
            self.renderer.render(&roadmap.to_string())
        }
    }

    /// Handle the courses command.
    pub fn list_courses(&self, args: &CoursesArgs) -> Result<()> {
        let difficulty = args
            .difficulty
            .as_deref()
            .map(Difficulty::from_str)
            .transpose()
            .map_err(|reason| anyhow::anyhow!(reason))?;

        let courses: Vec<_> = self
            .catalog
            .courses()
            .iter()
            .filter(|c| difficulty.map_or(true, |d| c.difficulty == d))
            .filter(|c| {
                args.category
                    .as_ref()
                    .map_or(true, |tag| c.categories.contains(tag))
            })
            .cloned()
            .collect();

        let listing = CourseList(courses);
        let markdown = format!("# Courses ({})\n\n{listing}", listing.len());
        self.renderer.render(&markdown)
    }

    /// Handle the pathways command.
    pub fn show_pathways(&self) -> Result<()> {
        let markdown = format!("# Role Pathways\n\n{}", PathwayOverviews::all());
        self.renderer.render(&markdown)
    }

    /// Handle the validate command. Fails when any pathway or trunk
    /// template references a course id the catalog does not define.
    pub fn validate(&self) -> Result<()> {
        let missing = self.catalog.unresolved_ids();
        if missing.is_empty() {
            self.renderer.render(&format!(
                "# Catalog Validation\n\nAll template ids resolve ({} courses).\n",
                self.catalog.courses().len()
            ))?;
            return Ok(());
        }

        let mut report = String::from("# Catalog Validation\n\nUnresolved course ids:\n\n");
        for (context, id) in &missing {
            report.push_str(&format!("- {context}: `{id}`\n"));
        }
        self.renderer.render(&report)?;
        bail!("catalog has {} unresolved course id(s)", missing.len());
    }
}
