//! Core library for the Lodestar learning-pathway generator.
//!
//! This crate turns a small questionnaire answer-set and a static course
//! catalog into a personalized, week-scheduled learning roadmap. The
//! computation is pure and deterministic: one call in, one structured
//! [`Roadmap`] out, with no I/O, no clock, and no shared mutable state.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌───────────┐   ┌──────────────┐
//! │   Profile    │   │   Sequence   │   │ Scheduler │   │  Summary &   │
//! │   Resolver   │──▶│   Builder    │──▶│  (week    │──▶│  Milestone   │
//! │ (answers →   │   │ (phases +    │   │  cursor   │   │  Composer    │
//! │  parameters) │   │  electives)  │   │  fold)    │   │              │
//! └──────────────┘   └──────────────┘   └───────────┘   └──────────────┘
//! ```
//!
//! Malformed or unrecognized answers never fail generation: every answer
//! field degrades to a named conservative default (see [`profile`]), so
//! even a tampered or empty answer-set yields a well-formed roadmap.
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] producing markdown; the
//! CLI renders that markdown to the terminal. Collection wrappers in
//! [`display`] provide contextual formatting for course lists and
//! pathway overviews.
//!
//! # Quick Start
//!
//! ```rust
//! use lodestar_core::{generate_roadmap, AnswerSet, Catalog};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::from_json(
//!     r#"{
//!         "courses": [
//!             {"id": "intro", "title": "Intro to AI", "type": "course",
//!              "difficulty": "beginner", "estimated_hours": 6}
//!         ],
//!         "pathways": {
//!             "trunk": {"name": "AI Foundations",
//!                       "milestone": "Foundations Complete",
//!                       "courses": ["intro"]},
//!             "builder": {"name": "AI Product Engineer", "phases": []},
//!             "researcher": {"name": "Model Architect", "phases": []},
//!             "enterprise": {"name": "Enterprise AI Leader", "phases": []}
//!         }
//!     }"#,
//! )?;
//!
//! let answers = AnswerSet {
//!     experience: "none".to_string(),
//!     time_commitment: "5-10".to_string(),
//!     ..AnswerSet::default()
//! };
//!
//! let roadmap = generate_roadmap(&catalog, &answers);
//! assert_eq!(roadmap.summary.total_courses, 1);
//! println!("{roadmap}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod profile;

// Re-export commonly used types
pub use catalog::Catalog;
pub use display::{CourseList, PathwayOverviews, WeekSpan};
pub use error::{Result, RoadmapError};
pub use generator::generate_roadmap;
pub use models::{
    AnswerSet, Course, CourseType, Difficulty, Milestone, Pathway, Phase, Roadmap, Summary,
    TimelinedCourse,
};
pub use profile::{GoalPriority, PersonalizationFactors, PlanningParameters};
