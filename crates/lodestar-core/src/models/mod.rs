//! Data models for courses, pathways, answers, and roadmaps.
//!
//! This module contains the domain types that flow through the generator:
//! catalog-owned inputs ([`Course`], [`PathwaySet`]), the caller-supplied
//! [`AnswerSet`], and the derived output types ([`Roadmap`], [`Phase`],
//! [`TimelinedCourse`]). Display implementations live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation.
//!
//! Catalog input types deserialize from snake_case JSON (the catalog file
//! format); derived output types serialize as camelCase to match the wire
//! shape consumed by rendering and export layers (`startWeek`,
//! `totalCourses`, and so on).

pub mod answers;
pub mod categories;
pub mod course;
pub mod pathway;
pub mod roadmap;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use answers::{
    AnswerSet, Experience, Goal, MathBackground, TargetRole, TimeCommitment, Timeline,
};
pub use categories::category_label;
pub use course::{Course, CourseType, Difficulty};
pub use pathway::{Pathway, PathwaySet, PathwayTemplate, PhaseTemplate, Trunk};
pub use roadmap::{Milestone, Phase, Roadmap, Summary, TimelinedCourse};
