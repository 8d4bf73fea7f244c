//! Derived roadmap output types.
//!
//! These are the caller-owned results of generation. They serialize as
//! camelCase to match the wire shape consumed by rendering, PDF, and
//! calendar export layers; all week fields are zero-based offsets from
//! the roadmap start.

use serde::{Deserialize, Serialize};

use crate::profile::PersonalizationFactors;

use super::{AnswerSet, Course, Pathway};

/// A catalog course placed on the roadmap timeline.
///
/// `start_week`/`end_week` are zero-based offsets on the single global
/// week axis; `end_week - start_week == estimated_weeks` always holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelinedCourse {
    /// The underlying catalog course
    #[serde(flatten)]
    pub course: Course,

    /// First week of the course (inclusive, zero-based)
    pub start_week: u32,

    /// Week the course ends (exclusive)
    pub end_week: u32,

    /// Duration in weeks at the learner's weekly pace
    pub estimated_weeks: u32,
}

/// A named, scheduled group of courses sharing a milestone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// Phase label ("Foundation", "Phase 2", "Electives")
    pub phase: String,

    /// Phase display name
    pub phase_name: String,

    /// Milestone text awarded on completion
    pub milestone: String,

    /// Scheduled courses, in timeline order
    pub courses: Vec<TimelinedCourse>,

    /// First week of the phase (from its first course)
    pub start_week: u32,

    /// Week the phase ends (from its last course)
    pub end_week: u32,

    /// True for the elective phase; required phases omit the field
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_optional: bool,

    /// Warning attached to math-heavy phases for learners with a
    /// limited math background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math_warning: Option<String>,
}

/// Aggregate totals and echoed planning context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Total scheduled courses across all phases
    pub total_courses: usize,

    /// Total estimated hours of work
    pub total_hours: f64,

    /// Total scheduled weeks (the scheduler's final cursor)
    pub total_weeks: u32,

    /// Weekly hours the schedule assumes
    pub weekly_hours: f64,

    /// Estimated calendar months at that pace
    pub estimated_months: u32,

    /// The learner's target months
    pub target_months: u32,

    /// Raw math-background answer, echoed for display
    pub math_level: String,

    /// Raw goal answer, echoed for display
    pub goal: String,

    /// Present when the core sequence overruns the target timeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline_warning: Option<String>,
}

/// A percentage checkpoint on the roadmap timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    /// Progress percentage (25, 50, 75, or 100)
    pub percent: u8,

    /// Week the checkpoint lands on
    pub week: u32,

    /// Checkpoint label
    pub label: String,
}

/// The complete generated roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    /// Selected pathway key
    pub pathway: Pathway,

    /// Selected pathway display name
    pub pathway_name: String,

    /// Scheduled phases in timeline order
    pub phases: Vec<Phase>,

    /// Aggregate totals and context
    pub summary: Summary,

    /// Percentage checkpoints; empty when nothing is scheduled
    pub milestones: Vec<Milestone>,

    /// The answers this roadmap was generated from, echoed for export
    pub answers: AnswerSet,

    /// The resolved planning parameters, echoed for display
    pub personalization_factors: PersonalizationFactors,
}

impl Roadmap {
    /// Iterate all scheduled courses across phases in timeline order.
    pub fn all_courses(&self) -> impl Iterator<Item = &TimelinedCourse> {
        self.phases.iter().flat_map(|p| p.courses.iter())
    }

    /// Whether generation produced nothing to study. Callers use this for
    /// their "no roadmap could be generated" surface.
    pub fn is_empty(&self) -> bool {
        self.summary.total_courses == 0
    }
}
