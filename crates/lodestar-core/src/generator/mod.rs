//! Roadmap generation pipeline.
//!
//! [`generate_roadmap`] is the single entry point. It wires four stages
//! together, each in its own submodule:
//!
//! - [`sequence`]: assembles the ordered, untimelined phases (foundation,
//!   role phases, electives) and derives the timeline warning
//! - [`rank`]: the elective quality score used by the sequence builder
//! - [`schedule`]: places every course on a single contiguous week axis
//! - [`summary`]: aggregates totals and percentage milestones
//!
//! The whole pipeline is a pure function of the catalog and the answer
//! set. It never fails: malformed answers resolve to conservative
//! planning parameters, unresolvable template ids are dropped, and an
//! answer set that filters everything away yields a well-formed roadmap
//! with no phases.

pub(crate) mod rank;
pub(crate) mod schedule;
pub(crate) mod sequence;
pub(crate) mod summary;


use crate::catalog::Catalog;
use crate::models::{AnswerSet, Roadmap};
use crate::profile::PlanningParameters;

/// Generate a personalized roadmap from questionnaire answers and the
/// course catalog.
///
/// Deterministic: identical inputs produce identical roadmaps. Safe to
/// call concurrently against a shared catalog.
pub fn generate_roadmap(catalog: &Catalog, answers: &AnswerSet) -> Roadmap {
    let params = PlanningParameters::resolve(answers);
    let outcome = sequence::build_sequence(catalog, &params, answers);
    let (phases, total_weeks) = schedule::schedule(outcome.phases, &params);
    let summary = summary::compose(
        &phases,
        total_weeks,
        &params,
        answers,
        outcome.timeline_warning,
    );
    let milestones = summary::milestones(total_weeks);

    Roadmap {
        pathway: params.pathway,
        pathway_name: catalog.pathway(params.pathway).name.clone(),
        phases,
        summary,
        milestones,
        answers: answers.clone(),
        personalization_factors: params.factors(),
    }
}
