//! Sequence Builder: ordered, untimelined phase assembly.
//!
//! Builds the foundation phase (unless skipped), the role-specific
//! phases filtered through the difficulty gates, and the quality-ranked
//! elective phase limited by the remaining week budget. A course is
//! scheduled at most once: once placed in an earlier phase it is
//! excluded from every later phase, electives included.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::models::{AnswerSet, Course, MathBackground, Pathway};
use crate::profile::{GoalPriority, PlanningParameters, WEEKS_PER_MONTH};

use super::rank::quality_score;

/// Elective phase label and naming.
const ELECTIVE_LABEL: &str = "Electives";
const ELECTIVE_NAME: &str = "Areas of Interest";
const ELECTIVE_MILESTONE: &str = "Specialization Deepened";

/// Elective count caps by goal emphasis.
const MAX_ELECTIVES: usize = 5;
const MAX_ELECTIVES_BREADTH: usize = 7;

/// An assembled phase awaiting scheduling.
#[derive(Debug, Clone)]
pub(crate) struct PhaseDraft {
    pub label: String,
    pub name: String,
    pub milestone: String,
    pub courses: Vec<Course>,
    pub is_optional: bool,
    pub math_warning: Option<String>,
}

/// Sequence assembly result: the phase drafts plus the timeline warning
/// derived from the core (non-elective) week load.
#[derive(Debug, Clone)]
pub(crate) struct SequenceOutcome {
    pub phases: Vec<PhaseDraft>,
    pub timeline_warning: Option<String>,
}

/// Assemble the ordered phase sequence for the resolved profile.
pub(crate) fn build_sequence(
    catalog: &Catalog,
    params: &PlanningParameters,
    answers: &AnswerSet,
) -> SequenceOutcome {
    let mut scheduled: HashSet<String> = HashSet::new();
    let mut phases: Vec<PhaseDraft> = Vec::new();

    if !params.skip_foundation {
        if let Some(draft) = foundation_phase(catalog, answers, &scheduled) {
            scheduled.extend(draft.courses.iter().map(|c| c.id.clone()));
            phases.push(draft);
        }
    }

    let template = catalog.pathway(params.pathway);
    for (index, phase) in template.phases.iter().enumerate() {
        let courses = resolve_filtered(catalog, &phase.courses, answers, &scheduled, |c| {
            params.admits(c.difficulty)
        });
        if courses.is_empty() {
            continue;
        }
        scheduled.extend(courses.iter().map(|c| c.id.clone()));
        phases.push(PhaseDraft {
            label: format!("Phase {}", index + 2),
            name: phase.name.clone(),
            milestone: phase.milestone_text(),
            courses,
            is_optional: false,
            math_warning: math_warning(params.pathway, &phase.name, answers.math_background()),
        });
    }

    let core_hours: f64 = phases
        .iter()
        .flat_map(|p| p.courses.iter())
        .map(Course::hours)
        .sum();
    let core_weeks = params.weeks_for(core_hours);
    let target_weeks = params.target_weeks();
    let remaining_weeks = (target_weeks - f64::from(core_weeks)).max(0.0);

    if let Some(draft) = elective_phase(catalog, params, answers, &scheduled, remaining_weeks) {
        phases.push(draft);
    }

    SequenceOutcome {
        phases,
        timeline_warning: timeline_warning(core_weeks, target_weeks, params.target_months),
    }
}

/// Foundation phase from the shared trunk. No difficulty gating: the
/// trunk is the on-ramp every profile that reaches it is allowed to take.
fn foundation_phase(
    catalog: &Catalog,
    answers: &AnswerSet,
    scheduled: &HashSet<String>,
) -> Option<PhaseDraft> {
    let trunk = catalog.trunk();
    let courses = resolve_filtered(catalog, &trunk.courses, answers, scheduled, |_| true);
    if courses.is_empty() {
        return None;
    }
    Some(PhaseDraft {
        label: "Foundation".to_string(),
        name: trunk.name.clone(),
        milestone: trunk.milestone.clone(),
        courses,
        is_optional: false,
        math_warning: None,
    })
}

/// Resolve template ids to courses, dropping prior courses, ids the
/// catalog does not know, already-scheduled courses, and anything the
/// extra predicate rejects. Template order is preserved.
fn resolve_filtered(
    catalog: &Catalog,
    ids: &[String],
    answers: &AnswerSet,
    scheduled: &HashSet<String>,
    admit: impl Fn(&Course) -> bool,
) -> Vec<Course> {
    ids.iter()
        .filter(|id| !answers.prior_courses.contains(*id))
        .filter_map(|id| catalog.course(id))
        .filter(|c| !scheduled.contains(&c.id))
        .filter(|c| admit(c))
        .cloned()
        .collect()
}

/// Interest-driven elective phase: catalog courses matching at least one
/// declared interest, quality-ranked, greedily admitted into the weeks
/// left before the target deadline, capped by the goal's elective limit.
fn elective_phase(
    catalog: &Catalog,
    params: &PlanningParameters,
    answers: &AnswerSet,
    scheduled: &HashSet<String>,
    remaining_weeks: f64,
) -> Option<PhaseDraft> {
    if answers.interests.is_empty() || remaining_weeks <= 0.0 {
        return None;
    }

    let mut ranked: Vec<(f64, &Course)> = catalog
        .courses()
        .iter()
        .filter(|c| !answers.prior_courses.contains(&c.id))
        .filter(|c| !scheduled.contains(&c.id))
        .filter(|c| params.admits(c.difficulty))
        .filter(|c| c.matches_interests(&answers.interests))
        .map(|c| (quality_score(c, &params.goal), c))
        .collect();
    // Stable sort keeps catalog order for equal scores.
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    let max_electives = match params.goal.prioritize {
        GoalPriority::Breadth => MAX_ELECTIVES_BREADTH,
        GoalPriority::Practical | GoalPriority::Theoretical => MAX_ELECTIVES,
    };

    let mut courses: Vec<Course> = Vec::new();
    let mut elective_weeks = 0u32;
    for (_, course) in ranked {
        if courses.len() == max_electives {
            break;
        }
        let weeks = params.weeks_for(course.hours());
        if f64::from(elective_weeks + weeks) <= remaining_weeks {
            elective_weeks += weeks;
            courses.push(course.clone());
        }
    }

    if courses.is_empty() {
        return None;
    }
    Some(PhaseDraft {
        label: ELECTIVE_LABEL.to_string(),
        name: ELECTIVE_NAME.to_string(),
        milestone: ELECTIVE_MILESTONE.to_string(),
        courses,
        is_optional: true,
        math_warning: None,
    })
}

/// Math warning for researcher phases whose name mentions math, when the
/// learner's background is below strong.
fn math_warning(pathway: Pathway, phase_name: &str, math: MathBackground) -> Option<String> {
    if pathway == Pathway::Researcher
        && phase_name.to_lowercase().contains("math")
        && math.needs_math_warning()
    {
        Some(
            "This phase leans on linear algebra and calculus. Budget extra review \
             time alongside the listed courses."
                .to_string(),
        )
    } else {
        None
    }
}

/// Warning when the core sequence alone overruns the target timeline.
fn timeline_warning(core_weeks: u32, target_weeks: f64, target_months: u32) -> Option<String> {
    if f64::from(core_weeks) <= target_weeks {
        return None;
    }
    let overrun_months = ((f64::from(core_weeks) - target_weeks) / WEEKS_PER_MONTH).ceil() as u32;
    Some(format!(
        "The core sequence needs roughly {overrun_months} month{} more than your \
         {target_months}-month target. Consider adding weekly hours or choosing a \
         longer timeline.",
        if overrun_months == 1 { "" } else { "s" }
    ))
}
