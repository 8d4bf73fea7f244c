//! Summary & Milestone Composer.

use crate::models::{AnswerSet, Milestone, Phase, Summary};
use crate::profile::{PlanningParameters, WEEKS_PER_MONTH};

/// Milestone labels at 25/50/75/100 percent.
const MILESTONE_LABELS: [(u8, &str); 4] = [
    (25, "Getting Started"),
    (50, "Halfway There"),
    (75, "Home Stretch"),
    (100, "Journey Complete"),
];

/// Aggregate totals and echo the planning context.
pub(crate) fn compose(
    phases: &[Phase],
    total_weeks: u32,
    params: &PlanningParameters,
    answers: &AnswerSet,
    timeline_warning: Option<String>,
) -> Summary {
    let total_courses = phases.iter().map(|p| p.courses.len()).sum();
    let total_hours = phases
        .iter()
        .flat_map(|p| p.courses.iter())
        .map(|c| c.course.hours())
        .sum();

    Summary {
        total_courses,
        total_hours,
        total_weeks,
        weekly_hours: params.weekly_hours,
        estimated_months: (f64::from(total_weeks) / WEEKS_PER_MONTH).ceil() as u32,
        target_months: params.target_months,
        math_level: answers.math_background.clone(),
        goal: answers.goal.clone(),
        timeline_warning,
    }
}

/// Percentage milestones over the scheduled timeline. An empty schedule
/// gets no milestones rather than four zero-week ones.
pub(crate) fn milestones(total_weeks: u32) -> Vec<Milestone> {
    if total_weeks == 0 {
        return Vec::new();
    }
    MILESTONE_LABELS
        .iter()
        .map(|&(percent, label)| Milestone {
            percent,
            week: if percent == 100 {
                total_weeks
            } else {
                (f64::from(total_weeks) * f64::from(percent) / 100.0).round() as u32
            },
            label: label.to_string(),
        })
        .collect()
}
