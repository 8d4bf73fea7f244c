//! Scheduler: week-range assignment over the assembled phase sequence.
//!
//! A single week cursor runs across the entire sequence; it is never
//! reset between phases, so course `n` starts exactly where course
//! `n - 1` ended. The cursor lives only as the fold accumulator.

use crate::models::{Phase, TimelinedCourse};
use crate::profile::PlanningParameters;

use super::sequence::PhaseDraft;

/// Place every course on the global week axis and derive phase bounds.
/// Returns the scheduled phases and the final cursor (total weeks).
pub(crate) fn schedule(
    drafts: Vec<PhaseDraft>,
    params: &PlanningParameters,
) -> (Vec<Phase>, u32) {
    let (cursor, phases) = drafts.into_iter().fold(
        (0u32, Vec::new()),
        |(cursor, mut phases), draft| {
            let (cursor, courses) = draft.courses.into_iter().fold(
                (cursor, Vec::new()),
                |(cursor, mut courses), course| {
                    let weeks = params.weeks_for(course.hours());
                    courses.push(TimelinedCourse {
                        course,
                        start_week: cursor,
                        end_week: cursor + weeks,
                        estimated_weeks: weeks,
                    });
                    (cursor + weeks, courses)
                },
            );

            // Upstream drops empty phases; the fallbacks keep the bounds
            // well-defined regardless.
            let start_week = courses.first().map_or(0, |c| c.start_week);
            let end_week = courses.last().map_or(0, |c| c.end_week);

            phases.push(Phase {
                phase: draft.label,
                phase_name: draft.name,
                milestone: draft.milestone,
                courses,
                start_week,
                end_week,
                is_optional: draft.is_optional,
                math_warning: draft.math_warning,
            });
            (cursor, phases)
        },
    );
    (phases, cursor)
}
