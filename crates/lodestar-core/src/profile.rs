//! Profile Resolver: questionnaire answers → planning parameters.
//!
//! Every mapping here is an exhaustive lookup over the typed answer
//! enums, whose `from_answer` constructors already fold unrecognized
//! input into a named default. The combined effect is a restrictive
//! fallback policy: malformed or tampered answers degrade to the most
//! conservative configuration (beginner-level gates, moderate pace)
//! instead of failing or unlocking advanced content.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{
    AnswerSet, Difficulty, Experience, Goal, MathBackground, Pathway, TimeCommitment, Timeline,
};

/// What the learner's goal says the roadmap should optimize for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    /// Hands-on, application-focused content
    #[default]
    Practical,

    /// Theory and fundamentals
    Theoretical,

    /// A wide sampling of topics
    Breadth,
}

/// Goal-derived ranking configuration for electives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoalConfig {
    /// Content emphasis
    pub prioritize: GoalPriority,

    /// Whether certificate programs should outrank everything else
    pub prefer_specializations: bool,
}

/// Resolved planning parameters driving sequence assembly and scheduling.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningParameters {
    /// Hours per week the schedule assumes
    pub weekly_hours: f64,

    /// Target completion horizon in months
    pub target_months: u32,

    /// Difficulties the learner's experience admits
    pub allowed_by_experience: BTreeSet<Difficulty>,

    /// Difficulties the learner's math background admits
    pub allowed_difficulties: BTreeSet<Difficulty>,

    /// Elective ranking configuration
    pub goal: GoalConfig,

    /// Skip the shared foundation phase entirely
    pub skip_foundation: bool,

    /// The selected role pathway (undecided resolves to builder)
    pub pathway: Pathway,
}

impl PlanningParameters {
    /// Resolve raw answers into planning parameters. Never fails: every
    /// unrecognized answer value takes its table's named default.
    pub fn resolve(answers: &AnswerSet) -> Self {
        Self {
            weekly_hours: weekly_hours(answers.time_commitment()),
            target_months: target_months(answers.timeline()),
            allowed_by_experience: allowed_by_experience(answers.experience()),
            allowed_difficulties: allowed_by_math(answers.math_background()),
            goal: goal_config(answers.goal()),
            skip_foundation: skip_foundation(answers.experience()),
            pathway: answers.target_role().pathway(),
        }
    }

    /// Whether a course difficulty clears both the experience gate and
    /// the math gate.
    pub fn admits(&self, difficulty: Difficulty) -> bool {
        self.allowed_by_experience.contains(&difficulty)
            && self.allowed_difficulties.contains(&difficulty)
    }

    /// Target horizon in weeks (4.33 weeks per month).
    pub fn target_weeks(&self) -> f64 {
        f64::from(self.target_months) * WEEKS_PER_MONTH
    }

    /// Weeks needed for `hours` of work at the learner's pace.
    pub fn weeks_for(&self, hours: f64) -> u32 {
        (hours / self.weekly_hours).ceil() as u32
    }

    /// The echoed personalization factors carried on the roadmap.
    pub fn factors(&self) -> PersonalizationFactors {
        PersonalizationFactors {
            weekly_hours: self.weekly_hours,
            target_months: self.target_months,
            allowed_by_experience: self.allowed_by_experience.clone(),
            allowed_difficulties: self.allowed_difficulties.clone(),
            prioritize: self.goal.prioritize,
            prefer_specializations: self.goal.prefer_specializations,
            skip_foundation: self.skip_foundation,
        }
    }
}

/// Average weeks per calendar month used throughout scheduling.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Resolved planning parameters echoed on the roadmap for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationFactors {
    /// Hours per week the schedule assumes
    pub weekly_hours: f64,

    /// Target completion horizon in months
    pub target_months: u32,

    /// Difficulties admitted by the experience gate
    pub allowed_by_experience: BTreeSet<Difficulty>,

    /// Difficulties admitted by the math gate
    pub allowed_difficulties: BTreeSet<Difficulty>,

    /// Elective content emphasis
    pub prioritize: GoalPriority,

    /// Whether certificate programs were boosted in elective ranking
    pub prefer_specializations: bool,

    /// Whether the foundation phase was skipped
    pub skip_foundation: bool,
}

fn weekly_hours(commitment: TimeCommitment) -> f64 {
    match commitment {
        TimeCommitment::TwoToFive => 3.5,
        TimeCommitment::FiveToTen => 7.5,
        TimeCommitment::TenToTwenty => 15.0,
        TimeCommitment::TwentyPlus => 25.0,
    }
}

fn target_months(timeline: Timeline) -> u32 {
    match timeline {
        Timeline::ThreeMonths => 3,
        Timeline::SixMonths => 6,
        Timeline::TwelveMonths => 12,
        Timeline::NoRush => 18,
    }
}

fn allowed_by_experience(experience: Experience) -> BTreeSet<Difficulty> {
    let levels: &[Difficulty] = match experience {
        Experience::None => &[Difficulty::Beginner, Difficulty::Intermediate],
        Experience::SomePython => &[
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ],
        Experience::MlBasics | Experience::Professional => {
            &[Difficulty::Intermediate, Difficulty::Advanced]
        }
    };
    levels.iter().copied().collect()
}

fn allowed_by_math(math: MathBackground) -> BTreeSet<Difficulty> {
    let levels: &[Difficulty] = match math {
        MathBackground::Minimal => &[Difficulty::Beginner],
        MathBackground::Moderate => &[Difficulty::Beginner, Difficulty::Intermediate],
        MathBackground::Strong | MathBackground::Expert => &[
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ],
    };
    levels.iter().copied().collect()
}

fn goal_config(goal: Goal) -> GoalConfig {
    match goal {
        Goal::CareerSwitch => GoalConfig {
            prioritize: GoalPriority::Practical,
            prefer_specializations: true,
        },
        Goal::Upskill => GoalConfig {
            prioritize: GoalPriority::Practical,
            prefer_specializations: false,
        },
        Goal::Research => GoalConfig {
            prioritize: GoalPriority::Theoretical,
            prefer_specializations: true,
        },
        Goal::Curiosity => GoalConfig {
            prioritize: GoalPriority::Breadth,
            prefer_specializations: false,
        },
    }
}

fn skip_foundation(experience: Experience) -> bool {
    matches!(experience, Experience::Professional | Experience::MlBasics)
}
