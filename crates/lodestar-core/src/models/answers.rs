//! Questionnaire answer-set and its tolerant typed views.
//!
//! The raw [`AnswerSet`] keeps every enum-valued field as a plain string
//! so that any caller-supplied structure deserializes, including ones
//! reconstructed from a tampered shareable-link payload. Typed views are
//! obtained through the `from_answer` constructors, each of which maps
//! unrecognized or missing input to a named conservative default rather
//! than failing.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadmapError};

use super::Pathway;

/// Raw questionnaire answers, as submitted by the questionnaire UI or
/// reconstructed from a decoded shareable link.
///
/// Every field is defaulted so an empty JSON object (or one with extra
/// unexpected fields) deserializes cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AnswerSet {
    /// Prior AI/ML experience level
    pub experience: String,

    /// Primary learning goal
    pub goal: String,

    /// Weekly hours the learner can commit
    pub time_commitment: String,

    /// Desired role pathway
    pub target_role: String,

    /// Math comfort level
    pub math_background: String,

    /// Target completion timeline
    pub timeline: String,

    /// Course ids the learner has already completed
    pub prior_courses: BTreeSet<String>,

    /// Category tags the learner wants electives from
    pub interests: BTreeSet<String>,
}

impl AnswerSet {
    /// Parse an answer set from a JSON string (the decoded form of a
    /// shareable-link payload).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| RoadmapError::AnswersParse { source })
    }

    /// Load an answer set from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| RoadmapError::answers_read(path, source))?;
        Self::from_json(&json)
    }

    /// Typed experience view with conservative fallback.
    pub fn experience(&self) -> Experience {
        Experience::from_answer(&self.experience)
    }

    /// Typed goal view with conservative fallback.
    pub fn goal(&self) -> Goal {
        Goal::from_answer(&self.goal)
    }

    /// Typed time-commitment view with conservative fallback.
    pub fn time_commitment(&self) -> TimeCommitment {
        TimeCommitment::from_answer(&self.time_commitment)
    }

    /// Typed role view with conservative fallback.
    pub fn target_role(&self) -> TargetRole {
        TargetRole::from_answer(&self.target_role)
    }

    /// Typed math-background view with conservative fallback.
    pub fn math_background(&self) -> MathBackground {
        MathBackground::from_answer(&self.math_background)
    }

    /// Typed timeline view with conservative fallback.
    pub fn timeline(&self) -> Timeline {
        Timeline::from_answer(&self.timeline)
    }
}

/// Prior experience level. Unrecognized input degrades to [`Experience::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Experience {
    /// New to AI/ML
    #[default]
    None,
    /// Comfortable with Python basics
    SomePython,
    /// Understands ML fundamentals
    MlBasics,
    /// Builds ML systems professionally
    Professional,
}

impl Experience {
    /// Map a raw answer value, defaulting to the most cautious level.
    pub fn from_answer(raw: &str) -> Self {
        match raw {
            "none" => Experience::None,
            "some-python" => Experience::SomePython,
            "ml-basics" => Experience::MlBasics,
            "professional" => Experience::Professional,
            _ => Experience::None,
        }
    }
}

/// Learning goal. Unrecognized input degrades to [`Goal::Upskill`]
/// (practical focus, no specialization preference).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Goal {
    /// Moving into AI/ML from another field
    CareerSwitch,
    /// Adding AI capabilities to a current role
    #[default]
    Upskill,
    /// Deep understanding for research
    Research,
    /// Learning for its own sake
    Curiosity,
}

impl Goal {
    /// Map a raw answer value, defaulting to the upskill profile.
    pub fn from_answer(raw: &str) -> Self {
        match raw {
            "career-switch" => Goal::CareerSwitch,
            "upskill" => Goal::Upskill,
            "research" => Goal::Research,
            "curiosity" => Goal::Curiosity,
            _ => Goal::Upskill,
        }
    }
}

/// Weekly time budget. Unrecognized input degrades to
/// [`TimeCommitment::FiveToTen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeCommitment {
    /// 2-5 hours per week
    TwoToFive,
    /// 5-10 hours per week
    #[default]
    FiveToTen,
    /// 10-20 hours per week
    TenToTwenty,
    /// 20+ hours per week
    TwentyPlus,
}

impl TimeCommitment {
    /// Map a raw answer value, defaulting to the moderate band.
    pub fn from_answer(raw: &str) -> Self {
        match raw {
            "2-5" => TimeCommitment::TwoToFive,
            "5-10" => TimeCommitment::FiveToTen,
            "10-20" => TimeCommitment::TenToTwenty,
            "20+" => TimeCommitment::TwentyPlus,
            _ => TimeCommitment::FiveToTen,
        }
    }
}

/// Target role. Unrecognized input degrades to [`TargetRole::Undecided`],
/// which resolves to the builder pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetRole {
    /// AI Product Engineer
    Builder,
    /// Model Architect
    Researcher,
    /// Enterprise AI Leader
    Enterprise,
    /// Still exploring
    #[default]
    Undecided,
}

impl TargetRole {
    /// Map a raw answer value, defaulting to undecided.
    pub fn from_answer(raw: &str) -> Self {
        match raw {
            "builder" => TargetRole::Builder,
            "researcher" => TargetRole::Researcher,
            "enterprise" => TargetRole::Enterprise,
            "undecided" => TargetRole::Undecided,
            _ => TargetRole::Undecided,
        }
    }

    /// The pathway template this role selects. Undecided learners get the
    /// builder pathway.
    pub fn pathway(&self) -> Pathway {
        match self {
            TargetRole::Builder | TargetRole::Undecided => Pathway::Builder,
            TargetRole::Researcher => Pathway::Researcher,
            TargetRole::Enterprise => Pathway::Enterprise,
        }
    }
}

/// Math comfort level. Unrecognized input degrades to
/// [`MathBackground::Minimal`], the most restrictive gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MathBackground {
    /// High-school level
    #[default]
    Minimal,
    /// Some college math
    Moderate,
    /// Comfortable with linear algebra and statistics
    Strong,
    /// STEM degree
    Expert,
}

impl MathBackground {
    /// Map a raw answer value, defaulting to the most restrictive level.
    pub fn from_answer(raw: &str) -> Self {
        match raw {
            "minimal" => MathBackground::Minimal,
            "moderate" => MathBackground::Moderate,
            "strong" => MathBackground::Strong,
            "expert" => MathBackground::Expert,
            _ => MathBackground::Minimal,
        }
    }

    /// Whether math-heavy researcher phases should carry a warning for
    /// this background.
    pub fn needs_math_warning(&self) -> bool {
        matches!(self, MathBackground::Minimal | MathBackground::Moderate)
    }
}

/// Target timeline. Unrecognized input degrades to [`Timeline::SixMonths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeline {
    /// Intensive three-month sprint
    ThreeMonths,
    /// Balanced six-month pace
    #[default]
    SixMonths,
    /// Thorough one-year journey
    TwelveMonths,
    /// No deadline
    NoRush,
}

impl Timeline {
    /// Map a raw answer value, defaulting to six months.
    pub fn from_answer(raw: &str) -> Self {
        match raw {
            "3-months" => Timeline::ThreeMonths,
            "6-months" => Timeline::SixMonths,
            "12-months" => Timeline::TwelveMonths,
            "no-rush" => Timeline::NoRush,
            _ => Timeline::SixMonths,
        }
    }
}
