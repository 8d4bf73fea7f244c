//! Elective quality ranking.
//!
//! Electives are the only re-ranked part of the roadmap; foundation and
//! role phases keep their template order. The score combines provider
//! reputation, course format (weighted by the learner's goal), and depth.

use crate::models::{Course, CourseType};
use crate::profile::{GoalConfig, GoalPriority};

/// Recognized partner organizations and their reputation tiers.
const PARTNER_TIERS: &[(&str, f64)] = &[
    ("DeepLearning.AI", 100.0),
    ("OpenAI", 80.0),
    ("Google", 80.0),
    ("AWS", 80.0),
    ("Microsoft", 80.0),
    ("Meta", 80.0),
    ("Anthropic", 70.0),
    ("Hugging Face", 70.0),
    ("LangChain", 70.0),
    ("Cohere", 60.0),
    ("Mistral AI", 60.0),
    ("Weights & Biases", 60.0),
];

/// Reputation score for courses with no recognized partner.
const UNRANKED_PARTNER: f64 = 30.0;

/// Depth contribution is capped so marathon certificates cannot drown
/// out the partner and format components.
const DEPTH_CAP_HOURS: f64 = 50.0;

/// Quality score for one elective candidate. Higher is better; ties keep
/// catalog order through the caller's stable sort.
pub(crate) fn quality_score(course: &Course, goal: &GoalConfig) -> f64 {
    partner_tier(course.partner.as_deref()) + type_weight(course.course_type, goal)
        + course.hours().min(DEPTH_CAP_HOURS)
}

fn partner_tier(partner: Option<&str>) -> f64 {
    let Some(partner) = partner else {
        return UNRANKED_PARTNER;
    };
    PARTNER_TIERS
        .iter()
        .find(|(name, _)| *name == partner)
        .map_or(UNRANKED_PARTNER, |(_, tier)| *tier)
}

fn type_weight(course_type: CourseType, goal: &GoalConfig) -> f64 {
    match course_type {
        CourseType::Certificate if goal.prefer_specializations => 70.0,
        CourseType::Certificate => 40.0,
        CourseType::Course => 20.0,
        CourseType::Short
            if goal.prioritize == GoalPriority::Practical && !goal.prefer_specializations =>
        {
            25.0
        }
        CourseType::Short => 10.0,
    }
}
