//! Course model and its enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of course formats.
///
/// The format affects the default duration (certificates default to 40
/// hours, everything else to 3) and the elective quality ranking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    /// Multi-course certificate or specialization program
    Certificate,

    /// Standard full-length course
    #[default]
    Course,

    /// Short-form course (typically an hour or two)
    Short,
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "certificate" => Ok(CourseType::Certificate),
            "course" => Ok(CourseType::Course),
            "short" => Ok(CourseType::Short),
            _ => Err(format!("Invalid course type: {s}")),
        }
    }
}

impl CourseType {
    /// Convert to the catalog string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Certificate => "certificate",
            CourseType::Course => "course",
            CourseType::Short => "short",
        }
    }

    /// Default estimated hours for courses of this type that carry none.
    pub fn default_hours(&self) -> f64 {
        match self {
            CourseType::Certificate => 40.0,
            CourseType::Course | CourseType::Short => 3.0,
        }
    }
}

/// Type-safe enumeration of course difficulty levels.
///
/// Ordered so difficulty sets can live in a `BTreeSet` with a stable,
/// beginner-first iteration order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// No prerequisites assumed
    Beginner,

    /// Assumes programming and basic ML vocabulary
    Intermediate,

    /// Assumes ML fundamentals and comfort with math
    Advanced,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl Difficulty {
    /// Convert to the catalog string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// A single catalog course. Loaded once at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Unique identifier within the catalog
    pub id: String,

    /// Course title
    pub title: String,

    /// Course format, affecting duration defaults and elective ranking
    #[serde(rename = "type", default)]
    pub course_type: CourseType,

    /// Difficulty level used by the experience and math gates
    pub difficulty: Difficulty,

    /// Estimated hours of work; defaults by type when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    /// Topic tags used for interest matching
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    /// Partner organization, feeding the elective quality score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,

    /// Primary instructor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,

    /// Enrollment URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Skills taught, in course order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills_taught: Vec<String>,
}

impl Course {
    /// Estimated hours, falling back to the type default when the catalog
    /// carries none.
    pub fn hours(&self) -> f64 {
        self.estimated_hours
            .unwrap_or_else(|| self.course_type.default_hours())
    }

    /// Whether any of the course's categories appears in `interests`.
    pub fn matches_interests(&self, interests: &std::collections::BTreeSet<String>) -> bool {
        self.categories.iter().any(|c| interests.contains(c))
    }
}
