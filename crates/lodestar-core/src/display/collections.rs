//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{category_label, Course, Pathway};

/// Newtype wrapper for displaying a filtered catalog listing.
///
/// Handles empty collections gracefully so callers can print the result
/// unconditionally.
pub struct CourseList(pub Vec<Course>);

impl CourseList {
    /// Check if the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of courses in the listing.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterator over the listed courses.
    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.0.iter()
    }
}

impl fmt::Display for CourseList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No courses found.")?;
            return Ok(());
        }

        for course in &self.0 {
            writeln!(
                f,
                "## {} (`{}`, {})",
                course.title, course.id, course.difficulty
            )?;
            writeln!(f)?;
            writeln!(f, "- Format: {}, ~{} hours", course.course_type, course.hours())?;
            if let Some(partner) = &course.partner {
                writeln!(f, "- Partner: {partner}")?;
            }
            if !course.categories.is_empty() {
                let labels: Vec<String> =
                    course.categories.iter().map(|c| category_label(c)).collect();
                writeln!(f, "- Topics: {}", labels.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper describing the role pathways for display.
pub struct PathwayOverviews(pub Vec<Pathway>);

impl PathwayOverviews {
    /// Overview of all three role pathways in display order.
    pub fn all() -> Self {
        Self(Pathway::ALL.to_vec())
    }
}

impl fmt::Display for PathwayOverviews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pathway in &self.0 {
            writeln!(
                f,
                "## {} {} (`{}`)",
                pathway.icon(),
                pathway.title(),
                pathway.as_str()
            )?;
            writeln!(f)?;
            writeln!(f, "*{}*", pathway.tagline())?;
            writeln!(f)?;
            writeln!(f, "{}", pathway.description())?;
            writeln!(f)?;
        }
        Ok(())
    }
}
