//! Display implementations for domain models.
//!
//! All implementations produce markdown for rich terminal display,
//! separated from the model definitions to keep data and presentation
//! apart.

use std::fmt;

use super::duration::WeekSpan;
use crate::models::{
    category_label, CourseType, Difficulty, Milestone, Phase, Roadmap, Summary, TimelinedCourse,
};

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimelinedCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let course = &self.course;
        writeln!(f, "### {} ({})", course.title, course.difficulty)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Weeks {}-{}** ({})",
            self.start_week + 1,
            self.end_week,
            WeekSpan(self.estimated_weeks)
        )?;
        writeln!(f, "- Format: {}, ~{} hours", course.course_type, course.hours())?;
        if let Some(partner) = &course.partner {
            writeln!(f, "- Partner: {partner}")?;
        }
        if let Some(instructor) = &course.instructor {
            writeln!(f, "- Instructor: {instructor}")?;
        }
        if !course.categories.is_empty() {
            let labels: Vec<String> =
                course.categories.iter().map(|c| category_label(c)).collect();
            writeln!(f, "- Topics: {}", labels.join(", "))?;
        }
        if let Some(url) = &course.url {
            writeln!(f, "- {url}")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optional = if self.is_optional { " (optional)" } else { "" };
        writeln!(
            f,
            "## {}: {}{optional} (Weeks {}-{})",
            self.phase,
            self.phase_name,
            self.start_week + 1,
            self.end_week
        )?;
        writeln!(f)?;

        if let Some(warning) = &self.math_warning {
            writeln!(f, "> ⚠ {warning}")?;
            writeln!(f)?;
        }

        for course in &self.courses {
            write!(f, "{course}")?;
        }

        writeln!(f, "🏁 **Milestone**: {}", self.milestone)?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Courses: {}", self.total_courses)?;
        writeln!(f, "- Total effort: ~{} hours", self.total_hours)?;
        writeln!(
            f,
            "- Duration: {} weeks ({}) at {} hours/week",
            self.total_weeks,
            WeekSpan(self.total_weeks),
            self.weekly_hours
        )?;
        writeln!(
            f,
            "- Timeline: ~{} months estimated, {} months targeted",
            self.estimated_months, self.target_months
        )?;
        Ok(())
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- Week {}: {} ({}%)", self.week, self.label, self.percent)
    }
}

impl fmt::Display for Roadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} Pathway", self.pathway_name)?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(
                f,
                "No courses match this profile. Loosen the filters or clear \
                 some prior courses and try again."
            )?;
            return Ok(());
        }

        write!(f, "{}", self.summary)?;
        writeln!(f)?;

        if let Some(warning) = &self.summary.timeline_warning {
            writeln!(f, "> ⚠ {warning}")?;
            writeln!(f)?;
        }

        for phase in &self.phases {
            write!(f, "{phase}")?;
        }

        if !self.milestones.is_empty() {
            writeln!(f, "## Milestones")?;
            writeln!(f)?;
            for milestone in &self.milestones {
                writeln!(f, "{milestone}")?;
            }
        }

        Ok(())
    }
}
