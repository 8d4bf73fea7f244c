//! Display formatting for roadmaps and catalog listings.
//!
//! Domain models format themselves as markdown via [`std::fmt::Display`]
//! (implementations in [`models`]); collection newtypes in
//! [`collections`] add list framing and empty-collection handling; and
//! [`duration`] provides human-readable week spans. The CLI feeds the
//! resulting markdown to its terminal renderer, so the same output works
//! rich or plain.

pub mod collections;
pub mod duration;
pub mod models;

// Re-export commonly used types for convenience
pub use collections::{CourseList, PathwayOverviews};
pub use duration::WeekSpan;
