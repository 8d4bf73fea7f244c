//! Error types for the roadmap library.
//!
//! Errors only arise at the deserialization edges (loading a catalog or a
//! decoded answer-set). Roadmap generation itself is infallible: malformed
//! answers degrade to conservative defaults instead of failing.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for catalog and answer-set loading.
#[derive(Error, Debug)]
pub enum RoadmapError {
    /// Catalog file could not be read from disk
    #[error("Failed to read catalog at '{path}': {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Catalog JSON did not match the expected schema
    #[error("Failed to parse catalog: {source}")]
    CatalogParse {
        #[source]
        source: serde_json::Error,
    },
    /// Answer-set file could not be read from disk
    #[error("Failed to read answer set at '{path}': {source}")]
    AnswersRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Answer-set JSON was not a valid object
    #[error("Failed to parse answer set: {source}")]
    AnswersParse {
        #[source]
        source: serde_json::Error,
    },
}

impl RoadmapError {
    /// Creates a catalog read error with path context.
    pub fn catalog_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CatalogRead {
            path: path.into(),
            source,
        }
    }

    /// Creates an answer-set read error with path context.
    pub fn answers_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::AnswersRead {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for roadmap operations
pub type Result<T> = std::result::Result<T, RoadmapError>;
