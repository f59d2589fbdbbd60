//! Error types for catalog loading

use std::fmt;
use std::path::PathBuf;

/// Why a catalog line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The line has no name field (fewer than two comma-separated fields)
    MissingName,
    /// The id field is empty
    EmptyId,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "expected at least an id and a name"),
            Self::EmptyId => write!(f, "course id is empty"),
        }
    }
}

/// Errors raised while loading a course catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog source could not be opened or read
    #[error("Catalog source unavailable: {}: {source}", .path.display())]
    SourceUnavailable {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line could not be parsed into a course record
    #[error("Malformed record on line {line}: {reason} (\"{content}\")")]
    MalformedRecord {
        /// 1-based line number in the source
        line: usize,
        /// What was wrong with the line
        reason: MalformedReason,
        /// Raw line text, untrimmed
        content: String,
    },
}
