//! Error types for amalgamation runs

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an amalgamation run
#[derive(Error, Debug)]
pub enum AmalgamateError {
    #[error("No source headers given: the ordered source list is empty")]
    EmptySourceList,

    #[error("Failed to read source header {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Guard collision: {} and {} both map to {guard}",
        .first.display(),
        .second.display()
    )]
    GuardCollision {
        guard: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Failed to write output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid guard suffix {0:?}: only ASCII letters, digits and '_' are allowed")]
    InvalidGuardSuffix(String),

    #[error("Amalgamator has already run; create a new one for another pass")]
    AlreadyRun,
}

/// Result type for amalgamation operations
pub type Result<T> = std::result::Result<T, AmalgamateError>;
