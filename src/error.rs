//! Typed errors surfaced to callers of the assessment entry points.

use std::path::PathBuf;

use thiserror::Error;

/// Input validation failures. Returned immediately, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("PHQ-9 requires exactly 9 responses, got {0}")]
    ResponseCount(usize),
    #[error("response {index} is {value}; PHQ-9 answers must be between 0 and 3")]
    ResponseOutOfRange { index: usize, value: i64 },
    #[error("text too short for analysis: {length} characters, need at least {minimum}")]
    TextTooShort { length: usize, minimum: usize },
}

/// Failure to read or validate one artefact of the model bundle.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artefact {path} not found")]
    Missing { path: PathBuf },
    #[error("reading artefact {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("decoding artefact {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid artefact: {0}")]
    Invalid(String),
    #[error("encoder runtime unavailable: {0}")]
    Runtime(String),
}
