use std::path::PathBuf;
use thiserror::Error;

use super::validation::ValidationProblem;

/// Errors that can occur while loading, validating or persisting the library document.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed library document {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid library document: {}", format_problems(.0))]
    InvalidDocument(Vec<ValidationProblem>),

    #[error("Failed to save library document to {path:?}: {reason}")]
    Save { path: PathBuf, reason: String },
}

pub type LibraryResult<T> = Result<T, LibraryError>;

fn format_problems(problems: &[ValidationProblem]) -> String {
    problems
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
