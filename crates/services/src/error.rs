//! Shared error types for the services crate.

use thiserror::Error;

use vocab_core::model::{IdError, LessonError, UnitId};

/// Errors emitted while fetching lesson content.
///
/// The controller collapses every variant into the same "not found" state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonSourceError {
    #[error("no lesson for unit {0}")]
    NotFound(UnitId),
    #[error("lesson request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("lesson payload has an invalid id: {0}")]
    InvalidId(#[from] IdError),
    #[error("lesson payload is unusable: {0}")]
    InvalidLesson(#[from] LessonError),
    #[error("lesson source unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted while notifying the backend that a lesson is complete.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompletionError {
    #[error("completion request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("completion sink unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted while building the HTTP client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiSetupError {
    #[error("invalid api base url: {raw}")]
    InvalidBaseUrl { raw: String },
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}
