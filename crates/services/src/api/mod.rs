//! External collaborators of the lesson flow.

mod http;
mod in_memory;
mod payload;

use async_trait::async_trait;
use vocab_core::model::{Lesson, UnitId};

use crate::error::{CompletionError, LessonSourceError};

pub use http::HttpLessonApi;
pub use in_memory::InMemoryLessonApi;
pub use payload::{LessonPayload, WordPayload};

/// Provides lesson content keyed by unit.
#[async_trait]
pub trait LessonSource: Send + Sync {
    /// Fetch the lesson for `unit`, word order untouched.
    ///
    /// # Errors
    ///
    /// Returns `LessonSourceError` when the content is missing, empty, or unreachable.
    async fn fetch_lesson(&self, unit: &UnitId) -> Result<Lesson, LessonSourceError>;
}

/// Receives the "lesson completed" notification.
#[async_trait]
pub trait CompletionSink: Send + Sync {
    /// Tell the backend `unit` was completed. No payload is sent or read.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError` on transport failure or a non-success status.
    async fn notify_completed(&self, unit: &UnitId) -> Result<(), CompletionError>;
}
