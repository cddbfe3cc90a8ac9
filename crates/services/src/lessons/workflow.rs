use std::sync::Arc;

use tracing::{debug, warn};
use vocab_core::model::{Lesson, UnitId};

use super::controller::{CompletionReport, LessonController, LoadTicket};
use super::navigation::NavigationSignal;
use crate::api::{CompletionSink, LessonSource};
use crate::error::LessonSourceError;

/// Performs the suspending halves of a lesson attempt against the backend.
#[derive(Clone)]
pub struct LessonFlowService {
    source: Arc<dyn LessonSource>,
    sink: Arc<dyn CompletionSink>,
}

impl LessonFlowService {
    #[must_use]
    pub fn new(source: Arc<dyn LessonSource>, sink: Arc<dyn CompletionSink>) -> Self {
        Self { source, sink }
    }

    /// Use one backend for both lesson content and completion.
    #[must_use]
    pub fn with_backend<B>(backend: Arc<B>) -> Self
    where
        B: LessonSource + CompletionSink + 'static,
    {
        let source: Arc<dyn LessonSource> = backend.clone();
        let sink: Arc<dyn CompletionSink> = backend;
        Self::new(source, sink)
    }

    /// Fetch the lesson a ticket was issued for.
    ///
    /// # Errors
    ///
    /// Returns `LessonSourceError` from the underlying source.
    pub async fn fetch(&self, ticket: &LoadTicket) -> Result<Lesson, LessonSourceError> {
        self.source.fetch_lesson(ticket.unit()).await
    }

    /// Send exactly one completion notification. Failures are logged, not retried.
    pub async fn notify_completion(&self, unit: &UnitId) -> CompletionReport {
        let delivered = match self.sink.notify_completed(unit).await {
            Ok(()) => {
                debug!(unit = %unit, "lesson completion recorded");
                true
            }
            Err(err) => {
                warn!(unit = %unit, error = %err, "failed to record lesson completion");
                false
            }
        };
        CompletionReport {
            unit: unit.clone(),
            delivered,
        }
    }

    /// Load `unit` into `controller`. Returns whether a result was applied.
    pub async fn load_into(&self, controller: &mut LessonController, unit: Option<UnitId>) -> bool {
        let Some(ticket) = controller.begin_load(unit) else {
            return false;
        };
        let result = self.fetch(&ticket).await;
        controller.finish_load(ticket, result)
    }

    /// Complete the lesson if it is in review. `None` when the controller is not
    /// ready to complete.
    pub async fn complete(&self, controller: &mut LessonController) -> Option<NavigationSignal> {
        let unit = controller.begin_completion()?;
        let report = self.notify_completion(&unit).await;
        Some(controller.finish_completion(&report))
    }
}
