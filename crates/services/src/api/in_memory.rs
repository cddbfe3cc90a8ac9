use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use vocab_core::model::{Lesson, UnitId};

use super::{CompletionSink, LessonSource};
use crate::error::{CompletionError, LessonSourceError};

#[derive(Default)]
struct InMemoryState {
    lessons: HashMap<UnitId, Lesson>,
    fetches: Vec<UnitId>,
    completions: Vec<UnitId>,
    fail_completions: bool,
}

/// In-process lesson backend for tests and the offline demo.
///
/// Records every fetch and completion it receives.
#[derive(Clone, Default)]
pub struct InMemoryLessonApi {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryLessonApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_lesson(self, unit: UnitId, lesson: Lesson) -> Self {
        self.insert_lesson(unit, lesson);
        self
    }

    pub fn insert_lesson(&self, unit: UnitId, lesson: Lesson) {
        if let Ok(mut guard) = self.state.lock() {
            guard.lessons.insert(unit, lesson);
        }
    }

    /// Make every following completion notification fail.
    pub fn set_fail_completions(&self, fail: bool) {
        if let Ok(mut guard) = self.state.lock() {
            guard.fail_completions = fail;
        }
    }

    /// Units requested so far, in order.
    #[must_use]
    pub fn fetch_requests(&self) -> Vec<UnitId> {
        self.state
            .lock()
            .map(|guard| guard.fetches.clone())
            .unwrap_or_default()
    }

    /// Completion notifications received so far, failed ones included.
    #[must_use]
    pub fn completions(&self) -> Vec<UnitId> {
        self.state
            .lock()
            .map(|guard| guard.completions.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LessonSource for InMemoryLessonApi {
    async fn fetch_lesson(&self, unit: &UnitId) -> Result<Lesson, LessonSourceError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| LessonSourceError::Unavailable(e.to_string()))?;
        guard.fetches.push(unit.clone());
        guard
            .lessons
            .get(unit)
            .cloned()
            .ok_or_else(|| LessonSourceError::NotFound(unit.clone()))
    }
}

#[async_trait]
impl CompletionSink for InMemoryLessonApi {
    async fn notify_completed(&self, unit: &UnitId) -> Result<(), CompletionError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| CompletionError::Unavailable(e.to_string()))?;
        guard.completions.push(unit.clone());
        if guard.fail_completions {
            return Err(CompletionError::Unavailable("completion rejected".into()));
        }
        Ok(())
    }
}
