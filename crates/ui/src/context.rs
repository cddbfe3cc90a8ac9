use std::sync::Arc;

use services::LessonFlowService;
use vocab_core::model::UnitId;

use crate::platform::PronouncerRef;

pub trait UiApp: Send + Sync {
    fn lesson_flow(&self) -> Arc<LessonFlowService>;
    fn pronouncer(&self) -> PronouncerRef;

    /// Unit offered from the home page, if one was configured.
    fn default_unit(&self) -> Option<UnitId>;
}

#[derive(Clone)]
pub struct AppContext {
    lesson_flow: Arc<LessonFlowService>,
    pronouncer: PronouncerRef,
    default_unit: Option<UnitId>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lesson_flow: app.lesson_flow(),
            pronouncer: app.pronouncer(),
            default_unit: app.default_unit(),
        }
    }

    #[must_use]
    pub fn lesson_flow(&self) -> Arc<LessonFlowService> {
        Arc::clone(&self.lesson_flow)
    }

    #[must_use]
    pub fn pronouncer(&self) -> PronouncerRef {
        Arc::clone(&self.pronouncer)
    }

    #[must_use]
    pub fn default_unit(&self) -> Option<UnitId> {
        self.default_unit.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
