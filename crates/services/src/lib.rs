#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod lessons;

pub use api::{CompletionSink, HttpLessonApi, InMemoryLessonApi, LessonSource};
pub use config::{ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{ApiSetupError, CompletionError, LessonSourceError};
pub use lessons::{
    CompletionReport, LessonController, LessonFlowService, LoadState, LoadTicket,
    NavigationSignal,
};
