#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;

pub use error::Error;
pub use session::{
    LessonPhase, LessonSession, LessonSummary, PracticeQuestion, Progress, SessionError, Step,
};
