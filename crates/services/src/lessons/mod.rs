mod controller;
mod navigation;
mod workflow;

// Public API of the lesson subsystem.
pub use controller::{CompletionReport, LessonController, LoadState, LoadTicket};
pub use navigation::NavigationSignal;
pub use workflow::LessonFlowService;
