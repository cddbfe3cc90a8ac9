use std::sync::Arc;

mod speech;

/// Plays a word aloud. Fire-and-forget: callers never learn the outcome.
pub trait Pronouncer: Send + Sync {
    fn speak(&self, text: &str);
}

pub type PronouncerRef = Arc<dyn Pronouncer>;

pub use speech::{DesktopPronouncer, SilentPronouncer};
