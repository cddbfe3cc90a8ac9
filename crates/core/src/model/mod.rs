mod ids;
mod lesson;
mod word;

pub use ids::{IdError, LessonId, UnitId, WordId};
pub use lesson::{Lesson, LessonError};
pub use word::Word;
