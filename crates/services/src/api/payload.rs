use serde::{Deserialize, Serialize};
use vocab_core::model::{Lesson, LessonId, Word, WordId};

use crate::error::LessonSourceError;

/// Wire shape of `GET /api/units/{unitId}/lesson`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPayload {
    pub id: String,
    pub title: String,
    pub words: Vec<WordPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPayload {
    pub id: String,
    pub word: String,
    pub pronunciation: String,
    pub definition: String,
    pub example_sentence: String,
    pub part_of_speech: String,
}

impl LessonPayload {
    /// Convert into the domain lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonSourceError::InvalidId` for blank word ids and
    /// `LessonSourceError::InvalidLesson` when there are no words or a word id repeats.
    pub fn into_lesson(self) -> Result<Lesson, LessonSourceError> {
        let words = self
            .words
            .into_iter()
            .map(WordPayload::into_word)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Lesson::new(LessonId::new(self.id), self.title, words)?)
    }
}

impl WordPayload {
    fn into_word(self) -> Result<Word, LessonSourceError> {
        Ok(Word::new(
            WordId::new(self.id)?,
            self.word,
            self.pronunciation,
            self.definition,
            self.example_sentence,
            self.part_of_speech,
        ))
    }
}
