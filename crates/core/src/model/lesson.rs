use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{LessonId, WordId};
use crate::model::word::Word;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson has no words")]
    Empty,
    #[error("word id {0} appears more than once")]
    DuplicateWordId(WordId),
}

/// Ordered word list for one unit. Word order is the presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    words: Vec<Word>,
}

impl Lesson {
    /// Build a lesson, keeping the word order untouched.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Empty` if `words` is empty and
    /// `LessonError::DuplicateWordId` if two words share an id.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        words: Vec<Word>,
    ) -> Result<Self, LessonError> {
        if words.is_empty() {
            return Err(LessonError::Empty);
        }
        let mut seen = HashSet::with_capacity(words.len());
        for word in &words {
            if !seen.insert(word.id()) {
                return Err(LessonError::DuplicateWordId(word.id().clone()));
            }
        }
        Ok(Self {
            id,
            title: title.into(),
            words,
        })
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn word(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[must_use]
    pub fn contains(&self, id: &WordId) -> bool {
        self.words.iter().any(|word| word.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: &str) -> Word {
        Word::new(WordId::new(id).unwrap(), id, "", "", "", "noun")
    }

    #[test]
    fn empty_lesson_is_rejected() {
        let err = Lesson::new(LessonId::new("l1"), "Empty", Vec::new()).unwrap_err();
        assert_eq!(err, LessonError::Empty);
    }

    #[test]
    fn lesson_keeps_word_order() {
        let lesson = Lesson::new(
            LessonId::new("l1"),
            "Animals",
            vec![word("cat"), word("ant"), word("bee")],
        )
        .unwrap();

        let order: Vec<_> = lesson.words().iter().map(Word::text).collect();
        assert_eq!(order, ["cat", "ant", "bee"]);
        assert_eq!(lesson.len(), 3);
    }

    #[test]
    fn duplicate_word_ids_are_rejected() {
        let err = Lesson::new(
            LessonId::new("l1"),
            "Animals",
            vec![word("cat"), word("ant"), word("cat")],
        )
        .unwrap_err();
        assert_eq!(err, LessonError::DuplicateWordId(WordId::new("cat").unwrap()));
    }

    #[test]
    fn contains_only_lesson_words() {
        let lesson = Lesson::new(LessonId::new("l1"), "Animals", vec![word("cat")]).unwrap();
        assert!(lesson.contains(&WordId::new("cat").unwrap()));
        assert!(!lesson.contains(&WordId::new("dog").unwrap()));
    }
}
