use crate::model::ids::WordId;

/// A single vocabulary entry as presented in a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    id: WordId,
    word: String,
    pronunciation: String,
    definition: String,
    example_sentence: String,
    part_of_speech: String,
}

impl Word {
    #[must_use]
    pub fn new(
        id: WordId,
        word: impl Into<String>,
        pronunciation: impl Into<String>,
        definition: impl Into<String>,
        example_sentence: impl Into<String>,
        part_of_speech: impl Into<String>,
    ) -> Self {
        Self {
            id,
            word: word.into(),
            pronunciation: pronunciation.into(),
            definition: definition.into(),
            example_sentence: example_sentence.into(),
            part_of_speech: part_of_speech.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &WordId {
        &self.id
    }

    /// Display text of the word; also what gets spoken for pronunciation.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[must_use]
    pub fn example_sentence(&self) -> &str {
        &self.example_sentence
    }

    #[must_use]
    pub fn part_of_speech(&self) -> &str {
        &self.part_of_speech
    }
}
