//! Lesson progression state machine.
//!
//! A session walks the lesson's words once in `Learn`, once in `Practice`,
//! and then rests in `Review` until the host completes the lesson. Phases
//! only move forward.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::model::{Lesson, Word, WordId};

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LessonPhase {
    Learn,
    Practice,
    Review,
}

impl LessonPhase {
    /// Short label shown next to the lesson title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LessonPhase::Learn => "Learning",
            LessonPhase::Practice => "Practice",
            LessonPhase::Review => "Review",
        }
    }
}

impl fmt::Display for LessonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LessonPhase::Learn => "learn",
            LessonPhase::Practice => "practice",
            LessonPhase::Review => "review",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("operation requires the {expected} phase, session is in {actual}")]
    WrongPhase {
        expected: LessonPhase,
        actual: LessonPhase,
    },
}

/// What a successful advancement did to the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Moved to the next word in the same phase.
    Advanced { index: usize },
    /// Sequence exhausted; cursor reset to 0 in the new phase.
    PhaseChanged { phase: LessonPhase },
}

//
// ─── PROGRESS / PRACTICE / SUMMARY ─────────────────────────────────────────────
//

/// Position of the cursor within the lesson.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// 1-based position of the current word.
    pub position: usize,
    pub total: usize,
}

impl Progress {
    /// `(index + 1) / total`. Lessons are never empty, so `total > 0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        self.position as f64 / self.total as f64
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

/// Static distractors shown after the real definition.
pub const PLACEHOLDER_DISTRACTORS: [&str; 3] =
    ["Wrong option 1", "Wrong option 2", "Wrong option 3"];

/// Multiple-choice prompt for the current practice word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeQuestion {
    pub word_id: WordId,
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` holding the real definition.
    pub answer_index: usize,
}

impl PracticeQuestion {
    fn for_word(word: &Word) -> Self {
        let mut options = Vec::with_capacity(1 + PLACEHOLDER_DISTRACTORS.len());
        options.push(word.definition().to_string());
        options.extend(PLACEHOLDER_DISTRACTORS.iter().map(ToString::to_string));
        Self {
            word_id: word.id().clone(),
            prompt: word.text().to_string(),
            options,
            answer_index: 0,
        }
    }
}

/// Aggregate shown on the review screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonSummary {
    pub title: String,
    pub words_total: usize,
    pub words_learned: usize,
    pub practice_answered: usize,
    /// Practice picks that matched the definition. Informational only.
    pub practice_matched: usize,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One learner's pass over a lesson.
pub struct LessonSession {
    lesson: Lesson,
    phase: LessonPhase,
    current: usize,
    learned: HashSet<WordId>,
    practice_answered: usize,
    practice_matched: usize,
}

impl LessonSession {
    #[must_use]
    pub fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            phase: LessonPhase::Learn,
            current: 0,
            learned: HashSet::new(),
            practice_answered: 0,
            practice_matched: 0,
        }
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn phase(&self) -> LessonPhase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        self.lesson.word(self.current)
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            position: self.current + 1,
            total: self.lesson.len(),
        }
    }

    #[must_use]
    pub fn learned_count(&self) -> usize {
        self.learned.len()
    }

    #[must_use]
    pub fn is_learned(&self, id: &WordId) -> bool {
        self.learned.contains(id)
    }

    #[must_use]
    pub fn is_ready_to_complete(&self) -> bool {
        self.phase == LessonPhase::Review
    }

    /// Mark the current word learned and move on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongPhase` outside `Learn`; state is untouched.
    pub fn mark_current_word_learned(&mut self) -> Result<Step, SessionError> {
        self.require(LessonPhase::Learn)?;
        if let Some(word) = self.lesson.word(self.current) {
            self.learned.insert(word.id().clone());
        }
        Ok(self.advance(LessonPhase::Practice))
    }

    /// Add a word to the learned set without moving the cursor.
    ///
    /// Returns `false` if the word was already learned or is not part of the lesson.
    pub fn mark_word_learned(&mut self, id: &WordId) -> bool {
        if !self.lesson.contains(id) {
            return false;
        }
        self.learned.insert(id.clone())
    }

    /// The multiple-choice prompt for the current word, only in `Practice`.
    #[must_use]
    pub fn practice_question(&self) -> Option<PracticeQuestion> {
        if self.phase != LessonPhase::Practice {
            return None;
        }
        self.current_word().map(PracticeQuestion::for_word)
    }

    /// Record a practice pick and move on. Every pick advances.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongPhase` outside `Practice`; state is untouched.
    pub fn record_practice_answer(&mut self, choice: usize) -> Result<Step, SessionError> {
        self.require(LessonPhase::Practice)?;
        let matched = self
            .practice_question()
            .is_some_and(|question| question.answer_index == choice);
        self.practice_answered += 1;
        if matched {
            self.practice_matched += 1;
        }
        Ok(self.advance(LessonPhase::Review))
    }

    #[must_use]
    pub fn summary(&self) -> LessonSummary {
        LessonSummary {
            title: self.lesson.title().to_string(),
            words_total: self.lesson.len(),
            words_learned: self.learned.len(),
            practice_answered: self.practice_answered,
            practice_matched: self.practice_matched,
        }
    }

    fn require(&self, expected: LessonPhase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn advance(&mut self, next: LessonPhase) -> Step {
        if self.current + 1 < self.lesson.len() {
            self.current += 1;
            Step::Advanced {
                index: self.current,
            }
        } else {
            self.current = 0;
            self.phase = next;
            Step::PhaseChanged { phase: next }
        }
    }
}

impl fmt::Debug for LessonSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LessonSession")
            .field("lesson_id", self.lesson.id())
            .field("words_len", &self.lesson.len())
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("learned_len", &self.learned.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
