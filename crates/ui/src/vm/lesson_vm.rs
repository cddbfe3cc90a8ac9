use services::{LessonController, LoadState};
use vocab_core::{LessonPhase, LessonSession, LessonSummary};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonHeaderVm {
    pub title: String,
    pub phase_label: &'static str,
    /// CSS width of the progress bar, e.g. `"50%"`.
    pub progress_width: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearnCardVm {
    pub word: String,
    pub pronunciation: String,
    pub definition: String,
    pub example_sentence: String,
    pub part_of_speech: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeCardVm {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewCardVm {
    pub message: String,
    pub practice_note: Option<String>,
    /// Completion notification is in flight.
    pub saving: bool,
}

/// Everything the lesson page can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonScreenVm {
    Loading,
    NotFound,
    Learn {
        header: LessonHeaderVm,
        card: LearnCardVm,
    },
    Practice {
        header: LessonHeaderVm,
        card: PracticeCardVm,
    },
    Review {
        header: Option<LessonHeaderVm>,
        card: ReviewCardVm,
    },
}

impl LessonScreenVm {
    /// Map controller state to a screen.
    ///
    /// `has_unit` tells an untouched controller (load about to start) apart from
    /// one that was never given a unit id, which renders as not found.
    #[must_use]
    pub fn from_controller(controller: &LessonController, has_unit: bool) -> Self {
        match controller.state() {
            LoadState::NotLoaded if has_unit => Self::Loading,
            LoadState::NotLoaded | LoadState::NotFound { .. } => Self::NotFound,
            LoadState::Loading { .. } => Self::Loading,
            LoadState::Ready { session, .. } => Self::from_session(session),
            LoadState::Completing { summary, .. } => Self::Review {
                header: None,
                card: review_card(summary, true),
            },
            LoadState::Finished { summary } => Self::Review {
                header: None,
                card: review_card(summary, false),
            },
        }
    }

    fn from_session(session: &LessonSession) -> Self {
        let header = header(session);
        match session.phase() {
            LessonPhase::Learn => match session.current_word() {
                Some(word) => Self::Learn {
                    header,
                    card: LearnCardVm {
                        word: word.text().to_string(),
                        pronunciation: word.pronunciation().to_string(),
                        definition: word.definition().to_string(),
                        example_sentence: word.example_sentence().to_string(),
                        part_of_speech: word.part_of_speech().to_string(),
                    },
                },
                None => Self::NotFound,
            },
            LessonPhase::Practice => match session.practice_question() {
                Some(question) => Self::Practice {
                    header,
                    card: PracticeCardVm {
                        question: format!("What does \"{}\" mean?", question.prompt),
                        options: question.options,
                    },
                },
                None => Self::NotFound,
            },
            LessonPhase::Review => Self::Review {
                header: Some(header),
                card: review_card(&session.summary(), false),
            },
        }
    }

    #[must_use]
    pub fn header(&self) -> Option<&LessonHeaderVm> {
        match self {
            Self::Learn { header, .. } | Self::Practice { header, .. } => Some(header),
            Self::Review { header, .. } => header.as_ref(),
            Self::Loading | Self::NotFound => None,
        }
    }
}

fn header(session: &LessonSession) -> LessonHeaderVm {
    LessonHeaderVm {
        title: session.lesson().title().to_string(),
        phase_label: session.phase().label(),
        progress_width: format!("{:.0}%", session.progress().percent()),
    }
}

fn review_card(summary: &LessonSummary, saving: bool) -> ReviewCardVm {
    let message = format!(
        "You've learned {} words. Keep practicing to master them all.",
        summary.words_learned
    );
    let practice_note = (summary.practice_answered > 0).then(|| {
        format!(
            "{} of {} practice answers matched the definition.",
            summary.practice_matched, summary.practice_answered
        )
    });
    ReviewCardVm {
        message,
        practice_note,
        saving,
    }
}
