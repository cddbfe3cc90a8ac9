use std::mem;

use tracing::{debug, warn};
use vocab_core::model::{Lesson, UnitId};
use vocab_core::{LessonSession, LessonSummary, Step};

use super::navigation::NavigationSignal;
use crate::error::LessonSourceError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of one lesson attempt as seen by the host.
#[derive(Debug)]
pub enum LoadState {
    /// No unit id was supplied, or the controller was torn down.
    NotLoaded,
    Loading {
        unit: UnitId,
    },
    /// Fetch failed or returned no usable lesson.
    NotFound {
        unit: UnitId,
    },
    Ready {
        unit: UnitId,
        session: LessonSession,
    },
    /// Completion notification in flight; the session itself is gone.
    Completing {
        unit: UnitId,
        summary: LessonSummary,
    },
    Finished {
        summary: LessonSummary,
    },
}

/// Proof that a fetch was started by the current load.
///
/// A ticket from a superseded load or a torn-down controller is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    unit: UnitId,
}

impl LoadTicket {
    #[must_use]
    pub fn unit(&self) -> &UnitId {
        &self.unit
    }
}

/// Outcome of the completion notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    pub unit: UnitId,
    pub delivered: bool,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Drives one lesson attempt: load, learn, practice, review, complete.
///
/// All methods are synchronous. The two suspending steps (fetching the lesson and
/// notifying completion) are split into `begin_*`/`finish_*` pairs so a host never
/// holds the controller across an await.
#[derive(Debug)]
pub struct LessonController {
    state: LoadState,
    generation: u64,
}

impl Default for LessonController {
    fn default() -> Self {
        Self::new()
    }
}

impl LessonController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: LoadState::NotLoaded,
            generation: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn session(&self) -> Option<&LessonSession> {
        match &self.state {
            LoadState::Ready { session, .. } => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }

    /// Start loading `unit`. Without a unit nothing is requested and the
    /// controller stays `NotLoaded`.
    pub fn begin_load(&mut self, unit: Option<UnitId>) -> Option<LoadTicket> {
        let Some(unit) = unit else {
            debug!("no unit id supplied, skipping lesson fetch");
            return None;
        };

        self.generation += 1;
        self.state = LoadState::Loading { unit: unit.clone() };
        Some(LoadTicket {
            generation: self.generation,
            unit,
        })
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale and the
    /// result was dropped.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Lesson, LessonSourceError>,
    ) -> bool {
        let current = ticket.generation == self.generation
            && matches!(&self.state, LoadState::Loading { unit } if *unit == ticket.unit);
        if !current {
            debug!(unit = %ticket.unit, "dropping stale lesson fetch result");
            return false;
        }

        self.state = match result {
            Ok(lesson) => LoadState::Ready {
                unit: ticket.unit,
                session: LessonSession::new(lesson),
            },
            Err(err) => {
                warn!(unit = %ticket.unit, error = %err, "lesson unavailable");
                LoadState::NotFound { unit: ticket.unit }
            }
        };
        true
    }

    /// Forget the session and invalidate any outstanding load.
    pub fn tear_down(&mut self) {
        self.generation += 1;
        self.state = LoadState::NotLoaded;
    }

    /// Learn-phase "I know this word". No-op outside `Learn` or without a lesson.
    pub fn mark_current_word_learned(&mut self) -> Option<Step> {
        let LoadState::Ready { session, .. } = &mut self.state else {
            debug!("ignoring mark-learned: no lesson loaded");
            return None;
        };
        match session.mark_current_word_learned() {
            Ok(step) => Some(step),
            Err(err) => {
                debug!(error = %err, "ignoring mark-learned");
                None
            }
        }
    }

    /// Practice-phase answer. No-op outside `Practice` or without a lesson.
    pub fn record_practice_answer(&mut self, choice: usize) -> Option<Step> {
        let LoadState::Ready { session, .. } = &mut self.state else {
            debug!("ignoring practice answer: no lesson loaded");
            return None;
        };
        match session.record_practice_answer(choice) {
            Ok(step) => Some(step),
            Err(err) => {
                debug!(error = %err, "ignoring practice answer");
                None
            }
        }
    }

    /// Leave `Review` and hand back the unit to notify. The session is
    /// discarded; only its summary is kept.
    pub fn begin_completion(&mut self) -> Option<UnitId> {
        let LoadState::Ready { unit, session } = &self.state else {
            debug!("ignoring completion: no lesson loaded");
            return None;
        };
        if !session.is_ready_to_complete() {
            debug!(phase = %session.phase(), "ignoring completion before review");
            return None;
        }

        let unit = unit.clone();
        let summary = session.summary();
        self.state = LoadState::Completing {
            unit: unit.clone(),
            summary,
        };
        Some(unit)
    }

    /// Close the attempt. Navigation happens whether or not the backend heard us.
    pub fn finish_completion(&mut self, report: &CompletionReport) -> NavigationSignal {
        match mem::replace(&mut self.state, LoadState::NotLoaded) {
            LoadState::Completing { summary, .. } => {
                debug!(unit = %report.unit, delivered = report.delivered, "lesson finished");
                self.state = LoadState::Finished { summary };
            }
            other => self.state = other,
        }
        NavigationSignal::Dashboard
    }

    #[must_use]
    pub fn go_back(&self) -> NavigationSignal {
        NavigationSignal::Back
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
