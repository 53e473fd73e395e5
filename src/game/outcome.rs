//! Results of a guess

use super::GuessError;
use crate::core::{Feedback, Word};

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// State of the session after a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    InProgress,
    Solved,
    Exhausted,
    Rejected(GuessError),
}

impl OutcomeKind {
    /// True for `Solved` and `Exhausted`
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Everything a host needs to answer a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub kind: OutcomeKind,
    /// `None` when the guess was rejected
    pub feedback: Option<Feedback>,
    pub remaining_guesses: usize,
    pub history: Vec<GuessRecord>,
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self.kind, OutcomeKind::Rejected(_))
    }

    /// The rejection reason, if any
    #[must_use]
    pub const fn rejection(&self) -> Option<&GuessError> {
        match &self.kind {
            OutcomeKind::Rejected(err) => Some(err),
            _ => None,
        }
    }
}
