//! A single played round
//!
//! Pairs a guess with its feedback. A deceptive round stores both the true
//! score and the perturbed score shown to the player; neither is mutated
//! after creation.

use crate::core::{Code, Feedback};

/// One guess and its scores, appended to the session history
#[derive(Debug, Clone)]
pub struct Round {
    number: u32,
    guess: Code,
    true_feedback: Feedback,
    shown_feedback: Feedback,
    deceptive: bool,
}

impl Round {
    pub(crate) const fn new(
        number: u32,
        guess: Code,
        true_feedback: Feedback,
        shown_feedback: Feedback,
        deceptive: bool,
    ) -> Self {
        Self {
            number,
            guess,
            true_feedback,
            shown_feedback,
            deceptive,
        }
    }

    /// Round number, 1-based, matching the position in the session history
    #[inline]
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// The guess played this round
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    /// The true computed score
    #[inline]
    #[must_use]
    pub const fn true_feedback(&self) -> Feedback {
        self.true_feedback
    }

    /// The score shown to the player (perturbed when deceptive)
    #[inline]
    #[must_use]
    pub const fn shown_feedback(&self) -> Feedback {
        self.shown_feedback
    }

    /// Whether this round's shown feedback was deceptively altered
    #[inline]
    #[must_use]
    pub const fn is_deceptive(&self) -> bool {
        self.deceptive
    }

    /// Whether the guess matched the secret, judged on true feedback
    #[inline]
    #[must_use]
    pub const fn is_winning(&self) -> bool {
        self.true_feedback.is_win()
    }
}
