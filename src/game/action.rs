//! Player actions at the input boundary
//!
//! The round loop consumes validated actions: a 4-digit guess or a truth-scan
//! request. Anything else is a recoverable parse error, surfaced as a message
//! and never allowed to crash the orchestrator.

use crate::core::{Code, CodeError};
use std::fmt;

/// A validated action supplied by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    /// A 4-digit guess to score against the secret
    Guess(Code),
    /// Request to reveal the true feedback of a past round
    ScanRequest,
}

/// Error type for unusable player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Input looked like a guess but was not a valid code
    BadCode(CodeError),
    /// Input matched no known action
    Unrecognized(String),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadCode(err) => write!(f, "Invalid guess: {err}"),
            Self::Unrecognized(input) => {
                write!(f, "Unrecognized input '{input}'. Enter 4 digits (1-6) or 'scan'.")
            }
        }
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadCode(err) => Some(err),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Parse raw input into a player action
///
/// Accepts:
/// - `scan` / `s` (case-insensitive) for a truth-scan request
/// - a string of digits for a guess
///
/// # Errors
/// Returns `ActionError::BadCode` for digit strings that are not valid codes
/// and `ActionError::Unrecognized` for everything else.
pub fn parse_action(input: &str) -> Result<PlayerAction, ActionError> {
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case("scan") || trimmed.eq_ignore_ascii_case("s") {
        return Ok(PlayerAction::ScanRequest);
    }

    if !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit()) {
        return trimmed
            .parse::<Code>()
            .map(PlayerAction::Guess)
            .map_err(ActionError::BadCode);
    }

    Err(ActionError::Unrecognized(trimmed.to_string()))
}
