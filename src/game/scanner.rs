//! One-shot truth scan
//!
//! Once per game the player may reveal the true feedback of the most recent
//! round. The scanner recomputes the score from the stored guess and secret;
//! the round itself is never mutated, only a corrected view is surfaced.

use super::round::Round;
use crate::core::{Code, Feedback, SecretCode};
use std::fmt;

/// Error type for scan requests that cannot run
///
/// Both variants leave the scanner unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The scan was already spent this session
    AlreadyUsed,
    /// No rounds have been played yet
    NoRounds,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyUsed => write!(f, "Truth scan already used this game"),
            Self::NoRounds => write!(f, "No rounds to scan yet"),
        }
    }
}

impl std::error::Error for ScanError {}

/// Corrected view of a past round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub round_number: u32,
    pub guess: Code,
    pub true_feedback: Feedback,
    pub was_deceptive: bool,
}

/// Session-scoped single-use scan capability
#[derive(Debug, Default)]
pub struct TruthScanner {
    used: bool,
}

impl TruthScanner {
    #[must_use]
    pub const fn new() -> Self {
        Self { used: false }
    }

    /// Whether the scan has been spent this session
    #[inline]
    #[must_use]
    pub const fn is_used(&self) -> bool {
        self.used
    }

    /// Re-arm the scanner for a new game
    pub fn reset(&mut self) {
        self.used = false;
    }

    /// Reveal the true feedback of the most recent round
    ///
    /// Marks the scanner used on success. Every later call in the same
    /// session fails with `ScanError::AlreadyUsed` and has no side effects.
    ///
    /// # Errors
    /// Returns `ScanError::AlreadyUsed` if the scan was spent this session,
    /// or `ScanError::NoRounds` if the history is empty.
    pub fn scan(&mut self, rounds: &[Round], secret: &SecretCode) -> Result<ScanReport, ScanError> {
        if self.used {
            return Err(ScanError::AlreadyUsed);
        }

        let target = rounds.last().ok_or(ScanError::NoRounds)?;
        let true_feedback = Feedback::score(secret.code(), target.guess());

        self.used = true;

        Ok(ScanReport {
            round_number: target.number(),
            guess: target.guess().clone(),
            true_feedback,
            was_deceptive: target.is_deceptive(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(digits: [u8; 4]) -> Code {
        Code::new(&digits).unwrap()
    }

    fn round(number: u32, secret: &Code, guess: Code, deceptive: bool) -> Round {
        let truth = Feedback::score(secret, &guess);
        Round::new(number, guess, truth, truth, deceptive)
    }

    #[test]
    fn scan_fails_on_empty_history() {
        let mut scanner = TruthScanner::new();
        let secret = SecretCode::from_code(code([1, 2, 3, 4]));

        assert_eq!(scanner.scan(&[], &secret), Err(ScanError::NoRounds));
        assert!(!scanner.is_used());
    }

    #[test]
    fn scan_reveals_most_recent_round() {
        let mut scanner = TruthScanner::new();
        let secret_code = code([1, 2, 3, 4]);
        let secret = SecretCode::from_code(secret_code.clone());

        let rounds = vec![
            round(1, &secret_code, code([5, 5, 5, 5]), false),
            round(2, &secret_code, code([1, 3, 5, 6]), true),
        ];

        let report = scanner.scan(&rounds, &secret).unwrap();

        assert_eq!(report.round_number, 2);
        assert_eq!(report.guess, code([1, 3, 5, 6]));
        assert_eq!(report.true_feedback.exact(), 1);
        assert_eq!(report.true_feedback.misplaced(), 1);
        assert!(report.was_deceptive);
        assert!(scanner.is_used());
    }

    #[test]
    fn second_scan_always_fails() {
        let mut scanner = TruthScanner::new();
        let secret_code = code([1, 2, 3, 4]);
        let secret = SecretCode::from_code(secret_code.clone());
        let rounds = vec![round(1, &secret_code, code([1, 1, 1, 1]), false)];

        assert!(scanner.scan(&rounds, &secret).is_ok());
        assert_eq!(scanner.scan(&rounds, &secret), Err(ScanError::AlreadyUsed));
        assert_eq!(scanner.scan(&rounds, &secret), Err(ScanError::AlreadyUsed));
    }

    #[test]
    fn reset_rearms_the_scanner() {
        let mut scanner = TruthScanner::new();
        let secret_code = code([1, 2, 3, 4]);
        let secret = SecretCode::from_code(secret_code.clone());
        let rounds = vec![round(1, &secret_code, code([1, 1, 1, 1]), false)];

        assert!(scanner.scan(&rounds, &secret).is_ok());
        scanner.reset();
        assert!(!scanner.is_used());
        assert!(scanner.scan(&rounds, &secret).is_ok());
    }

    #[test]
    fn failed_scan_does_not_consume_the_use() {
        let mut scanner = TruthScanner::new();
        let secret_code = code([1, 2, 3, 4]);
        let secret = SecretCode::from_code(secret_code.clone());

        // Empty-history failure must not spend the scan
        assert_eq!(scanner.scan(&[], &secret), Err(ScanError::NoRounds));

        let rounds = vec![round(1, &secret_code, code([1, 1, 1, 1]), false)];
        assert!(scanner.scan(&rounds, &secret).is_ok());
    }
}
