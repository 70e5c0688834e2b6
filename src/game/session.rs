//! Game session orchestration
//!
//! A `GameSession` owns everything one game needs: the secret, the round
//! history, the truth scanner, the deception quota, and its own RNG. Sessions
//! are independent values; running several at once shares nothing.

use super::deception::{DECEPTION_PROBABILITY, DeceptionPolicy};
use super::round::Round;
use super::scanner::{ScanError, ScanReport, TruthScanner};
use crate::core::{CODE_LENGTH, Code, Feedback, SecretCode};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Maximum rounds before the game is lost
pub const MAX_ROUNDS: usize = 12;

/// Session construction options
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Per-round chance of deceptive feedback while quota remains
    pub deception_probability: f64,
    /// Seed for the session RNG; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            deception_probability: DECEPTION_PROBABILITY,
            seed: None,
        }
    }
}

/// Outcome of a session at a point in time
///
/// A win on the final round takes precedence over round exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { rounds_played: usize },
    Lost,
}

/// One game of Mastermind from initialization to game over
pub struct GameSession {
    secret: SecretCode,
    rounds: Vec<Round>,
    scanner: TruthScanner,
    deception: DeceptionPolicy,
    rng: SmallRng,
}

impl GameSession {
    /// Start a session with default settings and an OS-seeded RNG
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Start a session with explicit settings
    ///
    /// # Panics
    /// Will not panic - `CODE_LENGTH` is the supported generation length.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let secret =
            SecretCode::generate(CODE_LENGTH, &mut rng).expect("CODE_LENGTH is supported");

        Self {
            secret,
            rounds: Vec::new(),
            scanner: TruthScanner::new(),
            deception: DeceptionPolicy::new(config.deception_probability),
            rng,
        }
    }

    /// Start a session against a known secret
    ///
    /// Used by tests and tools that need to control the answer. The fixed
    /// secret lasts for the current game only: `reset` performs full
    /// new-game initialization and draws a fresh random secret.
    #[must_use]
    pub fn with_secret(secret: SecretCode, config: SessionConfig) -> Self {
        let mut session = Self::with_config(config);
        session.secret = secret;
        session
    }

    /// New-game initialization: fresh secret, empty history, re-armed scanner
    /// and deception quota
    ///
    /// Applied for every game, including replays.
    ///
    /// # Panics
    /// Will not panic - `CODE_LENGTH` is the supported generation length.
    pub fn reset(&mut self) {
        self.rounds.clear();
        self.secret =
            SecretCode::generate(CODE_LENGTH, &mut self.rng).expect("CODE_LENGTH is supported");
        self.scanner.reset();
        self.deception.reset();
    }

    /// Score a guess, apply the deception policy, and record the round
    ///
    /// # Panics
    /// Will not panic - the round is pushed before the access.
    pub fn play_guess(&mut self, guess: Code) -> &Round {
        let true_feedback = Feedback::score(self.secret.code(), &guess);

        let deceptive = self.deception.roll(&mut self.rng);
        let shown_feedback = if deceptive {
            true_feedback.perturbed(&mut self.rng)
        } else {
            true_feedback
        };

        let number = self.rounds.len() as u32 + 1;
        self.rounds
            .push(Round::new(number, guess, true_feedback, shown_feedback, deceptive));

        self.rounds.last().expect("round just pushed")
    }

    /// Run the one-shot truth scan against the current history
    ///
    /// Does not consume a guess attempt.
    ///
    /// # Errors
    /// Returns `ScanError` if the scan was already used or no rounds exist;
    /// session state is unchanged on failure.
    pub fn request_scan(&mut self) -> Result<ScanReport, ScanError> {
        self.scanner.scan(&self.rounds, &self.secret)
    }

    /// Current outcome, judged on true feedback
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.rounds.last() {
            Some(last) if last.is_winning() => GameStatus::Won {
                rounds_played: self.rounds.len(),
            },
            Some(_) if self.rounds.len() >= MAX_ROUNDS => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    /// Whether the round loop should stop
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self.status(), GameStatus::InProgress)
    }

    /// Rounds played so far, in order
    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds played so far
    #[inline]
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    /// Deceptive rounds used this session (never exceeds 3)
    #[inline]
    #[must_use]
    pub const fn deceptive_rounds_used(&self) -> u8 {
        self.deception.used()
    }

    /// The hidden secret (revealed on loss)
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretCode {
        &self.secret
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
