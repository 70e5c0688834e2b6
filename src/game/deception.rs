//! Deceptive-round selection policy
//!
//! Each new round may be marked deceptive with a fixed probability, capped at
//! three deceptive rounds per game session. The counter resets with the
//! session at new-game initialization.

use rand::Rng;

/// Maximum deceptive rounds per game session
pub const MAX_DECEPTIVE_ROUNDS: u8 = 3;

/// Chance that a new round is marked deceptive while quota remains
///
/// Tunable constant; 0.25 gives roughly 2-3 deceptive rounds over a full
/// 12-round game.
pub const DECEPTION_PROBABILITY: f64 = 0.25;

/// Per-session deception quota and selection policy
#[derive(Debug, Clone)]
pub struct DeceptionPolicy {
    probability: f64,
    used: u8,
}

impl DeceptionPolicy {
    /// Create a policy with the given per-round probability
    ///
    /// The probability is clamped to [0,1]. Tests use the 0.0 and 1.0
    /// endpoints for deterministic selection.
    #[must_use]
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            used: 0,
        }
    }

    /// Decide whether the next round is deceptive
    ///
    /// Returns `false` unconditionally once the session quota is exhausted;
    /// otherwise draws against the configured probability and counts a hit.
    pub fn roll<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.used >= MAX_DECEPTIVE_ROUNDS {
            return false;
        }

        let deceive = rng.random_bool(self.probability);
        if deceive {
            self.used += 1;
        }

        deceive
    }

    /// Deceptive rounds used so far this session (never exceeds 3)
    #[inline]
    #[must_use]
    pub const fn used(&self) -> u8 {
        self.used
    }

    /// Reset the quota for a new game
    pub fn reset(&mut self) {
        self.used = 0;
    }
}

impl Default for DeceptionPolicy {
    fn default() -> Self {
        Self::new(DECEPTION_PROBABILITY)
    }
}
