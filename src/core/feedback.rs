//! Guess scoring against the secret code
//!
//! Feedback counts exact-position matches and misplaced digits:
//! - Exact: guess digit equals the secret digit at the same index
//! - Misplaced: guess digit matches an unused secret digit at another index
//!
//! Duplicate digits respect multiplicity: each secret digit can satisfy at
//! most one guess digit, exact matches claiming theirs first.

use super::code::{CODE_LENGTH, Code};
use rand::Rng;
use std::fmt;

/// Scored feedback for one guess
///
/// Both counts are in [0,4] and their sum never exceeds 4 for true feedback.
/// A deceptive round displays a perturbed copy; the true values stay intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    misplaced: u8,
}

impl Feedback {
    /// A winning score (all four digits in position)
    pub const WIN: Self = Self {
        exact: CODE_LENGTH as u8,
        misplaced: 0,
    };

    /// Score a guess against the secret
    ///
    /// # Algorithm
    /// 1. First pass: count exact-position matches and remove each matched
    ///    digit from the secret's available pool
    /// 2. Second pass: for every remaining guess digit, consume one matching
    ///    digit from the pool if any remains
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let secret = Code::new(&[1, 2, 3, 4]).unwrap();
    /// let guess = Code::new(&[1, 3, 5, 6]).unwrap();
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// // 1 is in position, 3 is the right digit in the wrong position
    /// assert_eq!(feedback.exact(), 1);
    /// assert_eq!(feedback.misplaced(), 1);
    /// ```
    #[must_use]
    pub fn score(secret: &Code, guess: &Code) -> Self {
        let mut available = secret.digit_counts();
        let mut exact = 0u8;

        // First pass: exact-position matches claim their digit from the pool
        for i in 0..CODE_LENGTH {
            if guess.digit_at(i) == secret.digit_at(i) {
                exact += 1;

                let digit = guess.digit_at(i);
                if let Some(count) = available.get_mut(&digit) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: remaining guess digits consume what is left of the pool
        let mut misplaced = 0u8;
        for i in 0..CODE_LENGTH {
            if guess.digit_at(i) != secret.digit_at(i) {
                let digit = guess.digit_at(i);
                if let Some(count) = available.get_mut(&digit)
                    && *count > 0
                {
                    misplaced += 1;
                    *count -= 1;
                }
            }
        }

        Self { exact, misplaced }
    }

    /// Count of digits in the correct position (0-4)
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Count of correct digits in the wrong position (0-4)
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> u8 {
        self.misplaced
    }

    /// Check if this score means the guess matched the secret
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact == CODE_LENGTH as u8
    }

    /// Produce a display-only perturbed copy for a deceptive round
    ///
    /// Exactly one of the two counts moves by exactly one, the count chosen
    /// pseudo-randomly. The direction is forced away from the [0,4] bounds so
    /// the shown value always differs from the true one. The true feedback is
    /// not altered; callers keep both.
    #[must_use]
    pub fn perturbed<R: Rng>(self, rng: &mut R) -> Self {
        let mut shown = self;

        let target = if rng.random_bool(0.5) {
            &mut shown.exact
        } else {
            &mut shown.misplaced
        };

        let increase = if *target == 0 {
            true
        } else if *target >= CODE_LENGTH as u8 {
            false
        } else {
            rng.random_bool(0.5)
        };

        if increase {
            *target += 1;
        } else {
            *target -= 1;
        }

        shown
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Correct positions: {}, Misplaced: {}",
            self.exact, self.misplaced
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn code(digits: [u8; 4]) -> Code {
        Code::new(&digits).unwrap()
    }

    #[test]
    fn score_perfect_guess() {
        let secret = code([1, 2, 3, 4]);
        let feedback = Feedback::score(&secret, &secret);

        assert_eq!(feedback.exact(), 4);
        assert_eq!(feedback.misplaced(), 0);
        assert!(feedback.is_win());
        assert_eq!(feedback, Feedback::WIN);
    }

    #[test]
    fn score_no_matches() {
        let secret = code([1, 1, 2, 2]);
        let guess = code([3, 4, 5, 6]);
        let feedback = Feedback::score(&secret, &guess);

        assert_eq!(feedback.exact(), 0);
        assert_eq!(feedback.misplaced(), 0);
        assert!(!feedback.is_win());
    }

    #[test]
    fn score_all_misplaced() {
        let secret = code([1, 2, 3, 4]);
        let guess = code([4, 3, 2, 1]);
        let feedback = Feedback::score(&secret, &guess);

        assert_eq!(feedback.exact(), 0);
        assert_eq!(feedback.misplaced(), 4);
    }

    #[test]
    fn score_rules_example() {
        // The worked example from the game rules: secret 1234, guess 1356
        let secret = code([1, 2, 3, 4]);
        let guess = code([1, 3, 5, 6]);
        let feedback = Feedback::score(&secret, &guess);

        assert_eq!(feedback.exact(), 1);
        assert_eq!(feedback.misplaced(), 1);
    }

    #[test]
    fn score_duplicates_respect_multiplicity() {
        // Guess duplicates beyond the secret's supply earn no extra credit
        let secret = code([1, 1, 2, 2]);
        let guess = code([1, 1, 1, 1]);
        let feedback = Feedback::score(&secret, &guess);

        assert_eq!(feedback.exact(), 2);
        assert_eq!(feedback.misplaced(), 0);
    }

    #[test]
    fn score_exact_match_claims_digit_first() {
        // Secret has one 2; the exact match at index 1 consumes it, so the
        // guess's other 2 earns nothing
        let secret = code([1, 2, 3, 4]);
        let guess = code([2, 2, 5, 5]);
        let feedback = Feedback::score(&secret, &guess);

        assert_eq!(feedback.exact(), 1);
        assert_eq!(feedback.misplaced(), 0);
    }

    #[test]
    fn score_sum_invariant_exhaustive() {
        // Every guess against every secret keeps exact + misplaced <= 4
        let mut codes = Vec::new();
        for a in 1..=6u8 {
            for b in 1..=6u8 {
                codes.push(code([a, b, a, b]));
            }
        }

        for secret in &codes {
            for guess in &codes {
                let feedback = Feedback::score(secret, guess);
                assert!(feedback.exact() + feedback.misplaced() <= CODE_LENGTH as u8);
            }
        }
    }

    #[test]
    fn perturbed_changes_exactly_one_count_by_one() {
        let mut rng = SmallRng::seed_from_u64(42);
        let secret = code([1, 2, 3, 4]);
        let guess = code([1, 3, 5, 6]);
        let truth = Feedback::score(&secret, &guess);

        for _ in 0..200 {
            let shown = truth.perturbed(&mut rng);

            let exact_delta = shown.exact().abs_diff(truth.exact());
            let misplaced_delta = shown.misplaced().abs_diff(truth.misplaced());

            assert_eq!(exact_delta + misplaced_delta, 1);
            assert_ne!(shown, truth);
        }
    }

    #[test]
    fn perturbed_stays_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(99);

        // Boundary scores: zero counts can only go up, full counts only down
        let extremes = [
            Feedback::score(&code([1, 1, 1, 1]), &code([2, 2, 2, 2])),
            Feedback::WIN,
        ];

        for truth in extremes {
            for _ in 0..100 {
                let shown = truth.perturbed(&mut rng);
                assert!(shown.exact() <= CODE_LENGTH as u8);
                assert!(shown.misplaced() <= CODE_LENGTH as u8);
                assert_ne!(shown, truth);
            }
        }
    }

    #[test]
    fn feedback_display() {
        let secret = code([1, 2, 3, 4]);
        let guess = code([1, 3, 5, 6]);
        let feedback = Feedback::score(&secret, &guess);

        assert_eq!(format!("{feedback}"), "Correct positions: 1, Misplaced: 1");
    }
}
