//! Secret code generation
//!
//! The hidden code a player must guess. Generated fresh at the start of each
//! game from an injected RNG so tests can seed deterministically.

use super::code::{CODE_LENGTH, Code, CodeError, DIGIT_MAX, DIGIT_MIN};
use rand::Rng;
use std::fmt;

/// The secret code owned by one game session
///
/// Never mutated after creation; regenerated at new-game initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretCode(Code);

impl SecretCode {
    /// Generate a random secret of the given length
    ///
    /// The game domain is fixed at 4 digits; any other length is rejected
    /// without creating partial state. Each digit is drawn independently and
    /// uniformly from [1,6].
    ///
    /// # Errors
    /// Returns `CodeError::UnsupportedLength` if `length` is not 4.
    ///
    /// # Panics
    /// Will not panic - generated digits are in range by construction.
    pub fn generate<R: Rng>(length: usize, rng: &mut R) -> Result<Self, CodeError> {
        if length != CODE_LENGTH {
            return Err(CodeError::UnsupportedLength(length));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for digit in &mut digits {
            *digit = rng.random_range(DIGIT_MIN..=DIGIT_MAX);
        }

        Ok(Self(Code::new(&digits).expect("generated digits are in range")))
    }

    /// Wrap an existing code as the secret
    ///
    /// Used by tests and tools that need a known secret.
    #[must_use]
    pub const fn from_code(code: Code) -> Self {
        Self(code)
    }

    /// Get the underlying code
    #[inline]
    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.0
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
