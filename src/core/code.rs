//! Mastermind code representation
//!
//! A `Code` stores the fixed 4-digit sequence used for both the hidden secret
//! and player guesses. Digits range over [1,6].

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of digits in every code
pub const CODE_LENGTH: usize = 4;

/// Smallest digit a code may contain
pub const DIGIT_MIN: u8 = 1;

/// Largest digit a code may contain
pub const DIGIT_MAX: u8 = 6;

/// A 4-digit code with each digit in [1,6]
///
/// Immutable once constructed. Equality is element-wise in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    digits: [u8; CODE_LENGTH],
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    DigitOutOfRange(u8),
    InvalidCharacter(char),
    UnsupportedLength(usize),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::DigitOutOfRange(digit) => {
                write!(f, "Digit {digit} is outside [{DIGIT_MIN},{DIGIT_MAX}]")
            }
            Self::InvalidCharacter(ch) => write!(f, "'{ch}' is not a digit"),
            Self::UnsupportedLength(len) => {
                write!(f, "Code generation only supports length {CODE_LENGTH}, got {len}")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a new Code from a digit slice
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly 4
    /// - Any digit falls outside [1,6]
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(code.to_string(), "1234");
    ///
    /// assert!(Code::new(&[1, 2, 3]).is_err());
    /// assert!(Code::new(&[1, 2, 3, 7]).is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(digits: &[u8]) -> Result<Self, CodeError> {
        if digits.len() != CODE_LENGTH {
            return Err(CodeError::InvalidLength(digits.len()));
        }

        for &digit in digits {
            if !(DIGIT_MIN..=DIGIT_MAX).contains(&digit) {
                return Err(CodeError::DigitOutOfRange(digit));
            }
        }

        let digits: [u8; CODE_LENGTH] = digits.try_into().expect("length already validated");

        Ok(Self { digits })
    }

    /// Get the digit sequence
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.digits
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Get the count of each digit in the code
    ///
    /// Used for feedback scoring with duplicate digits.
    #[inline]
    pub(crate) fn digit_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &digit in &self.digits {
            *counts.entry(digit).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    /// Parse a code from a string of concatenated digits like "1234"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != CODE_LENGTH {
            return Err(CodeError::InvalidLength(chars.len()));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (i, ch) in chars.into_iter().enumerate() {
            let digit = ch
                .to_digit(10)
                .ok_or(CodeError::InvalidCharacter(ch))?;
            digits[i] = digit as u8;
        }

        Self::new(&digits)
    }
}
