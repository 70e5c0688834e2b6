//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with clear mathematical
//! properties: codes, secret generation, and guess scoring.

mod code;
mod feedback;
mod secret;

pub use code::{CODE_LENGTH, Code, CodeError, DIGIT_MAX, DIGIT_MIN};
pub use feedback::Feedback;
pub use secret::SecretCode;
