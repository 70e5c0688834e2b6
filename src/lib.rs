//! Mastermind
//!
//! Console Mastermind with deceptive feedback rounds and a one-shot truth
//! scan: the game may alter up to three rounds' feedback per session, and
//! once per game the player can reveal the true score of a past round.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Feedback};
//!
//! let secret = Code::new(&[1, 2, 3, 4]).unwrap();
//! let guess = Code::new(&[1, 3, 5, 6]).unwrap();
//!
//! let feedback = Feedback::score(&secret, &guess);
//! assert_eq!(feedback.exact(), 1);
//! assert_eq!(feedback.misplaced(), 1);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
