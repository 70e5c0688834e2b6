//! Game session state machine
//!
//! Round lifecycle, deception policy, truth scanning, and the session that
//! ties them together.

mod action;
mod deception;
mod round;
mod scanner;
mod session;

pub use action::{ActionError, PlayerAction, parse_action};
pub use deception::{DECEPTION_PROBABILITY, DeceptionPolicy, MAX_DECEPTIVE_ROUNDS};
pub use round::Round;
pub use scanner::{ScanError, ScanReport, TruthScanner};
pub use session::{GameSession, GameStatus, MAX_ROUNDS, SessionConfig};
