//! Formatting utilities for terminal output

use crate::game::Round;

/// Marker appended to feedback the game may have altered
pub const DECEPTION_MARKER: char = '?';

/// Format a round's shown feedback, marking deceptive rounds
///
/// Honest rounds render the feedback as-is; deceptive rounds get a trailing
/// marker so the player knows the values might be untrustworthy.
#[must_use]
pub fn feedback_line(round: &Round) -> String {
    if round.is_deceptive() {
        format!("{} {DECEPTION_MARKER}", round.shown_feedback())
    } else {
        round.shown_feedback().to_string()
    }
}

/// Create a progress bar string
#[must_use]
pub fn distribution_bar(count: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        ((count as f64 / total as f64) * width as f64) as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
