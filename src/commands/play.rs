//! Interactive console game
//!
//! Line-based game loop: introduction, rounds, truth scans, end-of-game
//! report, and replay. Parse failures and unavailable scans are surfaced as
//! messages and never escape the loop. End of input (stdin EOF) exits the
//! loop cleanly instead of re-prompting.

use crate::game::{
    GameSession, MAX_ROUNDS, PlayerAction, SessionConfig, parse_action,
};
use crate::output::{print_game_result, print_round_feedback, print_scan_report};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

const SEPARATOR_LINE: &str = "----------------------------------------";
const NEW_GAME_SEPARATOR: &str = "+++++++++++ NEW GAME +++++++++++";

const RULES: &str = "\
=== MASTERMIND GAME RULES ===
1. The computer will generate a secret code of 4 digits (1-6).
2. You have 12 attempts to guess the code correctly.
3. After each guess, you'll receive feedback:
   - Number of digits in the correct position
   - Number of correct digits in the wrong position

SPECIAL MECHANICS:
* Deceptive Rounds: Up to 3 rounds may give slightly altered feedback
  (marked with a '?')
* Truth Scan: Once per game, you can reveal the true feedback of a
  previous round. Use this wisely!

EXAMPLE:
Secret Code: 1234
Your Guess: 1356
Feedback: Correct positions: 1, Misplaced: 1
(1 is correct position, 3 is right digit wrong position)";

/// Run the interactive game until the player declines to continue
///
/// # Errors
/// Returns an error only for I/O failures on stdin/stdout; gameplay errors
/// are recovered in the loop.
pub fn run_play(config: SessionConfig) -> Result<()> {
    let stdin = io::stdin();
    run_with_input(stdin.lock(), config)
}

/// Game loop over any line-based input source
fn run_with_input<R: BufRead>(mut input: R, config: SessionConfig) -> Result<()> {
    if !handle_introduction(&mut input)? {
        return Ok(());
    }

    let mut session = GameSession::with_config(config);

    loop {
        println!("\n{}", NEW_GAME_SEPARATOR.bright_cyan());

        if !play_game_loop(&mut session, &mut input)? {
            // Input ended mid-game
            break;
        }
        print_game_result(&session);

        if !ask_yes_no(&mut input, "\nPlay again? (yes/no)")? {
            break;
        }
        session.reset();
    }

    println!("\n{SEPARATOR_LINE}");
    println!("Thanks for playing!");
    println!("{SEPARATOR_LINE}\n");

    Ok(())
}

/// Welcome banner, optional rules, and the readiness check
///
/// Returns `false` when the player declines to start.
fn handle_introduction<R: BufRead>(input: &mut R) -> Result<bool> {
    println!("\n{SEPARATOR_LINE}");
    println!("{}", "Welcome to Mastermind!".bright_cyan().bold());
    println!("{SEPARATOR_LINE}");

    if !ask_yes_no(input, "Have you played this version before? (yes/no)")? {
        println!("\n{RULES}");

        if !ask_yes_no(input, "\nAre you ready to start? (yes/no)")? {
            println!("\nMaybe next time! Goodbye.\n");
            return Ok(false);
        }
    }

    println!("\n{SEPARATOR_LINE}");
    println!("Try to guess the 4-digit code.");
    println!("You have {MAX_ROUNDS} attempts.");
    println!("{SEPARATOR_LINE}");

    Ok(true)
}

/// Play rounds until the session reports game over
///
/// Returns `false` when the input source ends before the game does.
fn play_game_loop<R: BufRead>(session: &mut GameSession, input: &mut R) -> Result<bool> {
    while !session.is_over() {
        let round_number = session.rounds_played() + 1;
        println!("\n--- Round {round_number} of {MAX_ROUNDS} ---");

        let Some(line) = get_user_input(input, "Enter your guess (4 digits, 1-6) or 'scan'")?
        else {
            println!("\nInput ended. Exiting game.");
            return Ok(false);
        };

        match parse_action(&line) {
            Ok(PlayerAction::Guess(guess)) => {
                let round = session.play_guess(guess);
                print_round_feedback(round);
            }
            Ok(PlayerAction::ScanRequest) => {
                println!("\n--- Truth Scan Requested ---");
                match session.request_scan() {
                    Ok(report) => {
                        print_scan_report(&report);
                        println!("--- Truth Scan Complete ---");
                    }
                    Err(err) => {
                        println!("{}", err.to_string().red());
                        println!("--- Truth Scan Failed ---");
                    }
                }
                println!("(Continuing round after Truth Scan...)");
            }
            Err(err) => {
                println!("{}", err.to_string().red());
            }
        }
    }

    Ok(true)
}

/// Ask a yes/no question; end of input or anything but a yes counts as no
fn ask_yes_no<R: BufRead>(input: &mut R, prompt: &str) -> Result<bool> {
    Ok(match get_user_input(input, prompt)? {
        Some(answer) => matches!(answer.to_lowercase().as_str(), "yes" | "y"),
        None => false,
    })
}

/// Get one line of user input with a prompt
///
/// Returns `None` when the input source is exhausted (a zero-byte read).
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .context("failed to read input")?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, SecretCode};
    use crate::game::GameStatus;
    use std::io::Cursor;

    fn honest_session(digits: [u8; 4]) -> GameSession {
        let config = SessionConfig {
            deception_probability: 0.0,
            seed: Some(42),
        };
        let secret = SecretCode::from_code(Code::new(&digits).unwrap());
        GameSession::with_secret(secret, config)
    }

    #[test]
    fn game_loop_finishes_on_winning_guess() {
        let mut session = honest_session([1, 2, 3, 4]);
        let mut input = Cursor::new("5555\n1234\n");

        let completed = play_game_loop(&mut session, &mut input).unwrap();

        assert!(completed);
        assert_eq!(session.status(), GameStatus::Won { rounds_played: 2 });
    }

    #[test]
    fn game_loop_exits_when_input_ends_mid_game() {
        let mut session = honest_session([1, 2, 3, 4]);
        let mut input = Cursor::new("1111\n");

        let completed = play_game_loop(&mut session, &mut input).unwrap();

        // Input ran out after one round; the loop must stop, not re-prompt
        assert!(!completed);
        assert_eq!(session.rounds_played(), 1);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn blank_lines_are_rejected_but_do_not_spin() {
        let mut session = honest_session([1, 2, 3, 4]);

        // A blank line is a one-byte read (recoverable bad input); only the
        // zero-byte read that follows ends the loop
        let mut input = Cursor::new("\n\n");

        let completed = play_game_loop(&mut session, &mut input).unwrap();

        assert!(!completed);
        assert_eq!(session.rounds_played(), 0);
    }

    #[test]
    fn game_loop_recovers_from_bad_input_then_wins() {
        let mut session = honest_session([1, 2, 3, 4]);
        let mut input = Cursor::new("help\n127\n1234\n");

        let completed = play_game_loop(&mut session, &mut input).unwrap();

        assert!(completed);
        assert_eq!(session.status(), GameStatus::Won { rounds_played: 1 });
    }

    #[test]
    fn scan_requests_do_not_consume_guesses() {
        let mut session = honest_session([1, 2, 3, 4]);
        let mut input = Cursor::new("5555\nscan\nscan\n1234\n");

        let completed = play_game_loop(&mut session, &mut input).unwrap();

        assert!(completed);
        assert_eq!(session.status(), GameStatus::Won { rounds_played: 2 });
    }

    #[test]
    fn run_terminates_on_empty_input() {
        let config = SessionConfig {
            deception_probability: 0.0,
            seed: Some(42),
        };

        // EOF at the first prompt declines the rules and exits cleanly
        run_with_input(Cursor::new(""), config).unwrap();
    }

    #[test]
    fn run_terminates_when_input_ends_during_play() {
        let config = SessionConfig {
            deception_probability: 0.0,
            seed: Some(7),
        };

        // Intro accepted, one guess played, then the input ends
        run_with_input(Cursor::new("yes\n1111\n"), config).unwrap();
    }

    #[test]
    fn eof_at_a_yes_no_prompt_counts_as_no() {
        let mut input = Cursor::new("no\nyes\n");
        assert!(handle_introduction(&mut input).unwrap());

        // The cursor is exhausted now; the replay prompt must decline
        assert!(!ask_yes_no(&mut input, "Play again? (yes/no)").unwrap());
    }
}
