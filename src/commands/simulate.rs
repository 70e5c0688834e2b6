//! Headless batch simulation
//!
//! Plays many games with a candidate-filtering autoplayer and reports win
//! rate and deception statistics. The autoplayer only sees shown feedback,
//! so deceptive rounds can poison its candidate pool exactly as they mislead
//! a human player; an empty pool falls back to a random guess.

use crate::core::{Code, DIGIT_MAX, DIGIT_MIN, Feedback};
use crate::game::{GameSession, GameStatus, SessionConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a simulation run
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub win_rate: f64,
    pub average_rounds_to_win: Option<f64>,
    pub deception_distribution: HashMap<u8, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Outcome of a single autoplayed game
struct GameOutcome {
    won: bool,
    rounds: usize,
    deceptive_used: u8,
}

/// Enumerate the full 1296-code space
fn all_codes() -> Vec<Code> {
    let mut codes = Vec::with_capacity(1296);

    for a in DIGIT_MIN..=DIGIT_MAX {
        for b in DIGIT_MIN..=DIGIT_MAX {
            for c in DIGIT_MIN..=DIGIT_MAX {
                for d in DIGIT_MIN..=DIGIT_MAX {
                    codes.push(Code::new(&[a, b, c, d]).expect("digits are in range"));
                }
            }
        }
    }

    codes
}

/// Play one game with the candidate-filtering autoplayer
///
/// A candidate survives if, were it the secret, it would have produced every
/// shown feedback in the history. Deception can empty the pool; the player
/// then guesses at random.
fn play_one(seed: u64, probability: f64, pool: &[Code]) -> GameOutcome {
    let config = SessionConfig {
        deception_probability: probability,
        seed: Some(seed),
    };
    let mut session = GameSession::with_config(config);

    // Separate stream so player choices do not disturb session randomness
    let mut rng = SmallRng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);
    let mut history: Vec<(Code, Feedback)> = Vec::new();

    while !session.is_over() {
        let candidates: Vec<&Code> = pool
            .iter()
            .filter(|candidate| {
                history
                    .iter()
                    .all(|(guess, shown)| Feedback::score(candidate, guess) == *shown)
            })
            .collect();

        let guess = match candidates.choose(&mut rng) {
            Some(candidate) => (*candidate).clone(),
            // Deception poisoned the history
            None => pool.choose(&mut rng).expect("pool is non-empty").clone(),
        };

        let round = session.play_guess(guess.clone());
        let shown = round.shown_feedback();
        history.push((guess, shown));
    }

    let (won, rounds) = match session.status() {
        GameStatus::Won { rounds_played } => (true, rounds_played),
        _ => (false, session.rounds_played()),
    };

    GameOutcome {
        won,
        rounds,
        deceptive_used: session.deceptive_rounds_used(),
    }
}

/// Run a batch of autoplayed games in parallel
///
/// Each game derives its own seed from `seed`, so a fixed seed reproduces the
/// full batch regardless of thread scheduling.
///
/// # Panics
///
/// May panic if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_simulation(games: usize, seed: u64, probability: f64) -> SimulationResult {
    let pool = all_codes();

    let pb = ProgressBar::new(games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<GameOutcome> = (0..games)
        .into_par_iter()
        .map(|i| {
            let outcome = play_one(seed.wrapping_add(i as u64), probability, &pool);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let wins = outcomes.iter().filter(|outcome| outcome.won).count();

    let mut deception_distribution: HashMap<u8, usize> = HashMap::new();
    for outcome in &outcomes {
        *deception_distribution.entry(outcome.deceptive_used).or_insert(0) += 1;
    }

    let winning_rounds: Vec<usize> = outcomes
        .iter()
        .filter(|outcome| outcome.won)
        .map(|outcome| outcome.rounds)
        .collect();
    let average_rounds_to_win = if winning_rounds.is_empty() {
        None
    } else {
        Some(winning_rounds.iter().sum::<usize>() as f64 / winning_rounds.len() as f64)
    };

    let win_rate = if games == 0 {
        0.0
    } else {
        wins as f64 / games as f64
    };

    SimulationResult {
        games,
        wins,
        win_rate,
        average_rounds_to_win,
        deception_distribution,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64(),
    }
}
