//! Mastermind - CLI
//!
//! Console Mastermind with deceptive feedback rounds and a one-shot truth
//! scan. `play` runs the interactive game; `simulate` autoplays batches.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{run_play, run_simulation},
    game::{DECEPTION_PROBABILITY, SessionConfig},
    output::print_simulation_result,
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code breaker with deceptive feedback and a one-shot truth scan",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// Chance that a round gives altered feedback (while quota remains)
        #[arg(short, long, default_value_t = DECEPTION_PROBABILITY)]
        probability: f64,

        /// Seed the session RNG for a reproducible game
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Autoplay many games headlessly and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,

        /// Base seed; each game derives its own
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Chance that a round gives altered feedback (while quota remains)
        #[arg(short, long, default_value_t = DECEPTION_PROBABILITY)]
        probability: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        probability: DECEPTION_PROBABILITY,
        seed: None,
    });

    match command {
        Commands::Play { probability, seed } => run_play(SessionConfig {
            deception_probability: probability,
            seed,
        }),
        Commands::Simulate {
            games,
            seed,
            probability,
        } => {
            println!("Simulating {games} games (probability {probability}, seed {seed})...");
            let result = run_simulation(games, seed, probability);
            print_simulation_result(&result);
            Ok(())
        }
    }
}
