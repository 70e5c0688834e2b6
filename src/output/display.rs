//! Display functions for game and simulation results

use super::formatters::{distribution_bar, feedback_line};
use crate::commands::SimulationResult;
use crate::game::{GameSession, GameStatus, MAX_DECEPTIVE_ROUNDS, Round, ScanReport};
use colored::Colorize;

/// Print the feedback for a freshly played round
pub fn print_round_feedback(round: &Round) {
    let line = feedback_line(round);
    if round.is_deceptive() {
        println!("\nFeedback: {}", line.yellow());
    } else {
        println!("\nFeedback: {line}");
    }
}

/// Print the corrected view a truth scan produced
pub fn print_scan_report(report: &ScanReport) {
    println!(
        "Round {} guess {}: true feedback is {}",
        report.round_number,
        report.guess.to_string().bright_white().bold(),
        report.true_feedback.to_string().bright_cyan()
    );

    if report.was_deceptive {
        println!("{}", "That round's feedback was deceptive!".yellow().bold());
    } else {
        println!("That round's feedback was honest.");
    }
}

/// Print the end-of-game report
///
/// Wins report rounds played; losses reveal the secret. Both report the
/// session's deceptive-round count.
pub fn print_game_result(session: &GameSession) {
    println!("\n{}", "=========== GAME OVER ============".cyan());

    match session.status() {
        GameStatus::Won { rounds_played } => {
            println!(
                "{}",
                format!("Congratulations! You won in {rounds_played} rounds!")
                    .green()
                    .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{}",
                format!("Game Over! The secret code was: {}", session.secret())
                    .red()
                    .bold()
            );
        }
        GameStatus::InProgress => {
            println!("Game ended without any guesses.");
        }
    }

    println!("Deceptive rounds used: {}", session.deceptive_rounds_used());
    println!("{}", "==================================".cyan());
}

/// Print the result of a batch simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Games won:        {}",
        result.wins.to_string().green()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    if let Some(average) = result.average_rounds_to_win {
        println!("   Avg rounds/win:   {average:.2}");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n🎭 {}", "Deceptive rounds per game:".bright_cyan().bold());
    for used in 0..=MAX_DECEPTIVE_ROUNDS {
        if let Some(&count) = result.deception_distribution.get(&used) {
            let pct = (count as f64 / result.games as f64) * 100.0;
            let bar = distribution_bar(count, result.games, 40);
            println!("   {used}: {} {count:6} ({pct:5.1}%)", bar.green());
        }
    }
}
