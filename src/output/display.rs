//! Display functions for the game binary

use super::formatters::{attempts_bar, guesses_phrase, rating};
use crate::core::Code;
use crate::game::Outcome;
use colored::Colorize;

/// Print the title banner shown before the game starts
pub fn print_banner() {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "                    M A S T E R M I N D".bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "  {} right digit, right place   {} right digit, wrong place\n",
        "+".green().bold(),
        "-".yellow().bold()
    );
}

/// Print the end-of-game summary
pub fn print_outcome(outcome: &Outcome) {
    println!("\n{}", "─".repeat(60).cyan());
    match outcome {
        Outcome::Won { attempts } => {
            let (headline, remark) = rating(*attempts);
            println!("  {}", headline.bright_yellow().bold());
            println!("  {}", remark.bright_white());
            println!(
                "\n  Code cracked in {}  [{}]",
                guesses_phrase(*attempts).bright_cyan().bold(),
                attempts_bar(*attempts, 20).green()
            );
        }
        Outcome::Exhausted { secret } => {
            println!(
                "  {} The code was {}",
                "❌ Out of attempts.".red().bold(),
                secret.to_string().bright_white().bold()
            );
        }
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the notice shown when input closes before the game ends
pub fn print_input_closed(secret: &Code) {
    println!(
        "\n{} The code was {}",
        "Input closed, game abandoned.".yellow(),
        secret.to_string().bright_white().bold()
    );
}
