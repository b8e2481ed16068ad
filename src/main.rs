//! Mastermind - CLI
//!
//! Generates a secret code and plays one game on the terminal.

use anyhow::Result;
use clap::Parser;
use mastermind::{
    console::TerminalConsole,
    core::generator::generate_secret,
    game::{Game, GameError},
    output::{print_banner, print_input_closed, print_outcome},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack a 4-digit code (digits 1-6) in 10 guesses",
    long_about = "Crack a 4-digit code (digits 1-6) in 10 guesses.\n\n\
        After each guess you get one '+' for every right digit in the right place \
        and one '-' for every right digit in the wrong place.\n\n\
        Set RUST_LOG=debug to trace the game on stderr.",
    version,
    author
)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    // Logs go to stderr so they never interleave with the game on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let secret = generate_secret();
    let mut game = Game::new(TerminalConsole::stdio(), secret);

    print_banner();
    match game.play() {
        Ok(outcome) => print_outcome(&outcome),
        Err(GameError::InputClosed) => {
            info!("stdin closed, exiting");
            print_input_closed(game.secret());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
