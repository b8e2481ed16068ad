//! Game engine
//!
//! Owns the secret, validates and scores guesses, and runs the attempt loop
//! over an injected [`Console`](crate::console::Console).

mod engine;
pub mod messages;

pub use engine::{Game, GameError, GameState, Outcome, Turn, is_valid_guess};
