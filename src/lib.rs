//! Mastermind
//!
//! A terminal code-breaking game: crack a hidden 4-digit code (digits 1-6)
//! in at most 10 guesses, guided by `+` (right digit, right place) and `-`
//! (right digit, wrong place) hints.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::console::ScriptedConsole;
//! use mastermind::core::{Code, Score};
//! use mastermind::game::{Game, Outcome};
//!
//! // Score a guess directly
//! let secret = Code::parse("1234").unwrap();
//! let guess = Code::parse("4321").unwrap();
//! assert_eq!(Score::calculate(&guess, &secret).to_string(), "----");
//!
//! // Or play a scripted game
//! let mut game = Game::new(ScriptedConsole::new(["4321", "1234"]), secret);
//! assert_eq!(game.play().unwrap(), Outcome::Won { attempts: 2 });
//! ```

// Core domain types
pub mod core;

// Game engine and play loop
pub mod game;

// Input/output port
pub mod console;

// Terminal output formatting
pub mod output;
