//! Core domain types for Mastermind
//!
//! Pure value types and the fixed rules. Nothing here performs I/O.

mod code;
pub mod generator;
pub mod rules;
mod score;

pub use code::{Code, CodeError};
pub use score::Score;
