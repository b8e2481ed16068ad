//! Terminal output formatting
//!
//! Banners and end-of-game summaries for the binary. The game itself only
//! writes plain lines through its console.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_input_closed, print_outcome};
