//! Fixed rules of the game
//!
//! Code length, digit alphabet and attempt budget are constants; there are no
//! difficulty levels.

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// Smallest digit allowed in a code
pub const MIN_DIGIT: u8 = 1;

/// Largest digit allowed in a code
pub const MAX_DIGIT: u8 = 6;

/// Valid guesses a player gets before the game is lost
pub const MAX_ATTEMPTS: u32 = 10;

/// Marker for a right digit in the right position
pub const EXACT_MARKER: char = '+';

/// Marker for a right digit in the wrong position
pub const PARTIAL_MARKER: char = '-';
