//! Text the game writes to the player

use crate::core::rules::{CODE_LENGTH, MAX_DIGIT, MIN_DIGIT};
use crate::core::{Code, Score};

/// Written once when the player cracks the code
pub const WIN: &str = "Congratulations! You've guessed the code correctly!";

/// Prefix of the message written when attempts run out
pub const GAME_OVER: &str = "Game over!";

/// Rules announcement
#[must_use]
pub fn welcome() -> String {
    format!(
        "Welcome to Mastermind! Guess the {CODE_LENGTH}-digit code (digits {MIN_DIGIT}-{MAX_DIGIT})."
    )
}

/// Starting attempt budget
#[must_use]
pub fn attempts_available(remaining: u32) -> String {
    format!("You have {remaining} attempts.")
}

/// Prompt for one guess, written without a newline
#[must_use]
pub fn prompt(attempt: u32) -> String {
    format!("Attempt {attempt}: ")
}

/// Response to a malformed or absent guess
#[must_use]
pub fn invalid_input() -> String {
    format!("Invalid input. Please enter {CODE_LENGTH} digits between {MIN_DIGIT} and {MAX_DIGIT}.")
}

/// Rendered score for an accepted guess
#[must_use]
pub fn result(score: Score) -> String {
    format!("Result: {score}")
}

/// Loss message revealing the secret
#[must_use]
pub fn game_over(secret: &Code) -> String {
    format!("{GAME_OVER} You've run out of attempts. The secret code was: {secret}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_mention_the_rules() {
        assert_eq!(
            welcome(),
            "Welcome to Mastermind! Guess the 4-digit code (digits 1-6)."
        );
        assert_eq!(
            invalid_input(),
            "Invalid input. Please enter 4 digits between 1 and 6."
        );
    }

    #[test]
    fn game_over_reveals_secret() {
        let secret = Code::parse("6543").unwrap();
        assert_eq!(
            game_over(&secret),
            "Game over! You've run out of attempts. The secret code was: 6543"
        );
    }

    #[test]
    fn result_renders_score() {
        assert_eq!(result(Score::new(1, 2)), "Result: +--");
        assert_eq!(result(Score::default()), "Result: ");
    }
}
