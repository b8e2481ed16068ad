//! Formatting utilities for terminal output

use crate::core::rules::MAX_ATTEMPTS;

/// Create a bar showing how much of a budget was spent
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        width
    } else {
        (value as usize * width / max as usize).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar of attempts used out of the full budget
#[must_use]
pub fn attempts_bar(attempts: u32, width: usize) -> String {
    create_progress_bar(attempts, MAX_ATTEMPTS, width)
}

/// "1 guess" / "n guesses"
#[must_use]
pub fn guesses_phrase(count: u32) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}

/// Headline and remark for a win on the given attempt
#[must_use]
pub const fn rating(attempts: u32) -> (&'static str, &'static str) {
    match attempts {
        1 => ("🏆 Perfect!", "Cracked it blind!"),
        2..=3 => ("⭐ Excellent!", "Outstanding deduction!"),
        4..=5 => ("💫 Great!", "Very well played!"),
        6..=7 => ("✨ Good!", "Nice work!"),
        _ => ("👍 Solved!", "Just in time!"),
    }
}
