//! Guess scoring
//!
//! A score counts exact matches (right digit, right position) and partial
//! matches (right digit, wrong position). It renders as one `+` per exact
//! match followed by one `-` per partial match. The rendering says nothing
//! about which positions produced which marker.

use super::Code;
use super::rules::{CODE_LENGTH, EXACT_MARKER, MAX_DIGIT, PARTIAL_MARKER};
use std::fmt;

/// Feedback for one guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    exact: u8,
    partial: u8,
}

impl Score {
    /// Every position correct
    pub const WIN: Self = Self {
        exact: CODE_LENGTH as u8,
        partial: 0,
    };

    /// Create a score from raw counts
    ///
    /// # Panics
    /// Panics if the counts add up to more than 4
    #[cfg(test)]
    pub(crate) const fn new(exact: u8, partial: u8) -> Self {
        assert!(
            exact as usize + partial as usize <= CODE_LENGTH,
            "Score cannot exceed the code length"
        );
        Self { exact, partial }
    }

    /// Score `guess` against `secret`
    ///
    /// Peg counting with duplicate handling:
    /// 1. Positions where the digits agree count as exact matches
    /// 2. Every other position adds its secret digit and its guess digit to
    ///    two frequency tables indexed by digit value
    /// 3. Each digit value contributes the smaller of its two frequencies to
    ///    the partial count, so one secret peg answers at most one guess peg
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// let secret = Code::parse("1234").unwrap();
    /// let guess = Code::parse("1243").unwrap();
    /// let score = Score::calculate(&guess, &secret);
    ///
    /// assert_eq!(score.exact(), 2);
    /// assert_eq!(score.partial(), 2);
    /// assert_eq!(score.to_string(), "++--");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let mut exact = 0u8;
        let mut secret_counts = [0u8; MAX_DIGIT as usize + 1];
        let mut guess_counts = [0u8; MAX_DIGIT as usize + 1];

        for (&g, &s) in guess.digits().iter().zip(secret.digits()) {
            if g == s {
                exact += 1;
            } else {
                secret_counts[usize::from(s)] += 1;
                guess_counts[usize::from(g)] += 1;
            }
        }

        // Index 0 stays empty: digit 0 never appears in a valid code
        let partial = secret_counts
            .iter()
            .zip(&guess_counts)
            .map(|(&s, &g)| s.min(g))
            .sum();

        Self { exact, partial }
    }

    /// Number of right digits in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of right digits in the wrong position
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Check if every position matched
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.exact {
            write!(f, "{EXACT_MARKER}")?;
        }
        for _ in 0..self.partial {
            write!(f, "{PARTIAL_MARKER}")?;
        }
        Ok(())
    }
}
