//! Code representation
//!
//! A `Code` is an ordered sequence of [`CODE_LENGTH`] digits, each in
//! [`MIN_DIGIT`]..=[`MAX_DIGIT`]. Both the hidden secret and every accepted
//! guess are codes.

use super::rules::{CODE_LENGTH, MAX_DIGIT, MIN_DIGIT};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A 4-digit code over the digits 1-6
///
/// Stores digit values (not ASCII bytes), so comparisons and frequency
/// tables index directly by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for text that is not a valid code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Code must be exactly {len} digits, got {0} characters", len = CODE_LENGTH)]
    InvalidLength(usize),
    #[error("Code must contain only digits, found {0:?}")]
    NonDigit(char),
    #[error("Digit {0} is outside the range {min}-{max}", min = MIN_DIGIT, max = MAX_DIGIT)]
    DigitOutOfRange(u8),
}

impl Code {
    /// Parse a code from text such as `"1234"`
    ///
    /// Length is counted in characters, so multi-byte input is reported with
    /// its visible length rather than its byte length.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The text is not exactly 4 characters long
    /// - Any character is not an ASCII digit
    /// - Any digit is `0` or greater than `6`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::parse("1234").unwrap();
    /// assert_eq!(code.to_string(), "1234");
    ///
    /// assert!(Code::parse("12345").is_err());
    /// assert!(Code::parse("1237").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_digit() {
                return Err(CodeError::NonDigit(ch));
            }

            let value = ch as u8 - b'0';
            if !(MIN_DIGIT..=MAX_DIGIT).contains(&value) {
                return Err(CodeError::DigitOutOfRange(value));
            }
            *slot = value;
        }

        Ok(Self(digits))
    }

    /// Check whether `text` would parse as a code
    ///
    /// Pure predicate: never panics, whatever the input.
    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    /// Create a code from digit values
    ///
    /// # Errors
    /// Returns `CodeError::DigitOutOfRange` for the first digit outside 1-6.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        match digits
            .iter()
            .find(|d| !(MIN_DIGIT..=MAX_DIGIT).contains(*d))
        {
            Some(&bad) => Err(CodeError::DigitOutOfRange(bad)),
            None => Ok(Self(digits)),
        }
    }

    /// Create a code from digits already known to be in range
    ///
    /// # Panics
    /// Panics in debug mode if any digit is outside 1-6
    #[inline]
    pub(crate) fn from_digits_unchecked(digits: [u8; CODE_LENGTH]) -> Self {
        debug_assert!(
            digits.iter().all(|d| (MIN_DIGIT..=MAX_DIGIT).contains(d)),
            "Code digits must be in {MIN_DIGIT}..={MAX_DIGIT}"
        );
        Self(digits)
    }

    /// Get the digit values
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in &self.0 {
            write!(f, "{}", char::from(b'0' + digit))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_parse_valid() {
        let code = Code::parse("1234").unwrap();
        assert_eq!(code.digits(), &[1, 2, 3, 4]);

        let code = Code::parse("6516").unwrap();
        assert_eq!(code.digits(), &[6, 5, 1, 6]);
    }

    #[test]
    fn code_parse_invalid_length() {
        assert_eq!(Code::parse("12"), Err(CodeError::InvalidLength(2)));
        assert_eq!(Code::parse("12345"), Err(CodeError::InvalidLength(5)));
        assert_eq!(Code::parse(""), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn code_parse_length_counts_characters() {
        // Four characters, eight bytes
        assert_eq!(Code::parse("ééé1"), Err(CodeError::NonDigit('é')));
        assert_eq!(Code::parse("é12"), Err(CodeError::InvalidLength(3)));
    }

    #[test]
    fn code_parse_non_digits() {
        assert_eq!(Code::parse("abcd"), Err(CodeError::NonDigit('a')));
        assert_eq!(Code::parse("12 4"), Err(CodeError::NonDigit(' ')));
        assert_eq!(Code::parse("-123"), Err(CodeError::NonDigit('-')));
        // Non-ASCII digits are rejected too
        assert_eq!(Code::parse("١٢٣٤"), Err(CodeError::NonDigit('١')));
    }

    #[test]
    fn code_parse_out_of_range() {
        assert_eq!(Code::parse("0234"), Err(CodeError::DigitOutOfRange(0)));
        assert_eq!(Code::parse("1237"), Err(CodeError::DigitOutOfRange(7)));
        assert_eq!(Code::parse("7890"), Err(CodeError::DigitOutOfRange(7)));
        assert_eq!(Code::parse("1119"), Err(CodeError::DigitOutOfRange(9)));
    }

    #[test]
    fn code_is_valid_accepts_every_code_over_one_to_six() {
        let mut count = 0;
        for a in '1'..='6' {
            for b in '1'..='6' {
                for c in '1'..='6' {
                    for d in '1'..='6' {
                        let text: String = [a, b, c, d].iter().collect();
                        assert!(Code::is_valid(&text), "{text} should be valid");
                        count += 1;
                    }
                }
            }
        }
        assert_eq!(count, 1296);
    }

    #[test]
    fn code_is_valid_rejects_whitespace() {
        assert!(!Code::is_valid("1234\n"));
        assert!(!Code::is_valid(" 1234"));
        assert!(!Code::is_valid("    "));
    }

    #[test]
    fn code_from_digits() {
        assert_eq!(Code::from_digits([1, 1, 6, 6]), Ok(Code::parse("1166").unwrap()));
        assert_eq!(
            Code::from_digits([1, 0, 6, 6]),
            Err(CodeError::DigitOutOfRange(0))
        );
        assert_eq!(
            Code::from_digits([1, 2, 3, 7]),
            Err(CodeError::DigitOutOfRange(7))
        );
    }

    #[test]
    fn code_digit_at() {
        let code = Code::parse("3514").unwrap();
        assert_eq!(code.digit_at(0), 3);
        assert_eq!(code.digit_at(1), 5);
        assert_eq!(code.digit_at(2), 1);
        assert_eq!(code.digit_at(3), 4);
    }

    #[test]
    fn code_display_and_from_str() {
        let code: Code = "6152".parse().unwrap();
        assert_eq!(format!("{code}"), "6152");
        assert!("61520".parse::<Code>().is_err());
    }

    #[test]
    fn code_error_messages() {
        assert_eq!(
            CodeError::InvalidLength(2).to_string(),
            "Code must be exactly 4 digits, got 2 characters"
        );
        assert_eq!(
            CodeError::DigitOutOfRange(9).to_string(),
            "Digit 9 is outside the range 1-6"
        );
    }
}
