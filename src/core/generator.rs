//! Secret code generation
//!
//! Digits are drawn independently and uniformly from 1-6. The random source
//! is a parameter so tests can seed it; this is a casual game, so no
//! cryptographic guarantees are made.

use super::Code;
use super::rules::{CODE_LENGTH, MAX_DIGIT, MIN_DIGIT};
use rand::Rng;

/// Generate a random code from the given random source
///
/// # Examples
/// ```
/// use mastermind::core::generator::generate;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let code = generate(&mut rng);
/// assert!(code.digits().iter().all(|d| (1..=6).contains(d)));
/// ```
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Code {
    let mut digits = [0u8; CODE_LENGTH];
    for digit in &mut digits {
        *digit = rng.random_range(MIN_DIGIT..=MAX_DIGIT);
    }
    Code::from_digits_unchecked(digits)
}

/// Generate a secret from the thread-local random source
#[must_use]
pub fn generate_secret() -> Code {
    generate(&mut rand::rng())
}
