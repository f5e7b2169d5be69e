//! # Sample Data Generators
//!
//! Random values for test fixtures and demo data, backed by the
//! thread-local PRNG. Not suitable for secrets; password generation lives
//! in [`crate::pwd`] on top of OS entropy.

use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Random integer uniformly distributed in the half-open range `[min, max)`.
///
/// # Panics
///
/// Panics if `min >= max`.
pub fn random_int(min: i64, max: i64) -> i64 {
    rand::rng().random_range(min..max)
}

/// Random string of exactly `n` lowercase ASCII letters.
pub fn random_lowercase_string(n: usize) -> String {
    let mut rng = rand::rng();
    (0..n)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Random account owner name (10 lowercase letters).
pub fn random_owner() -> String {
    random_lowercase_string(10)
}

/// Random money amount in `[0, 1000)`.
pub fn random_money() -> i64 {
    random_int(0, 1000)
}

/// Random email address of the form `<6 lowercase letters>@example.com`.
pub fn random_email() -> String {
    format!("{}@example.com", random_lowercase_string(6))
}
