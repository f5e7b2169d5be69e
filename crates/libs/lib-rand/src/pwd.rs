//! # Password Generation
//!
//! Passwords are drawn from OS entropy via `getrandom`. An entropy failure
//! surfaces as [`Error::RandomSource`] and is never retried or replaced
//! with a PRNG fallback.

use thiserror::Error;

/// 94-character password alphabet: lowercase, uppercase, digits, and the
/// 32 printable ASCII symbols.
const CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Inclusive password length bounds.
const MIN_LEN: usize = 10;
const MAX_LEN: usize = 16;

#[derive(Debug, Error)]
pub enum Error {
    #[error("secure random source unavailable: {0}")]
    RandomSource(#[from] getrandom::Error),
}

/// Generate a password of random length in `[10, 16]`, each character
/// drawn independently and uniformly from [`CHARSET`] using OS entropy.
pub fn generate_password() -> Result<String, Error> {
    let length = MIN_LEN + secure_index(MAX_LEN - MIN_LEN + 1)?;

    let mut password = String::with_capacity(length);
    for _ in 0..length {
        password.push(CHARSET[secure_index(CHARSET.len())?] as char);
    }

    Ok(password)
}

/// Uniform index in `[0, bound)` from OS entropy.
///
/// Rejection-samples single bytes to avoid modulo bias; `bound` must be
/// in `1..=256`.
fn secure_index(bound: usize) -> Result<usize, Error> {
    debug_assert!((1..=256).contains(&bound));
    // Largest multiple of `bound` that fits in a byte's value range.
    let zone = 256 - (256 % bound);
    loop {
        let mut byte = [0u8; 1];
        getrandom::getrandom(&mut byte)?;
        let value = byte[0] as usize;
        if value < zone {
            return Ok(value % bound);
        }
    }
}
