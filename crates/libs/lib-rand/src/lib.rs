//! # Random Library
//!
//! Random value generation on two deliberately separate sources: the fast
//! thread-local PRNG for non-secret sample data ([`sample`]), and OS
//! entropy for passwords ([`pwd`]). The secure path never falls back to
//! the PRNG.

pub mod pwd;
pub mod sample;

// Re-export commonly used functions
pub use pwd::generate_password;
pub use sample::{random_email, random_int, random_lowercase_string, random_money, random_owner};
