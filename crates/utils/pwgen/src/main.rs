//! # Password Generator Utility
//!
//! This binary prints one or more generated passwords, one per line.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package pwgen -- --count 5
//! ```
//!
//! Passwords are 10 to 16 characters from the 94-character printable
//! ASCII alphabet, drawn from OS entropy. If the entropy source is
//! unavailable the program exits with an error instead of falling back
//! to a weaker generator.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Generate random passwords from OS entropy.
#[derive(Parser)]
#[command(name = "pwgen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    debug!(count = args.count, "generating passwords");

    for _ in 0..args.count {
        println!("{}", lib_rand::generate_password()?);
    }

    Ok(())
}
