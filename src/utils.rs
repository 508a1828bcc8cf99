//! Utility functions for admin session tokens

use crate::constants::env_vars;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::fmt::Subscriber;

/// Compare two byte strings in constant time.
///
/// Returns `false` straight away on a length mismatch; equal-length inputs
/// are always scanned in full.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    ct_codecs::verify(a, b)
}

/// Get current timestamp in seconds since Unix epoch
pub fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}

/// Install a global fmt subscriber, level taken from `LOG_LEVEL` (default INFO)
pub fn init_tracing() {
    let log_level = std::env::var(env_vars::LOG_LEVEL)
        .ok()
        .and_then(|l| Level::from_str(&l).ok())
        .unwrap_or(Level::INFO);

    let subscriber = Subscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set subscriber");
}
