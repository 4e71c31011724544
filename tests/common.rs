// tests/common.rs
//! Helpers shared by the cipher test files

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Route the crate's `debug!` output (payload and stream sizes) into the
/// test harness; set `RUST_LOG=aes256_cbc_vault=debug` to see it
#[allow(dead_code)]
pub fn setup() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init();
}

/// Deterministic test data with no short repeating period
#[allow(dead_code)]
pub fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}
