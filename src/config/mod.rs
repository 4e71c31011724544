// src/config/mod.rs
//! Stream tuning for aes256-cbc-vault
//!
//! Only the chunk size is configurable. It comes from an optional TOML file
//! and may be overridden by `AES256CBC_CHUNK_SIZE`.

pub use app::{load, Config, StreamConfig};

mod app;
mod defaults;
