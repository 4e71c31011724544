// src/consts.rs
//! Shared constants: cipher parameters and wire-format sizes

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// CBC initialization vector length in bytes (one AES block)
pub const IV_LEN: usize = 16;

/// AES block size in bytes
pub const BLOCK_LEN: usize = 16;

/// Decoded length of a combined key+IV record: `IV || Key`
pub const RECORD_LEN: usize = IV_LEN + KEY_LEN;

/// Hex length of a combined key+IV record
pub const RECORD_HEX_LEN: usize = RECORD_LEN * 2;

/// Plaintext bytes read per streaming cycle unless configured otherwise
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Largest accepted chunk size (64 MiB); keeps stream buffers bounded
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "AES256CBC_CONFIG";

/// Config file used when `AES256CBC_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "aes256cbc.toml";

/// Environment variable overriding `stream.chunk_size`
pub const CHUNK_SIZE_ENV: &str = "AES256CBC_CHUNK_SIZE";
