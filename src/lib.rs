// src/lib.rs
//! aes256-cbc-vault: AES-256-CBC for strings and files
//!
//! Features:
//! - Secure key/IV generation from the OS CSPRNG
//! - 96-char hex record for moving a key+IV pair around
//! - Base64 string tokens (`IV || ciphertext`) with a fresh IV per call
//! - Bounded-memory streaming file encryption
//!
//! CBC is unauthenticated: ciphertext can be altered without detection.

pub mod aliases;
pub mod codec;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod file_ops;
pub mod key_ops;

// Re-export everything users need at the crate root
pub use aliases::{Aes256Key, Iv};
pub use config::load as load_config;
pub use crypto::{decrypt, decrypt_stream, encrypt, encrypt_stream};
pub use error::{CoreError, ErrorCategory, Result as CoreResult};
pub use file_ops::{decrypt_file, encrypt_file};
pub use key_ops::{combine, generate_iv, generate_key, split, KeyMaterial};
