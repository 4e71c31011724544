// src/crypto/mod.rs
//! AES-256-CBC operations
//!
//! - `encrypt` / `decrypt`: in-memory payloads as one base64 token, fresh IV per call
//! - `stream`: chunked file/stream cipher with a caller-supplied IV
//!
//! Note: CBC gives confidentiality only. Ciphertext is malleable and nothing
//! here detects tampering; add a MAC or use an AEAD mode if integrity matters.
mod decrypt;
mod encrypt;
mod stream;

pub use decrypt::{decrypt, decrypt_to_string};
pub use encrypt::{encrypt, encrypt_str};
pub use stream::{decrypt_stream, decrypt_stream_with, encrypt_stream, encrypt_stream_with};

use cbc::cipher::KeyIvInit;

use crate::error::{CoreError, Result};

pub(crate) type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
pub(crate) type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const INIT_ERROR: &str = "AES-256-CBC requires a 32-byte key and a 16-byte IV";

pub(crate) fn encryptor(key: &[u8], iv: &[u8]) -> Result<Aes256CbcEnc> {
    Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| CoreError::CipherInit(INIT_ERROR))
}

pub(crate) fn decryptor(key: &[u8], iv: &[u8]) -> Result<Aes256CbcDec> {
    Aes256CbcDec::new_from_slices(key, iv).map_err(|_| CoreError::CipherInit(INIT_ERROR))
}
