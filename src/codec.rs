// src/codec.rs
//! Hex and base64 helpers used wherever binary data crosses a text boundary
//!
//! Thin wrappers so every decode failure surfaces as a [`CoreError`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;

/// Lowercase hex encoding
#[inline]
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode hex (either case); fails on odd length or non-hex characters
#[inline]
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

/// Standard-alphabet, padded base64
#[inline]
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[inline]
pub fn from_base64(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}
