// src/key_ops.rs
//! Key and IV generation plus the combined key+IV record
//!
//! The record is `hex(IV) || hex(Key)`: 32 hex chars of IV followed by
//! 64 hex chars of key, 96 characters in total. Order is part of the
//! wire format.

use std::fmt;

use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::Zeroizing;

use crate::aliases::{Aes256Key, Iv};
use crate::codec;
use crate::consts::{IV_LEN, KEY_LEN, RECORD_HEX_LEN, RECORD_LEN};
use crate::error::{CoreError, Result};

/// Fill `buf` from the operating system CSPRNG
///
/// There is no fallback: if the OS source fails, so does the caller.
fn fill_secure(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| CoreError::RandomSource(e.to_string()))
}

/// Generate a new random 256-bit key
pub fn generate_key() -> Result<Aes256Key> {
    let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
    fill_secure(&mut *bytes)?;
    Ok(Aes256Key::new(*bytes))
}

/// Generate a new random 128-bit IV
pub fn generate_iv() -> Result<Iv> {
    let mut iv = [0u8; IV_LEN];
    fill_secure(&mut iv)?;
    Ok(iv)
}

/// Serialize key+IV as the 96-character hex record (`IV` first)
pub fn combine(key: &Aes256Key, iv: &Iv) -> String {
    let mut record = String::with_capacity(RECORD_HEX_LEN);
    record.push_str(&codec::to_hex(iv));
    record.push_str(&codec::to_hex(key.expose_secret()));
    record
}

/// Parse a record produced by [`combine`]
pub fn split(record: &str) -> Result<(Aes256Key, Iv)> {
    let bytes = Zeroizing::new(codec::from_hex(record)?);
    if bytes.len() != RECORD_LEN {
        return Err(CoreError::MalformedRecord {
            expected: RECORD_LEN,
            actual: bytes.len(),
        });
    }

    let (iv_bytes, key_bytes) = bytes.split_at(IV_LEN);
    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(iv_bytes);
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    key.copy_from_slice(key_bytes);

    Ok((Aes256Key::new(*key), iv))
}

/// Lowercase hex form of a key, as accepted by the string cipher
pub fn key_to_hex(key: &Aes256Key) -> String {
    codec::to_hex(key.expose_secret())
}

/// Parse a hex key; anything but 32 decoded bytes cannot initialize AES-256
pub fn key_from_hex(key_hex: &str) -> Result<Aes256Key> {
    let bytes = Zeroizing::new(codec::from_hex(key_hex)?);
    if bytes.len() != KEY_LEN {
        return Err(CoreError::CipherInit("AES-256 requires a 32-byte key"));
    }
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    key.copy_from_slice(&bytes);
    Ok(Aes256Key::new(*key))
}

/// Owned key+IV pair, the typed form of the combined record
///
/// Used to carry the IV for file encryption alongside its key.
pub struct KeyMaterial {
    pub key: Aes256Key,
    pub iv: Iv,
}

impl KeyMaterial {
    pub fn generate() -> Result<Self> {
        Ok(Self {
            key: generate_key()?,
            iv: generate_iv()?,
        })
    }

    #[inline]
    pub fn to_record(&self) -> String {
        combine(&self.key, &self.iv)
    }

    pub fn from_record(record: &str) -> Result<Self> {
        let (key, iv) = split(record)?;
        Ok(Self { key, iv })
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key", &"[REDACTED]")
            .field("iv", &codec::to_hex(&self.iv))
            .finish()
    }
}
