// src/crypto/encrypt.rs
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::BlockEncryptMut;
use tracing::debug;

use super::encryptor;
use crate::codec;
use crate::consts::{BLOCK_LEN, IV_LEN};
use crate::error::{CoreError, Result};
use crate::key_ops::{generate_iv, key_from_hex};

/// Encrypt plaintext → base64(`IV || ciphertext`)
///
/// A fresh IV is drawn for every call, so encrypting the same plaintext
/// twice under the same key gives different tokens.
pub fn encrypt(plaintext: &[u8], key_hex: &str) -> Result<String> {
    let key = key_from_hex(key_hex)?;
    let iv = generate_iv()?;
    let cipher = encryptor(key.expose_secret(), &iv)?;

    // | IV | plaintext, padded in place to ciphertext |
    let msg_len = plaintext.len();
    let mut out = vec![0u8; IV_LEN + msg_len + BLOCK_LEN];
    out[..IV_LEN].copy_from_slice(&iv);
    out[IV_LEN..IV_LEN + msg_len].copy_from_slice(plaintext);

    let ciphertext_len = cipher
        .encrypt_padded_mut::<Pkcs7>(&mut out[IV_LEN..], msg_len)
        .map_err(|_| CoreError::CipherOperation("padding buffer too small"))?
        .len();
    out.truncate(IV_LEN + ciphertext_len);

    debug!(plaintext_len = msg_len, ciphertext_len, "encrypted payload");
    Ok(codec::to_base64(&out))
}

#[inline]
pub fn encrypt_str(plaintext: &str, key_hex: &str) -> Result<String> {
    encrypt(plaintext.as_bytes(), key_hex)
}
