// src/crypto/decrypt.rs
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::BlockDecryptMut;
use tracing::debug;
use zeroize::Zeroizing;

use super::decryptor;
use crate::codec;
use crate::consts::IV_LEN;
use crate::error::{CoreError, Result};
use crate::key_ops::key_from_hex;

/// Decrypt a token produced by [`super::encrypt`]
///
/// Never panics. Use [`CoreError::category`] to tell malformed input
/// from a wrong key or corrupted ciphertext.
pub fn decrypt(payload: &str, key_hex: &str) -> Result<Vec<u8>> {
    let key = key_from_hex(key_hex)?;
    let data = codec::from_base64(payload)?;
    if data.len() < IV_LEN {
        return Err(CoreError::MalformedPayload {
            min: IV_LEN,
            actual: data.len(),
        });
    }

    let (iv, ciphertext) = data.split_at(IV_LEN);
    let cipher = decryptor(key.expose_secret(), iv)?;

    // wiped on drop if unpadding fails
    let mut buf = Zeroizing::new(ciphertext.to_vec());
    let plaintext_len = cipher
        .decrypt_padded_mut::<Pkcs7>(&mut *buf)
        .map_err(|_| {
            CoreError::CipherOperation("invalid padding or ciphertext length (wrong key?)")
        })?
        .len();
    buf.truncate(plaintext_len);

    debug!(ciphertext_len = ciphertext.len(), plaintext_len, "decrypted payload");
    Ok(std::mem::take(&mut *buf))
}

/// [`decrypt`] for text payloads; non-UTF-8 output is an error
pub fn decrypt_to_string(payload: &str, key_hex: &str) -> Result<String> {
    Ok(String::from_utf8(decrypt(payload, key_hex)?)?)
}
