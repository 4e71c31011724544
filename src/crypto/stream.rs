// src/crypto/stream.rs
//! Streaming AES-256-CBC for inputs of any size
//!
//! Output is raw ciphertext only. The IV is not written to the stream and
//! must travel separately (see [`crate::key_ops::KeyMaterial`]).
//!
//! Memory use is bounded by the configured chunk size. A failed call may
//! already have written part of its output; callers must discard it.

use std::io::{ErrorKind, Read, Write};

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::generic_array::GenericArray;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut};
use tracing::debug;
use zeroize::Zeroizing;

use super::{decryptor, encryptor};
use crate::aliases::{Aes256Key, Iv};
use crate::config::{self, StreamConfig};
use crate::consts::BLOCK_LEN;
use crate::error::{CoreError, Result};

/// Read until `buf` is full or the reader hits EOF
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Encrypt `input` into `output` using the global stream config
///
/// Returns the number of plaintext bytes consumed.
pub fn encrypt_stream<R: Read, W: Write>(
    input: R,
    output: W,
    key: &Aes256Key,
    iv: &Iv,
) -> Result<u64> {
    encrypt_stream_with(&config::load().stream, input, output, key, iv)
}

pub fn encrypt_stream_with<R: Read, W: Write>(
    config: &StreamConfig,
    mut input: R,
    mut output: W,
    key: &Aes256Key,
    iv: &Iv,
) -> Result<u64> {
    config.validate()?;
    let chunk_size = config.chunk_size;
    let mut cipher = encryptor(key.expose_secret(), iv)?;

    // carried partial block + one fresh chunk
    let mut buf = Zeroizing::new(vec![0u8; chunk_size + BLOCK_LEN]);
    let mut carried = 0usize;
    let mut consumed = 0u64;

    loop {
        let n = read_chunk(&mut input, &mut buf[carried..carried + chunk_size])?;
        if n == 0 {
            break;
        }
        consumed += n as u64;

        let filled = carried + n;
        let whole = filled - filled % BLOCK_LEN;
        for block in buf[..whole].chunks_exact_mut(BLOCK_LEN) {
            cipher.encrypt_block_mut(GenericArray::from_mut_slice(block));
        }
        output.write_all(&buf[..whole])?;

        buf.copy_within(whole..filled, 0);
        carried = filled - whole;
    }

    // Finalize: pad the remaining 0..=15 bytes into exactly one block.
    // `encrypt_padded_mut` consumes the cipher, so it cannot be reused.
    let mut last = Zeroizing::new([0u8; BLOCK_LEN]);
    last[..carried].copy_from_slice(&buf[..carried]);
    let tail = cipher
        .encrypt_padded_mut::<Pkcs7>(&mut *last, carried)
        .map_err(|_| CoreError::CipherOperation("could not pad final block"))?;
    output.write_all(tail)?;
    output.flush()?;

    debug!(plaintext_len = consumed, chunk_size, "encrypted stream");
    Ok(consumed)
}

/// Decrypt `input` into `output` using the global stream config
///
/// Returns the number of plaintext bytes written.
pub fn decrypt_stream<R: Read, W: Write>(
    input: R,
    output: W,
    key: &Aes256Key,
    iv: &Iv,
) -> Result<u64> {
    decrypt_stream_with(&config::load().stream, input, output, key, iv)
}

pub fn decrypt_stream_with<R: Read, W: Write>(
    config: &StreamConfig,
    mut input: R,
    mut output: W,
    key: &Aes256Key,
    iv: &Iv,
) -> Result<u64> {
    config.validate()?;
    let read_size = config.chunk_size + BLOCK_LEN;
    let mut cipher = decryptor(key.expose_secret(), iv)?;

    // held-back bytes (1..=16) + one fresh read
    let mut buf = Zeroizing::new(vec![0u8; read_size + BLOCK_LEN]);
    let mut held = 0usize;
    let mut written = 0u64;

    loop {
        let n = read_chunk(&mut input, &mut buf[held..held + read_size])?;
        if n == 0 {
            break;
        }

        // The padded block may be the last one we have seen; never release it
        // before EOF.
        let filled = held + n;
        let release = (filled - 1) / BLOCK_LEN * BLOCK_LEN;
        for block in buf[..release].chunks_exact_mut(BLOCK_LEN) {
            cipher.decrypt_block_mut(GenericArray::from_mut_slice(block));
        }
        output.write_all(&buf[..release])?;
        written += release as u64;

        buf.copy_within(release..filled, 0);
        held = filled - release;
    }

    if held != BLOCK_LEN {
        return Err(CoreError::CipherOperation(
            "ciphertext length is not a positive multiple of the block size",
        ));
    }

    let mut last = Zeroizing::new([0u8; BLOCK_LEN]);
    last.copy_from_slice(&buf[..BLOCK_LEN]);
    let plaintext = cipher
        .decrypt_padded_mut::<Pkcs7>(&mut *last)
        .map_err(|_| {
            CoreError::CipherOperation("invalid padding (wrong key/IV or corrupted ciphertext)")
        })?;
    output.write_all(plaintext)?;
    output.flush()?;
    written += plaintext.len() as u64;

    debug!(plaintext_len = written, read_size, "decrypted stream");
    Ok(written)
}
