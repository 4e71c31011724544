// src/file_ops.rs
//! File-level encryption/decryption operations
//!
//! Opens files with buffered I/O and hands them to the streaming cipher in
//! `crypto::stream`. Nothing is read fully into memory.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::debug;

use crate::aliases::{Aes256Key, Iv};
use crate::crypto::{decrypt_stream, encrypt_stream};
use crate::error::Result;
use crate::key_ops::KeyMaterial;

/// Encrypt a file on disk with a caller-supplied key and IV
///
/// Returns the plaintext size in bytes. The IV is not stored in the output.
pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    key: &Aes256Key,
    iv: &Iv,
) -> Result<u64> {
    let input = BufReader::new(File::open(input_path.as_ref())?);
    let output = BufWriter::new(File::create(output_path.as_ref())?);
    let size = encrypt_stream(input, output, key, iv)?;
    debug!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        size,
        "encrypted file"
    );
    Ok(size)
}

/// Decrypt a file produced by [`encrypt_file`]
///
/// Returns the plaintext size in bytes. On error the output file may hold
/// partial plaintext and should be removed by the caller.
pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    key: &Aes256Key,
    iv: &Iv,
) -> Result<u64> {
    let input = BufReader::new(File::open(input_path.as_ref())?);
    let output = BufWriter::new(File::create(output_path.as_ref())?);
    let size = decrypt_stream(input, output, key, iv)?;
    debug!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        size,
        "decrypted file"
    );
    Ok(size)
}

/// [`encrypt_file`] with key and IV taken from a combined key+IV record
pub fn encrypt_file_with_record<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    record: &str,
) -> Result<u64> {
    let material = KeyMaterial::from_record(record)?;
    encrypt_file(input_path, output_path, &material.key, &material.iv)
}

pub fn decrypt_file_with_record<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    record: &str,
) -> Result<u64> {
    let material = KeyMaterial::from_record(record)?;
    decrypt_file(input_path, output_path, &material.key, &material.iv)
}
