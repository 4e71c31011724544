// tests/file_ops_tests.rs
mod common;

use std::fs;

use aes256_cbc_vault::consts::{BLOCK_LEN, DEFAULT_CHUNK_SIZE};
use aes256_cbc_vault::error::CoreError;
use aes256_cbc_vault::file_ops::*;
use aes256_cbc_vault::key_ops::{generate_iv, generate_key, KeyMaterial};
use tempfile::TempDir;

#[test]
fn test_encrypt_decrypt_file_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    common::setup();
    let dir = TempDir::new()?;
    let key = generate_key()?;
    let iv = generate_iv()?;

    for size in [0, DEFAULT_CHUNK_SIZE, 9 * DEFAULT_CHUNK_SIZE + 1] {
        let plain_path = dir.path().join(format!("plain-{size}.bin"));
        let enc_path = dir.path().join(format!("plain-{size}.bin.enc"));
        let dec_path = dir.path().join(format!("plain-{size}.bin.dec"));
        let plaintext = common::patterned(size);
        fs::write(&plain_path, &plaintext)?;

        assert_eq!(encrypt_file(&plain_path, &enc_path, &key, &iv)?, size as u64);
        let ciphertext = fs::read(&enc_path)?;
        // raw ciphertext only: no IV, one padding block at most
        assert_eq!(ciphertext.len(), (size / BLOCK_LEN + 1) * BLOCK_LEN);

        assert_eq!(decrypt_file(&enc_path, &dec_path, &key, &iv)?, size as u64);
        assert_eq!(fs::read(&dec_path)?, plaintext);
    }
    Ok(())
}

#[test]
fn test_record_based_file_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let record = KeyMaterial::generate()?.to_record();

    let plain_path = dir.path().join("note.txt");
    let enc_path = dir.path().join("note.txt.enc");
    let dec_path = dir.path().join("note.txt.dec");
    fs::write(&plain_path, b"meet me at the usual place")?;

    encrypt_file_with_record(&plain_path, &enc_path, &record)?;
    decrypt_file_with_record(&enc_path, &dec_path, &record)?;
    assert_eq!(fs::read(&dec_path)?, b"meet me at the usual place");
    Ok(())
}

#[test]
fn test_file_decrypt_with_other_record_fails_or_differs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let record = KeyMaterial::generate()?.to_record();
    let other = KeyMaterial::generate()?.to_record();

    let plain_path = dir.path().join("a.bin");
    let enc_path = dir.path().join("a.bin.enc");
    let dec_path = dir.path().join("a.bin.dec");
    let plaintext = common::patterned(4000);
    fs::write(&plain_path, &plaintext)?;

    encrypt_file_with_record(&plain_path, &enc_path, &record)?;
    match decrypt_file_with_record(&enc_path, &dec_path, &other) {
        Ok(_) => assert_ne!(fs::read(&dec_path)?, plaintext),
        Err(err) => assert!(err.is_crypto_failure()),
    }
    Ok(())
}

#[test]
fn test_malformed_record_fails_before_touching_files() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("never.enc");
    let err = encrypt_file_with_record(dir.path().join("missing"), &out, "abcd").unwrap_err();
    assert!(matches!(err, CoreError::MalformedRecord { actual: 2, .. }));
    assert!(!out.exists());
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let key = generate_key().unwrap();
    let iv = generate_iv().unwrap();
    let err = encrypt_file(
        dir.path().join("does-not-exist"),
        dir.path().join("out.enc"),
        &key,
        &iv,
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::Io(_)));
}
