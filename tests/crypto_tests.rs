// tests/crypto_tests.rs
mod common;

use aes256_cbc_vault::codec::{from_base64, to_base64};
use aes256_cbc_vault::consts::{BLOCK_LEN, IV_LEN};
use aes256_cbc_vault::crypto::*;
use aes256_cbc_vault::error::{CoreError, ErrorCategory};
use aes256_cbc_vault::key_ops::{generate_key, key_to_hex};

fn fresh_key_hex() -> String {
    key_to_hex(&generate_key().unwrap())
}

#[test]
fn test_encrypt_decrypt_roundtrip_in_memory() {
    common::setup();
    let key_hex = fresh_key_hex();

    for len in [0usize, 1, 15, 16, 17, 31, 32, 33, 1000, 4096] {
        let plaintext = common::patterned(len);
        let token = encrypt(&plaintext, &key_hex).unwrap();
        let decrypted = decrypt(&token, &key_hex).unwrap();
        assert_eq!(plaintext, decrypted, "length {len}");
    }
}

#[test]
fn test_payload_layout_is_iv_then_padded_ciphertext() {
    let key_hex = fresh_key_hex();

    for len in [0usize, 5, 16, 40] {
        let token = encrypt(&common::patterned(len), &key_hex).unwrap();
        let raw = from_base64(&token).unwrap();
        let expected_ct = (len / BLOCK_LEN + 1) * BLOCK_LEN;
        assert_eq!(raw.len(), IV_LEN + expected_ct, "length {len}");
    }
}

#[test]
fn test_encrypt_is_non_deterministic() {
    let key_hex = fresh_key_hex();
    let plaintext = b"Attack at dawn!";

    let a = encrypt(plaintext, &key_hex).unwrap();
    let b = encrypt(plaintext, &key_hex).unwrap();
    assert_ne!(a, b);

    let (raw_a, raw_b) = (from_base64(&a).unwrap(), from_base64(&b).unwrap());
    assert_ne!(raw_a[..IV_LEN], raw_b[..IV_LEN]);

    assert_eq!(decrypt(&a, &key_hex).unwrap(), plaintext);
    assert_eq!(decrypt(&b, &key_hex).unwrap(), plaintext);
}

#[test]
fn test_text_helpers_roundtrip_unicode() {
    let key_hex = fresh_key_hex();
    let text = "héllo, wörld: 你好 🔐";
    let token = encrypt_str(text, &key_hex).unwrap();
    assert_eq!(decrypt_to_string(&token, &key_hex).unwrap(), text);
}

#[test]
fn test_decrypt_to_string_rejects_non_utf8() {
    let key_hex = fresh_key_hex();
    let token = encrypt(&[0xff, 0xfe, 0xfd], &key_hex).unwrap();
    let err = decrypt_to_string(&token, &key_hex).unwrap_err();
    assert!(matches!(err, CoreError::Utf8(_)));
    assert!(err.is_malformed_input());
}

#[test]
fn test_decrypt_rejects_payload_shorter_than_iv() {
    let key_hex = fresh_key_hex();

    for len in 0..IV_LEN {
        let token = to_base64(&vec![0u8; len]);
        let err = decrypt(&token, &key_hex).unwrap_err();
        assert!(
            matches!(err, CoreError::MalformedPayload { min: 16, actual } if actual == len),
            "length {len}: {err}"
        );
        assert_eq!(err.category(), ErrorCategory::MalformedInput);
    }
}

#[test]
fn test_decrypt_iv_only_payload_is_crypto_failure() {
    let key_hex = fresh_key_hex();
    let token = to_base64(&[0u8; IV_LEN]);
    let err = decrypt(&token, &key_hex).unwrap_err();
    assert!(matches!(err, CoreError::CipherOperation(_)));
}

#[test]
fn test_decrypt_rejects_unaligned_ciphertext() {
    let key_hex = fresh_key_hex();
    let mut raw = from_base64(&encrypt(b"some secret text", &key_hex).unwrap()).unwrap();
    raw.pop();
    let err = decrypt(&to_base64(&raw), &key_hex).unwrap_err();
    assert!(err.is_crypto_failure());
}

#[test]
fn test_decrypt_rejects_invalid_base64() {
    let key_hex = fresh_key_hex();
    let err = decrypt("***not base64***", &key_hex).unwrap_err();
    assert!(matches!(err, CoreError::Base64(_)));
    assert!(err.is_malformed_input());
}

#[test]
fn test_bad_keys_are_reported_not_panicked() {
    let token = encrypt(b"secret", &fresh_key_hex()).unwrap();

    // not hex
    let err = decrypt(&token, "xyz").unwrap_err();
    assert!(matches!(err, CoreError::Hex(_)));

    // hex, but 128-bit
    let err = decrypt(&token, &"ab".repeat(16)).unwrap_err();
    assert!(matches!(err, CoreError::CipherInit(_)));

    let err = encrypt(b"secret", &"ab".repeat(31)).unwrap_err();
    assert!(matches!(err, CoreError::CipherInit(_)));
}

#[test]
fn test_decrypt_with_wrong_key_never_returns_plaintext() {
    let plaintext = b"secret message that spans more than one block";
    let token = encrypt(plaintext, &fresh_key_hex()).unwrap();

    for _ in 0..16 {
        match decrypt(&token, &fresh_key_hex()) {
            Ok(garbage) => assert_ne!(garbage, plaintext),
            Err(err) => assert_eq!(err.category(), ErrorCategory::Crypto),
        }
    }
}

#[test]
fn test_any_single_bit_flip_changes_result() {
    let key_hex = fresh_key_hex();
    let plaintext = b"thirty-two bytes of plaintext!!";
    let raw = from_base64(&encrypt(plaintext, &key_hex).unwrap()).unwrap();

    for byte in 0..raw.len() {
        for bit in 0..8 {
            let mut tampered = raw.clone();
            tampered[byte] ^= 1 << bit;
            match decrypt(&to_base64(&tampered), &key_hex) {
                Ok(out) => assert_ne!(out, plaintext, "byte {byte} bit {bit}"),
                Err(err) => assert!(err.is_crypto_failure(), "byte {byte} bit {bit}: {err}"),
            }
        }
    }
}
