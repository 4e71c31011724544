// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("secure random source unavailable: {0}")]
    RandomSource(String),

    #[error("cipher initialization failed: {0}")]
    CipherInit(&'static str),

    #[error("cipher operation failed: {0}")]
    CipherOperation(&'static str),

    #[error("malformed key+IV record: expected {expected} bytes, got {actual}")]
    MalformedRecord { expected: usize, actual: usize },

    #[error("malformed payload: {actual} bytes is too short to contain a {min}-byte IV")]
    MalformedPayload { min: usize, actual: usize },

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decrypted text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse grouping of [`CoreError`] for callers that only need to know
/// what kind of thing went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Input or configuration could not be parsed or was the wrong shape
    MalformedInput,
    /// Wrong key, wrong IV, corrupted ciphertext or bad padding
    Crypto,
    /// No secure randomness available
    RandomSource,
    /// Reading or writing failed
    Io,
}

impl CoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CoreError::MalformedRecord { .. }
            | CoreError::MalformedPayload { .. }
            | CoreError::Hex(_)
            | CoreError::Base64(_)
            | CoreError::Utf8(_)
            | CoreError::Config(_) => ErrorCategory::MalformedInput,
            CoreError::CipherInit(_) | CoreError::CipherOperation(_) => ErrorCategory::Crypto,
            CoreError::RandomSource(_) => ErrorCategory::RandomSource,
            CoreError::Io(_) => ErrorCategory::Io,
        }
    }

    #[inline]
    pub fn is_malformed_input(&self) -> bool {
        self.category() == ErrorCategory::MalformedInput
    }

    #[inline]
    pub fn is_crypto_failure(&self) -> bool {
        self.category() == ErrorCategory::Crypto
    }
}
