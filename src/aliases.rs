// src/aliases.rs
//! Key and IV types used throughout aes256-cbc-vault
//!
//! Keys live in secure-gate wrappers so they are zeroized on drop and never
//! printed by `Debug`. IVs are public material and stay plain arrays.

pub use secure_gate::fixed_alias;

use crate::consts::IV_LEN;

// 256-bit AES key
fixed_alias!(Aes256Key, 32);

/// 128-bit CBC initialization vector
pub type Iv = [u8; IV_LEN];
