// src/crypto/mod.rs

//! Low-level crypto primitives (packet KDF, randomness).
//!
//! The AEAD itself is driven from `header` and `segment`; this module only
//! holds what both sides of the key exchange share.

pub mod kdf;
pub mod rng;
