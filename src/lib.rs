// src/lib.rs

//! Streaming implementation of the Crypt4GH encrypted container format.
//!
//! A container is a self-describing header (the session key sealed for one
//! or more recipients via X25519 + ChaCha20-Poly1305) followed by the body:
//! 64 KiB plaintext segments, each independently encrypted and authenticated
//! under the session key. Both directions run with bounded memory over plain
//! `std::io` readers and writers.

pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod keys;
pub mod segment;

pub(crate) mod utils;

// High-level API — this is what 99% of users import
pub use decryptor::{decrypt, Crypt4ghReader};
pub use encryptor::{encrypt, Crypt4ghWriter};
pub use error::Crypt4ghError;

// Wire-format types — public for header inspection and multi-recipient flows
pub use header::{DataEncryptionMethod, EncryptionParameters, Header, HeaderPacket};
pub use keys::{KeyPair, PublicKey, SecretKey};
