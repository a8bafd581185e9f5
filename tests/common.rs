//! tests/common.rs
//! Shared helpers for the integration tests.

use crypt4gh::{encrypt, KeyPair};
use std::io::Cursor;

/// Serialized header length for a container with `n` recipients.
/// magic(8) + version(4) + count(4) + n * packet(104).
#[allow(dead_code)] // Used across multiple test files
pub fn header_len(recipients: usize) -> usize {
    16 + 104 * recipients
}

/// Encrypt `plaintext` into a fresh in-memory container; returns the
/// container bytes together with the writer and recipient key pairs.
#[allow(dead_code)] // Used across multiple test files
pub fn build_container(plaintext: &[u8]) -> (Vec<u8>, KeyPair, KeyPair) {
    let writer = KeyPair::generate();
    let reader = KeyPair::generate();

    let mut container = Vec::new();
    encrypt(
        Cursor::new(plaintext),
        &mut container,
        &writer.secret,
        &reader.public,
    )
    .unwrap();

    (container, writer, reader)
}
