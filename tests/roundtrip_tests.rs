//! tests/roundtrip_tests.rs
//! End-to-end encrypt → decrypt round trips across the interesting lengths.

mod common;

use common::build_container;
use crypt4gh::consts::SEGMENT_SIZE;
use crypt4gh::{decrypt, Crypt4ghReader, Crypt4ghWriter, KeyPair};
use std::io::{Cursor, Read, Write};

fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn roundtrip_boundary_lengths() {
    let lengths = [
        0,
        1,
        SEGMENT_SIZE - 1,
        SEGMENT_SIZE,
        SEGMENT_SIZE + 1,
        2 * SEGMENT_SIZE,
        2 * SEGMENT_SIZE + 513,
        3 * SEGMENT_SIZE,
    ];

    for len in lengths {
        let plaintext = patterned(len);
        let (container, _, reader) = build_container(&plaintext);

        let mut decrypted = Vec::new();
        decrypt(Cursor::new(&container), &mut decrypted, &reader.secret)
            .unwrap_or_else(|e| panic!("decryption failed for length {len}: {e}"));
        assert_eq!(decrypted, plaintext, "mismatch at length {len}");
    }
}

#[test]
fn byte_at_a_time_writes_match_bulk_writes() {
    let writer_keys = KeyPair::generate();
    let reader_keys = KeyPair::generate();
    let plaintext = patterned(SEGMENT_SIZE + 37);

    let mut enc =
        Crypt4ghWriter::new(Vec::new(), &writer_keys.secret, &reader_keys.public).unwrap();
    for &byte in &plaintext {
        enc.write_all(&[byte]).unwrap();
    }
    let container = enc.finish().unwrap();

    let mut decrypted = Vec::new();
    decrypt(Cursor::new(&container), &mut decrypted, &reader_keys.secret).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn streaming_read_with_small_buffer() {
    let plaintext = patterned(SEGMENT_SIZE + 1000);
    let (container, _, reader_keys) = build_container(&plaintext);

    let mut reader = Crypt4ghReader::new(Cursor::new(&container), &reader_keys.secret).unwrap();
    let mut decrypted = Vec::new();
    let mut chunk = [0u8; 777];
    loop {
        let n = reader.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        decrypted.extend_from_slice(&chunk[..n]);
    }
    assert_eq!(decrypted, plaintext);
}

#[test]
fn reencryption_differs_bytewise_but_both_roundtrip() {
    let writer_keys = KeyPair::generate();
    let reader_keys = KeyPair::generate();
    let plaintext = patterned(4096);

    let mut first = Vec::new();
    let mut second = Vec::new();
    crypt4gh::encrypt(
        Cursor::new(&plaintext),
        &mut first,
        &writer_keys.secret,
        &reader_keys.public,
    )
    .unwrap();
    crypt4gh::encrypt(
        Cursor::new(&plaintext),
        &mut second,
        &writer_keys.secret,
        &reader_keys.public,
    )
    .unwrap();

    // fresh session key and nonces every time: same structure, different bytes
    assert_eq!(first.len(), second.len());
    assert_ne!(first[16..], second[16..]);

    for container in [&first, &second] {
        let mut decrypted = Vec::new();
        decrypt(Cursor::new(container), &mut decrypted, &reader_keys.secret).unwrap();
        assert_eq!(decrypted, plaintext);
    }
}

#[test]
fn multi_recipient_container_opens_for_each() {
    let writer_keys = KeyPair::generate();
    let recipients: Vec<KeyPair> = (0..3).map(|_| KeyPair::generate()).collect();
    let publics: Vec<_> = recipients.iter().map(|kp| kp.public).collect();
    let plaintext = patterned(10_000);

    let mut enc =
        Crypt4ghWriter::with_recipients(Vec::new(), &writer_keys.secret, &publics).unwrap();
    assert_eq!(enc.header().packets().len(), 3);
    enc.write_all(&plaintext).unwrap();
    let container = enc.finish().unwrap();

    for recipient in &recipients {
        let mut decrypted = Vec::new();
        decrypt(Cursor::new(&container), &mut decrypted, &recipient.secret).unwrap();
        assert_eq!(decrypted, plaintext);
    }
}

#[test]
fn reader_debug_omits_decrypted_data() {
    let plaintext = b"confidential payload".to_vec();
    let (container, _, reader_keys) = build_container(&plaintext);

    let mut dec = Crypt4ghReader::new(Cursor::new(&container), &reader_keys.secret).unwrap();
    let mut buf = [0u8; 1];
    dec.read_exact(&mut buf).unwrap();

    let rendered = format!("{dec:?}");
    assert!(rendered.contains("Crypt4ghReader"));
    assert!(!rendered.contains("confidential"));
}

#[test]
fn writer_header_accessor_matches_container_prefix() {
    let writer_keys = KeyPair::generate();
    let reader_keys = KeyPair::generate();

    let enc = Crypt4ghWriter::new(Vec::new(), &writer_keys.secret, &reader_keys.public).unwrap();
    let header_bytes = enc.header().serialize();
    let container = enc.finish().unwrap();
    assert_eq!(container[..header_bytes.len()], header_bytes[..]);
}
