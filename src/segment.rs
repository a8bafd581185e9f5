//! src/segment.rs
//! Body segments: fixed-capacity AEAD records framing the encrypted stream.
//!
//! Each segment is self-authenticating: `nonce || ciphertext || tag`, with
//! ciphertext the same length as the plaintext chunk (stream cipher, no
//! padding). Only the final segment of a stream may be shorter than
//! [`SEGMENT_SIZE`](crate::consts::SEGMENT_SIZE).

use crate::consts::{NONCE_SIZE, SEGMENT_SIZE, TAG_SIZE};
use crate::crypto::rng::random_span;
use crate::error::Crypt4ghError;
use crate::header::EncryptionParameters;
use chacha20poly1305::aead::Aead;
use chacha20poly1305::Nonce;

/// Seal one plaintext chunk into its serialized segment form.
///
/// The nonce is freshly random per segment. It must never repeat under one
/// session key; session keys live for a single stream, which keeps the
/// 96-bit random-nonce collision bound negligible.
pub fn encrypt_segment(
    plaintext: &[u8],
    parameters: &EncryptionParameters,
) -> Result<Vec<u8>, Crypt4ghError> {
    if plaintext.len() > SEGMENT_SIZE {
        return Err(Crypt4ghError::Format(format!(
            "segment plaintext exceeds capacity: {}",
            plaintext.len()
        )));
    }

    let nonce: [u8; NONCE_SIZE] = random_span();
    let ciphertext = parameters
        .cipher()
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| Crypt4ghError::Security("segment sealing failed".into()))?;

    let mut out = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Open one serialized segment.
///
/// A tag failure here is fatal for the stream read — body integrity is a
/// stream-level guarantee, never per-segment-optional.
pub fn decrypt_segment(
    segment: &[u8],
    parameters: &EncryptionParameters,
) -> Result<Vec<u8>, Crypt4ghError> {
    if segment.len() < NONCE_SIZE + TAG_SIZE {
        return Err(Crypt4ghError::Format(format!(
            "truncated segment: {} bytes",
            segment.len()
        )));
    }

    let (nonce, ciphertext) = segment.split_at(NONCE_SIZE);
    parameters
        .cipher()
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| Crypt4ghError::Authentication("segment tag verification failed".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let parameters = EncryptionParameters::generate();
        let plaintext = b"segment payload";

        let sealed = encrypt_segment(plaintext, &parameters).unwrap();
        assert_eq!(sealed.len(), NONCE_SIZE + plaintext.len() + TAG_SIZE);
        assert_eq!(decrypt_segment(&sealed, &parameters).unwrap(), plaintext);
    }

    #[test]
    fn empty_chunk_round_trip() {
        let parameters = EncryptionParameters::generate();
        let sealed = encrypt_segment(b"", &parameters).unwrap();
        assert_eq!(sealed.len(), NONCE_SIZE + TAG_SIZE);
        assert!(decrypt_segment(&sealed, &parameters).unwrap().is_empty());
    }

    #[test]
    fn oversized_chunk_is_rejected() {
        let parameters = EncryptionParameters::generate();
        let err = encrypt_segment(&vec![0u8; SEGMENT_SIZE + 1], &parameters).unwrap_err();
        assert!(matches!(err, Crypt4ghError::Format(_)));
    }

    #[test]
    fn flipped_ciphertext_bit_fails_authentication() {
        let parameters = EncryptionParameters::generate();
        let mut sealed = encrypt_segment(b"integrity matters", &parameters).unwrap();
        sealed[NONCE_SIZE] ^= 0x01;
        let err = decrypt_segment(&sealed, &parameters).unwrap_err();
        assert!(matches!(err, Crypt4ghError::Authentication(_)));
    }

    #[test]
    fn flipped_tag_bit_fails_authentication() {
        let parameters = EncryptionParameters::generate();
        let mut sealed = encrypt_segment(b"integrity matters", &parameters).unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x80;
        let err = decrypt_segment(&sealed, &parameters).unwrap_err();
        assert!(matches!(err, Crypt4ghError::Authentication(_)));
    }

    #[test]
    fn undersized_record_is_a_format_error() {
        let parameters = EncryptionParameters::generate();
        let err = decrypt_segment(&[0u8; NONCE_SIZE + TAG_SIZE - 1], &parameters).unwrap_err();
        assert!(matches!(err, Crypt4ghError::Format(_)));
    }

    #[test]
    fn wrong_session_key_fails_authentication() {
        let sealed = encrypt_segment(b"for someone else", &EncryptionParameters::generate()).unwrap();
        let err = decrypt_segment(&sealed, &EncryptionParameters::generate()).unwrap_err();
        assert!(matches!(err, Crypt4ghError::Authentication(_)));
    }
}
