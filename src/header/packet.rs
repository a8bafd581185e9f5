//! src/header/packet.rs
//! Header packets: the session key sealed for one recipient.
//!
//! A packet is meaningful only relative to a key pair producing the same
//! X25519 shared secret — the writer seals with `(writer_sk, reader_pk)`,
//! the reader opens with `(reader_sk, writer_pk)` taken from the packet.

use crate::consts::{
    MAX_PACKET_SIZE, NONCE_SIZE, PUBLIC_KEY_SIZE, TAG_SIZE, X25519_CHACHA20_POLY1305,
};
use crate::crypto::kdf::derive_packet_key;
use crate::crypto::rng::random_span;
use crate::error::Crypt4ghError;
use crate::header::params::EncryptionParameters;
use crate::keys::{PublicKey, SecretKey};
use crate::utils::read_u32_le;
use chacha20poly1305::aead::Aead;
use chacha20poly1305::{ChaCha20Poly1305, Key, KeyInit, Nonce};
use std::io::Read;
use zeroize::Zeroizing;

/// One sealed envelope, tagged by the wire `encryption_method`.
///
/// Unknown methods are carried as [`HeaderPacket::Unsupported`] so the
/// decoder stays total over the wire format: a multi-recipient header may
/// mix packets this implementation cannot open with one it can.
///
/// Every field is wire-public (the payload is ciphertext), so `Debug` is
/// derived.
#[derive(Debug)]
pub enum HeaderPacket {
    /// X25519 key exchange + ChaCha20-Poly1305 sealing (method id 0).
    X25519ChaCha20Poly1305 {
        writer_public: PublicKey,
        nonce: [u8; NONCE_SIZE],
        /// Ciphertext of the 36-byte parameters payload, tag appended.
        encrypted_payload: Vec<u8>,
    },
    /// A method this implementation cannot open. Round-trips verbatim.
    Unsupported { method: u32, body: Vec<u8> },
}

impl HeaderPacket {
    /// Seal `parameters` for one recipient.
    ///
    /// Embeds the writer's own public key so the recipient can recompute
    /// the shared secret without out-of-band coordination.
    pub fn seal(
        writer_secret: &SecretKey,
        recipient: &PublicKey,
        parameters: &EncryptionParameters,
    ) -> Result<Self, Crypt4ghError> {
        let writer_public = writer_secret.public_key();
        let key = derive_packet_key(writer_secret, recipient, &writer_public, recipient)?;
        let cipher = ChaCha20Poly1305::new(Key::from_slice(&key[..]));

        let nonce: [u8; NONCE_SIZE] = random_span();
        let payload = parameters.to_payload();
        let encrypted_payload = cipher
            .encrypt(Nonce::from_slice(&nonce), &payload[..])
            .map_err(|_| Crypt4ghError::Security("header packet sealing failed".into()))?;

        Ok(Self::X25519ChaCha20Poly1305 {
            writer_public,
            nonce,
            encrypted_payload,
        })
    }

    /// Open this packet with the reader's private key.
    ///
    /// An authentication failure here is expected for packets addressed to
    /// somebody else; [`Header::decrypt_parameters`](crate::Header) tries
    /// every packet and only fails once none opens.
    pub fn open(&self, reader_secret: &SecretKey) -> Result<EncryptionParameters, Crypt4ghError> {
        match self {
            Self::X25519ChaCha20Poly1305 {
                writer_public,
                nonce,
                encrypted_payload,
            } => {
                let reader_public = reader_secret.public_key();
                let key =
                    derive_packet_key(reader_secret, writer_public, writer_public, &reader_public)?;
                let cipher = ChaCha20Poly1305::new(Key::from_slice(&key[..]));

                let payload = cipher
                    .decrypt(Nonce::from_slice(nonce), encrypted_payload.as_slice())
                    .map_err(|_| {
                        Crypt4ghError::Authentication(
                            "header packet tag verification failed".into(),
                        )
                    })?;
                EncryptionParameters::from_payload(&Zeroizing::new(payload))
            }
            Self::Unsupported { method, .. } => Err(Crypt4ghError::Security(format!(
                "unsupported header packet method: {method}"
            ))),
        }
    }

    /// Length-prefixed wire form; the prefix counts itself.
    pub fn serialize(&self) -> Vec<u8> {
        let (method, body_len) = match self {
            Self::X25519ChaCha20Poly1305 {
                encrypted_payload, ..
            } => (
                X25519_CHACHA20_POLY1305,
                PUBLIC_KEY_SIZE + NONCE_SIZE + encrypted_payload.len(),
            ),
            Self::Unsupported { method, body } => (*method, body.len()),
        };

        let mut out = Vec::with_capacity(8 + body_len);
        out.extend_from_slice(&((8 + body_len) as u32).to_le_bytes());
        out.extend_from_slice(&method.to_le_bytes());
        match self {
            Self::X25519ChaCha20Poly1305 {
                writer_public,
                nonce,
                encrypted_payload,
            } => {
                out.extend_from_slice(writer_public.as_bytes());
                out.extend_from_slice(nonce);
                out.extend_from_slice(encrypted_payload);
            }
            Self::Unsupported { body, .. } => out.extend_from_slice(body),
        }
        out
    }

    /// Parse one length-prefixed packet. No private key required.
    pub fn deserialize<R: Read>(reader: &mut R) -> Result<Self, Crypt4ghError> {
        let packet_length = read_u32_le(reader)?;
        if packet_length < 8 {
            return Err(Crypt4ghError::Format(format!(
                "header packet length too small: {packet_length}"
            )));
        }
        if packet_length > MAX_PACKET_SIZE {
            return Err(Crypt4ghError::Format(format!(
                "header packet length too large: {packet_length}"
            )));
        }

        let method = read_u32_le(reader)?;
        let mut body = vec![0u8; packet_length as usize - 8];
        reader.read_exact(&mut body).map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => {
                Crypt4ghError::Format("truncated header packet".into())
            }
            _ => Crypt4ghError::Io(e),
        })?;

        match method {
            X25519_CHACHA20_POLY1305 => {
                if body.len() < PUBLIC_KEY_SIZE + NONCE_SIZE + TAG_SIZE {
                    return Err(Crypt4ghError::Format(
                        "header packet body too short for X25519 + ChaCha20-Poly1305".into(),
                    ));
                }
                let mut writer_public = [0u8; PUBLIC_KEY_SIZE];
                writer_public.copy_from_slice(&body[..PUBLIC_KEY_SIZE]);
                let mut nonce = [0u8; NONCE_SIZE];
                nonce.copy_from_slice(&body[PUBLIC_KEY_SIZE..PUBLIC_KEY_SIZE + NONCE_SIZE]);
                let encrypted_payload = body[PUBLIC_KEY_SIZE + NONCE_SIZE..].to_vec();
                Ok(Self::X25519ChaCha20Poly1305 {
                    writer_public: PublicKey::from_bytes(writer_public),
                    nonce,
                    encrypted_payload,
                })
            }
            other => Ok(Self::Unsupported {
                method: other,
                body,
            }),
        }
    }
}
