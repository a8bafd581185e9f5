//! src/header/params.rs
//! Data encryption parameters: cipher id + session key.
//!
//! The single source of truth for how body segments are encrypted. Pure
//! value object — no I/O, immutable after construction.

use crate::consts::{CHACHA20_IETF_POLY1305, KEY_SIZE, PACKET_PAYLOAD_SIZE};
use crate::error::Crypt4ghError;
use crate::keys::generate_session_key;
use chacha20poly1305::{ChaCha20Poly1305, Key, KeyInit};
use std::fmt;
use zeroize::Zeroizing;

/// Symmetric cipher applied to body segments.
///
/// Tagged by the wire method id; exactly one value is currently defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataEncryptionMethod {
    /// ChaCha20-Poly1305 with IETF 96-bit nonces (method id 0).
    ChaCha20IetfPoly1305,
}

impl DataEncryptionMethod {
    pub const fn id(self) -> u32 {
        match self {
            Self::ChaCha20IetfPoly1305 => CHACHA20_IETF_POLY1305,
        }
    }

    pub fn from_id(id: u32) -> Result<Self, Crypt4ghError> {
        match id {
            CHACHA20_IETF_POLY1305 => Ok(Self::ChaCha20IetfPoly1305),
            other => Err(Crypt4ghError::Security(format!(
                "unsupported data encryption method: {other}"
            ))),
        }
    }
}

/// Cipher id + session key for one container body.
pub struct EncryptionParameters {
    method: DataEncryptionMethod,
    session_key: Zeroizing<[u8; KEY_SIZE]>,
}

impl EncryptionParameters {
    pub fn new(method: DataEncryptionMethod, session_key: [u8; KEY_SIZE]) -> Self {
        Self {
            method,
            session_key: Zeroizing::new(session_key),
        }
    }

    /// Fresh parameters with a random session key — one per output stream,
    /// never reused across containers.
    pub(crate) fn generate() -> Self {
        Self {
            method: DataEncryptionMethod::ChaCha20IetfPoly1305,
            session_key: generate_session_key(),
        }
    }

    pub fn method(&self) -> DataEncryptionMethod {
        self.method
    }

    /// Body cipher keyed with the session key.
    pub(crate) fn cipher(&self) -> ChaCha20Poly1305 {
        match self.method {
            DataEncryptionMethod::ChaCha20IetfPoly1305 => {
                ChaCha20Poly1305::new(Key::from_slice(&self.session_key[..]))
            }
        }
    }

    /// Serialize to the 36-byte header packet payload: method id + key.
    pub(crate) fn to_payload(&self) -> Zeroizing<[u8; PACKET_PAYLOAD_SIZE]> {
        let mut payload = Zeroizing::new([0u8; PACKET_PAYLOAD_SIZE]);
        payload[..4].copy_from_slice(&self.method.id().to_le_bytes());
        payload[4..].copy_from_slice(&self.session_key[..]);
        payload
    }

    /// Parse a decrypted packet payload. Length is part of the contract:
    /// anything but method id + full-size key is rejected.
    pub(crate) fn from_payload(payload: &[u8]) -> Result<Self, Crypt4ghError> {
        if payload.len() != PACKET_PAYLOAD_SIZE {
            return Err(Crypt4ghError::Security(format!(
                "invalid encryption parameters length: {}",
                payload.len()
            )));
        }
        let method = DataEncryptionMethod::from_id(u32::from_le_bytes(
            payload[..4].try_into().expect("4-byte slice"),
        ))?;
        let mut session_key = Zeroizing::new([0u8; KEY_SIZE]);
        session_key.copy_from_slice(&payload[4..]);
        Ok(Self {
            method,
            session_key,
        })
    }
}

/// Never prints the session key.
impl fmt::Debug for EncryptionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionParameters")
            .field("method", &self.method)
            .field("session_key", &"<redacted>")
            .finish()
    }
}
