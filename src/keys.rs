//! src/keys.rs
//! Key material boundary: X25519 key pairs and session keys as
//! fixed-length byte buffers.
//!
//! Textual key encodings (PEM and friends) live outside this crate; the
//! only contract here is length. Secret bytes are zeroized on drop.

use crate::consts::{KEY_SIZE, PUBLIC_KEY_SIZE};
use rand::rngs::OsRng;
use rand::RngCore;
use x25519_dalek::StaticSecret;
use zeroize::Zeroizing;

/// X25519 private key.
///
/// Never serialized by this crate; `to_bytes` hands out a self-wiping copy
/// for callers that persist keys themselves.
#[derive(Clone)]
pub struct SecretKey(StaticSecret);

impl SecretKey {
    /// Fresh random private key.
    pub fn generate() -> Self {
        Self(StaticSecret::random_from_rng(OsRng))
    }

    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(StaticSecret::from(bytes))
    }

    /// Self-wiping copy of the raw scalar.
    pub fn to_bytes(&self) -> Zeroizing<[u8; KEY_SIZE]> {
        Zeroizing::new(self.0.to_bytes())
    }

    /// The matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(x25519_dalek::PublicKey::from(&self.0).to_bytes())
    }

    pub(crate) fn diffie_hellman(&self, their_public: &PublicKey) -> x25519_dalek::SharedSecret {
        self.0
            .diffie_hellman(&x25519_dalek::PublicKey::from(their_public.0))
    }
}

/// X25519 public key, 32 raw bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(pub(crate) [u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

/// An X25519 key pair.
pub struct KeyPair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

impl KeyPair {
    /// Generate a fresh key pair.
    pub fn generate() -> Self {
        let secret = SecretKey::generate();
        let public = secret.public_key();
        Self { secret, public }
    }
}

/// Fresh random 32-byte session key, one per output stream.
pub(crate) fn generate_session_key() -> Zeroizing<[u8; KEY_SIZE]> {
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    OsRng.fill_bytes(&mut key[..]);
    key
}
