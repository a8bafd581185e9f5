//! src/crypto/kdf.rs
//! Packet key derivation: X25519 shared secret → HKDF-SHA256 → ChaCha20 key.

use crate::consts::{KEY_SIZE, PUBLIC_KEY_SIZE};
use crate::error::Crypt4ghError;
use crate::keys::{PublicKey, SecretKey};
use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroizing;

const HKDF_INFO: &[u8] = b"crypt4gh-x25519-chacha20-poly1305";

/// Derive the symmetric key that seals one header packet.
///
/// The writer calls this with its own secret and the recipient's public key;
/// the reader calls it with its secret and the writer key embedded in the
/// packet. Diffie-Hellman symmetry makes both outputs equal. The info string
/// binds writer and reader public keys in a fixed order, so a packet cannot
/// be replayed against a different key pair.
pub fn derive_packet_key(
    secret: &SecretKey,
    their_public: &PublicKey,
    writer_public: &PublicKey,
    reader_public: &PublicKey,
) -> Result<Zeroizing<[u8; KEY_SIZE]>, Crypt4ghError> {
    let shared = secret.diffie_hellman(their_public);
    if !shared.was_contributory() {
        return Err(Crypt4ghError::Security(
            "degenerate X25519 shared secret (low-order public key)".into(),
        ));
    }

    let mut info = Vec::with_capacity(HKDF_INFO.len() + 2 * PUBLIC_KEY_SIZE);
    info.extend_from_slice(HKDF_INFO);
    info.extend_from_slice(writer_public.as_bytes());
    info.extend_from_slice(reader_public.as_bytes());

    let hk = Hkdf::<Sha256>::new(None, shared.as_bytes());
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    hk.expand(&info, &mut key[..])
        .map_err(|_| Crypt4ghError::Security("packet key derivation failed".into()))?;
    Ok(key)
}
