//! Global constants for the Crypt4GH container format.
//!
//! Field widths follow the one supported cipher suite
//! (X25519 + ChaCha20-Poly1305 IETF).

/// File magic, the first 8 bytes of every container.
pub const MAGIC: &[u8; 8] = b"crypt4gh";

/// Container format version (little-endian u32 on the wire).
pub const VERSION: u32 = 1;

/// Plaintext capacity of one body segment.
pub const SEGMENT_SIZE: usize = 65_536;

/// ChaCha20-Poly1305 IETF nonce length.
pub const NONCE_SIZE: usize = 12;

/// Poly1305 authentication tag length.
pub const TAG_SIZE: usize = 16;

/// Symmetric session key length (ChaCha20 key).
pub const KEY_SIZE: usize = 32;

/// X25519 public key length.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Serialized size of a full body segment: nonce + ciphertext + tag.
pub const ENCRYPTED_SEGMENT_SIZE: usize = NONCE_SIZE + SEGMENT_SIZE + TAG_SIZE;

/// Header packet method id: X25519 key exchange + ChaCha20-Poly1305 sealing.
pub const X25519_CHACHA20_POLY1305: u32 = 0;

/// Data encryption method id: ChaCha20-Poly1305 IETF.
pub const CHACHA20_IETF_POLY1305: u32 = 0;

/// Plaintext payload carried by a header packet: method id + session key.
pub const PACKET_PAYLOAD_SIZE: usize = 4 + KEY_SIZE;

/// Upper bound on a single header packet's declared length.
/// Far above anything this format produces; rejects absurd allocations
/// from corrupted length prefixes before they happen.
pub const MAX_PACKET_SIZE: u32 = 1 << 20;
