//! src/crypto/rng.rs
//! Secure randomness for nonces and keys.

use rand::rngs::OsRng;
use rand::RngCore;

/// Fresh random byte array of any fixed size.
///
/// Every AEAD nonce in this crate comes from here; with 96-bit nonces and
/// per-stream session keys the collision probability within one stream is
/// negligible.
#[inline]
pub fn random_span<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_distinct() {
        let a: [u8; 12] = random_span();
        let b: [u8; 12] = random_span();
        assert_ne!(a, b);
    }
}
