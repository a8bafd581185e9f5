// src/header/mod.rs

//! Container header: framing metadata plus the per-recipient packet list.
//!
//! Constructed once, in full, when an output stream opens (fresh session key
//! each time); parsed once, in full, when an input stream opens. Parsing
//! needs no private key — only opening packets does.

pub mod packet;
pub mod params;

pub use packet::HeaderPacket;
pub use params::{DataEncryptionMethod, EncryptionParameters};

use crate::consts::{MAGIC, VERSION};
use crate::error::Crypt4ghError;
use crate::keys::SecretKey;
use crate::utils::{read_exact_span, read_u32_le};
use std::io::Read;

/// An ordered collection of header packets.
#[derive(Debug)]
pub struct Header {
    packets: Vec<HeaderPacket>,
}

impl Header {
    /// A header carries at least one packet; an empty one could never be
    /// decrypted by anybody.
    pub fn new(packets: Vec<HeaderPacket>) -> Result<Self, Crypt4ghError> {
        if packets.is_empty() {
            return Err(Crypt4ghError::Format(
                "header must contain at least one packet".into(),
            ));
        }
        Ok(Self { packets })
    }

    pub fn packets(&self) -> &[HeaderPacket] {
        &self.packets
    }

    /// Wire form: magic, version, packet count, then each packet in order.
    /// Deterministic given the packet list.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16 + 104 * self.packets.len());
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&(self.packets.len() as u32).to_le_bytes());
        for packet in &self.packets {
            out.extend_from_slice(&packet.serialize());
        }
        out
    }

    /// Parse a header from the start of `reader`.
    pub fn deserialize<R: Read>(reader: &mut R) -> Result<Self, Crypt4ghError> {
        let magic: [u8; 8] = read_exact_span(reader)?;
        if &magic != MAGIC {
            return Err(Crypt4ghError::Format(
                "invalid magic (expected 'crypt4gh')".into(),
            ));
        }

        let version = read_u32_le(reader)?;
        if version != VERSION {
            return Err(Crypt4ghError::UnsupportedVersion(version));
        }

        let packet_count = read_u32_le(reader)?;
        if packet_count == 0 {
            return Err(Crypt4ghError::Format("header contains no packets".into()));
        }

        let mut packets = Vec::new();
        for _ in 0..packet_count {
            packets.push(HeaderPacket::deserialize(reader)?);
        }
        Ok(Self { packets })
    }

    /// Try every packet in order against the reader's private key; the first
    /// one that opens wins. This is what makes multi-recipient containers
    /// work: packets addressed to other recipients simply fail to open.
    pub fn decrypt_parameters(
        &self,
        reader_secret: &SecretKey,
    ) -> Result<EncryptionParameters, Crypt4ghError> {
        for packet in &self.packets {
            if let Ok(parameters) = packet.open(reader_secret) {
                return Ok(parameters);
            }
        }
        Err(Crypt4ghError::Security(
            "no usable header packet for the supplied private key".into(),
        ))
    }
}
