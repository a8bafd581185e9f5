//! src/encryptor/stream.rs
//! Crypt4GH streaming encryption over any `Write` sink.

use crate::consts::SEGMENT_SIZE;
use crate::error::Crypt4ghError;
use crate::header::{EncryptionParameters, Header, HeaderPacket};
use crate::keys::{PublicKey, SecretKey};
use crate::segment::encrypt_segment;
use std::io::{self, Write};

/// Encrypting adapter over a byte sink.
///
/// Construction generates a fresh session key, seals one header packet per
/// recipient and writes the serialized header before any data. Incoming
/// plaintext fills a fixed 64 KiB buffer; every full buffer leaves as one
/// sealed segment. [`finish`](Crypt4ghWriter::finish) seals the final short
/// segment and hands the sink back — dropping the writer without calling it
/// loses the tail of the stream.
///
/// Byte-at-a-time and bulk writes produce identical containers.
pub struct Crypt4ghWriter<W: Write> {
    inner: W,
    header: Header,
    parameters: EncryptionParameters,
    buffer: Box<[u8; SEGMENT_SIZE]>,
    buffered: usize,
}

impl<W: Write> Crypt4ghWriter<W> {
    /// Single-recipient container.
    pub fn new(inner: W, writer_secret: &SecretKey, recipient: &PublicKey) -> Result<Self, Crypt4ghError> {
        Self::with_recipients(inner, writer_secret, std::slice::from_ref(recipient))
    }

    /// One sealed packet per recipient; any matching private key decrypts.
    pub fn with_recipients(
        mut inner: W,
        writer_secret: &SecretKey,
        recipients: &[PublicKey],
    ) -> Result<Self, Crypt4ghError> {
        let parameters = EncryptionParameters::generate();
        let mut packets = Vec::with_capacity(recipients.len());
        for recipient in recipients {
            packets.push(HeaderPacket::seal(writer_secret, recipient, &parameters)?);
        }
        let header = Header::new(packets)?;
        inner.write_all(&header.serialize())?;

        Ok(Self {
            inner,
            header,
            parameters,
            buffer: Box::new([0u8; SEGMENT_SIZE]),
            buffered: 0,
        })
    }

    /// The header written at construction.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Buffer plaintext, sealing a segment each time the buffer fills.
    pub(crate) fn buffer_bytes(&mut self, mut bytes: &[u8]) -> Result<(), Crypt4ghError> {
        while !bytes.is_empty() {
            let take = (SEGMENT_SIZE - self.buffered).min(bytes.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&bytes[..take]);
            self.buffered += take;
            bytes = &bytes[take..];
            if self.buffered == SEGMENT_SIZE {
                self.seal_buffer()?;
            }
        }
        Ok(())
    }

    fn seal_buffer(&mut self) -> Result<(), Crypt4ghError> {
        let sealed = encrypt_segment(&self.buffer[..self.buffered], &self.parameters)?;
        self.inner.write_all(&sealed)?;
        self.buffered = 0;
        Ok(())
    }

    /// Seal any remaining buffered plaintext as the final, possibly short,
    /// segment; flush the sink and return it.
    ///
    /// A plaintext of exactly k * 64 KiB yields exactly k segments — no
    /// trailing empty record.
    pub fn finish(mut self) -> Result<W, Crypt4ghError> {
        if self.buffered > 0 {
            self.seal_buffer()?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Write for Crypt4ghWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer_bytes(buf)?;
        Ok(buf.len())
    }

    /// Flushes the sink only. Partial segments are sealed exclusively by
    /// [`finish`](Crypt4ghWriter::finish): a short mid-stream segment would
    /// break the fixed-size framing the reader depends on.
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
