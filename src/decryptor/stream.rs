//! src/decryptor/stream.rs
//! Crypt4GH streaming decryption over any `Read` source.

use crate::consts::{ENCRYPTED_SEGMENT_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::error::Crypt4ghError;
use crate::header::{EncryptionParameters, Header};
use crate::keys::SecretKey;
use crate::segment::decrypt_segment;
use crate::utils::read_full;
use std::fmt;
use std::io::{self, Read};

/// Decrypting adapter over a byte source.
///
/// Construction parses the header and resolves the session parameters with
/// the caller's private key, failing before any body data is served when no
/// packet opens. Reads then decrypt segments in order, one at a time, with
/// bounded memory. A truncated or tampered segment aborts the read — output
/// is never silently cut short.
pub struct Crypt4ghReader<R: Read> {
    inner: R,
    header: Header,
    parameters: EncryptionParameters,
    /// Plaintext of the current segment; served from `position` onwards.
    plaintext: Vec<u8>,
    position: usize,
    exhausted: bool,
}

impl<R: Read> Crypt4ghReader<R> {
    pub fn new(mut inner: R, reader_secret: &SecretKey) -> Result<Self, Crypt4ghError> {
        let header = Header::deserialize(&mut inner)?;
        let parameters = header.decrypt_parameters(reader_secret)?;
        Ok(Self {
            inner,
            header,
            parameters,
            plaintext: Vec::new(),
            position: 0,
            exhausted: false,
        })
    }

    /// The parsed container header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Pull and decrypt the next segment. `Ok(false)` on a clean end of
    /// stream at a segment boundary.
    fn fill_buffer(&mut self) -> Result<bool, Crypt4ghError> {
        let mut segment = vec![0u8; ENCRYPTED_SEGMENT_SIZE];
        let n = read_full(&mut self.inner, &mut segment)?;
        if n == 0 {
            self.exhausted = true;
            return Ok(false);
        }
        if n < NONCE_SIZE + TAG_SIZE {
            return Err(Crypt4ghError::Format(format!(
                "truncated final segment: {n} bytes"
            )));
        }
        if n < ENCRYPTED_SEGMENT_SIZE {
            // short read only legitimate for the very last segment
            self.exhausted = true;
        }
        self.plaintext = decrypt_segment(&segment[..n], &self.parameters)?;
        self.position = 0;
        Ok(true)
    }

    /// The next run of decrypted bytes, or `None` at end of stream.
    /// Serves the one-shot facade without routing errors through `io::Error`.
    pub(crate) fn next_chunk(&mut self) -> Result<Option<&[u8]>, Crypt4ghError> {
        while self.position == self.plaintext.len() {
            if self.exhausted || !self.fill_buffer()? {
                return Ok(None);
            }
        }
        let chunk = &self.plaintext[self.position..];
        self.position = self.plaintext.len();
        Ok(Some(chunk))
    }
}

/// Hand-written so no `R: Debug` bound is needed and buffered plaintext
/// never reaches logs.
impl<R: Read> fmt::Debug for Crypt4ghReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crypt4ghReader")
            .field("header", &self.header)
            .field("buffered", &(self.plaintext.len() - self.position))
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

impl<R: Read> Read for Crypt4ghReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.position == self.plaintext.len() {
            if self.exhausted || !self.fill_buffer()? {
                return Ok(0);
            }
        }
        let n = (self.plaintext.len() - self.position).min(buf.len());
        buf[..n].copy_from_slice(&self.plaintext[self.position..self.position + n]);
        self.position += n;
        Ok(n)
    }
}
