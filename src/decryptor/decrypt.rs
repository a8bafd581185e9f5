//! src/decryptor/decrypt.rs
//! One-shot decryption facade.

use crate::decryptor::stream::Crypt4ghReader;
use crate::error::Crypt4ghError;
use crate::keys::SecretKey;
use std::io::{Read, Write};

/// Decrypt a whole Crypt4GH container from `input` onto `output`.
///
/// Fails before writing anything when the header yields no packet openable
/// with `reader_secret`. A corrupted or truncated segment aborts with the
/// bytes written so far left in place — cleanup is caller policy.
pub fn decrypt<R, W>(input: R, mut output: W, reader_secret: &SecretKey) -> Result<(), Crypt4ghError>
where
    R: Read,
    W: Write,
{
    let mut reader = Crypt4ghReader::new(input, reader_secret)?;
    while let Some(chunk) = reader.next_chunk()? {
        output.write_all(chunk)?;
    }
    output.flush()?;
    Ok(())
}
