//! src/encryptor/encrypt.rs
//! One-shot encryption facade.

use crate::consts::SEGMENT_SIZE;
use crate::encryptor::stream::Crypt4ghWriter;
use crate::error::Crypt4ghError;
use crate::keys::{PublicKey, SecretKey};
use std::io::{Read, Write};

/// Encrypt everything from `input` into a Crypt4GH container on `output`.
///
/// Equivalent to driving a [`Crypt4ghWriter`] by hand, with `finish` called
/// for you. Cleanup of a partially written destination on failure is caller
/// policy — partial output must not be trusted or resumed.
pub fn encrypt<R, W>(
    mut input: R,
    output: W,
    writer_secret: &SecretKey,
    recipient: &PublicKey,
) -> Result<(), Crypt4ghError>
where
    R: Read,
    W: Write,
{
    let mut writer = Crypt4ghWriter::new(output, writer_secret, recipient)?;

    let mut chunk = vec![0u8; SEGMENT_SIZE];
    loop {
        let n = match input.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Crypt4ghError::Io(e)),
        };
        writer.buffer_bytes(&chunk[..n])?;
    }

    writer.finish()?;
    Ok(())
}
