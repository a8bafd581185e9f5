//! Small I/O helpers shared by the header and body parsers.

use crate::error::Crypt4ghError;
use std::io::Read;

/// Read exactly `N` bytes into a stack-allocated `[u8; N]`.
///
/// EOF mid-structure is a format error, not an I/O error: the container
/// promised more bytes than the stream holds.
#[inline]
pub(crate) fn read_exact_span<R, const N: usize>(reader: &mut R) -> Result<[u8; N], Crypt4ghError>
where
    R: Read,
{
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => {
            Crypt4ghError::Format("unexpected end of stream".into())
        }
        _ => Crypt4ghError::Io(e),
    })?;
    Ok(buf)
}

/// Read a little-endian u32 — the container's only integer encoding.
#[inline]
pub(crate) fn read_u32_le<R: Read>(reader: &mut R) -> Result<u32, Crypt4ghError> {
    Ok(u32::from_le_bytes(read_exact_span(reader)?))
}

/// Fill `buf` as far as the source allows; short only at end of stream.
///
/// Used by the body reader, where a short final segment is legitimate.
pub(crate) fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, Crypt4ghError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Crypt4ghError::Io(e)),
        }
    }
    Ok(filled)
}
