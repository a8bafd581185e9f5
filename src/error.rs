//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, Crypt4ghError>`](Crypt4ghError).

use thiserror::Error;

/// The error type for all Crypt4GH operations.
///
/// Cryptographic and format errors are surfaced immediately to the caller of
/// the operation that discovered them; nothing is downgraded or retried.
#[derive(Error, Debug)]
pub enum Crypt4ghError {
    /// I/O failure on the underlying sink or source.
    ///
    /// Propagated unchanged — retry policy, if any, belongs to the caller.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed container structure.
    ///
    /// Covers a bad magic token, a truncated stream, and invalid
    /// length-prefixed data. Always fatal to the current parse.
    #[error("Format error: {0}")]
    Format(String),

    /// Container version this implementation does not read.
    #[error("Unsupported version: {0}")]
    UnsupportedVersion(u32),

    /// Key-level failure.
    ///
    /// Covers a header with no packet openable by the supplied private key,
    /// key-derivation failures, and degenerate key exchange results.
    /// Fatal to stream construction.
    #[error("Security error: {0}")]
    Security(String),

    /// AEAD tag verification failure (tampered data or the wrong key).
    ///
    /// Non-fatal for a single header packet — the header decoder tries the
    /// next one. Fatal for a body segment: the read aborts rather than
    /// returning unauthenticated plaintext.
    #[error("Authentication error: {0}")]
    Authentication(String),
}

// `Write`/`Read` impls on the stream adapters must speak `io::Error`;
// crypto failures ride inside and are recovered by the one-shot facades.
impl From<Crypt4ghError> for std::io::Error {
    fn from(err: Crypt4ghError) -> Self {
        match err {
            Crypt4ghError::Io(e) => e,
            other => std::io::Error::new(std::io::ErrorKind::Other, other),
        }
    }
}
