// src/encryptor/mod.rs

//! Write path: the streaming adapter plus a one-shot facade.
//!
//! Core API: `Crypt4ghWriter::new(sink, &writer_secret, &recipient)` for
//! streaming, `encrypt(src, dst, &writer_secret, &recipient)?` for whole
//! files.

pub(crate) mod encrypt;
pub(crate) mod stream;

pub use encrypt::encrypt;
pub use stream::Crypt4ghWriter;
