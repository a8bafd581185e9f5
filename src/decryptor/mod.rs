// src/decryptor/mod.rs

//! Read path: the streaming adapter plus a one-shot facade.
//!
//! Core API: `Crypt4ghReader::new(source, &reader_secret)` for streaming,
//! `decrypt(src, dst, &reader_secret)?` for whole files.

pub(crate) mod decrypt;
pub(crate) mod stream;

pub use decrypt::decrypt;
pub use stream::Crypt4ghReader;
