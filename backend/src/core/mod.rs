//! Core primitives shared by the mixer and the generator

pub mod bytes;

pub use bytes::{words_from_le_bytes, words_to_le_bytes, WORD_SIZE};
