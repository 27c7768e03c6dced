//! Hash-based diffusion over a ring of fixed-size blocks
//!
//! The mixer has no state of its own. It operates on a caller-owned byte
//! buffer that is logically partitioned into `buffer.len() / BLOCK_SIZE`
//! blocks forming a ring: block `i` is paired with block `(i + 1) % count`.
//!
//! SHA-256 is used here purely as a diffusion primitive while seeding the
//! generator. It does not make the output stream cryptographically secure.

mod block;

pub use block::{blocks_equal, mix_pair, mix_pass, Block, BLOCK_SIZE, CONSTANT_VECTOR};
