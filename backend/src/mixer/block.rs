//! Pairwise block mixing
//!
//! # Algorithm
//!
//! For a pair `(b0, b1)`:
//! 1. If the blocks are byte-equal, XOR [`CONSTANT_VECTOR`] into `b1`
//! 2. `h0 = SHA256(b0)`, `h1 = SHA256(b1)`
//! 3. `b1 ^= h0 ^ h1 ^ b0`
//!
//! Step 1 matters on an all-zero buffer: without it `h0 == h1` and
//! `b0 == b1 == 0`, so every block would stay zero forever.

use sha2::{Digest, Sha256};

/// Size of one block in bytes (matches the SHA-256 digest size)
pub const BLOCK_SIZE: usize = 32;

/// One block of the ring
pub type Block = [u8; BLOCK_SIZE];

/// Tie-breaking perturbation `[1, 2, ..., 32]`
pub const CONSTANT_VECTOR: Block = constant_vector();

const fn constant_vector() -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    let mut i = 0;
    while i < BLOCK_SIZE {
        block[i] = (i + 1) as u8;
        i += 1;
    }
    block
}

/// Run one forward mixing pass over the whole ring
///
/// Applies [`mix_pair`] to `(i, (i + 1) % block_count)` for `i` in
/// `0..block_count`, in increasing order. Block `i + 1` is written by step
/// `i` and read again as the first block of step `i + 1`, so influence
/// travels once around the ring, closing on `(block_count - 1, 0)`.
///
/// With `block_count == 1` the only pair is `(0, 0)`. The block always
/// compares equal to itself, so it becomes
/// `CONSTANT_VECTOR ^ SHA256(b) ^ SHA256(b ^ CONSTANT_VECTOR)`. Devices
/// never run a single-block pass (`N > 32` gives at least two blocks).
///
/// # Panics
/// Panics if the buffer is shorter than `block_count * BLOCK_SIZE`.
///
/// # Example
/// ```
/// use hashmix_prng_core_rs::mixer::{mix_pass, BLOCK_SIZE};
///
/// let mut buffer = vec![0u8; 2 * BLOCK_SIZE];
/// mix_pass(&mut buffer, 2);
/// assert!(buffer.iter().any(|&b| b != 0));
/// ```
pub fn mix_pass(buffer: &mut [u8], block_count: usize) {
    log::trace!("Mixing pass over {} blocks", block_count);
    for i in 0..block_count {
        mix_pair(buffer, i, (i + 1) % block_count);
    }
}

/// Mix block `idx1` with block `idx0`
///
/// Only block `idx1` is written. Block `idx0` is read as-is.
pub fn mix_pair(buffer: &mut [u8], idx0: usize, idx1: usize) {
    let b0 = read_block(buffer, idx0);
    let mut b1 = read_block(buffer, idx1);

    if blocks_equal(&b0, &b1) {
        xor_into(&mut b1, &CONSTANT_VECTOR);
    }

    let h0 = Sha256::digest(b0);
    let h1 = Sha256::digest(b1);

    for j in 0..BLOCK_SIZE {
        b1[j] ^= h0[j] ^ h1[j] ^ b0[j];
    }

    buffer[block_range(idx1)].copy_from_slice(&b1);
}

/// Exact byte comparison of two blocks
pub fn blocks_equal(b0: &[u8], b1: &[u8]) -> bool {
    b0 == b1
}

fn block_range(index: usize) -> std::ops::Range<usize> {
    index * BLOCK_SIZE..(index + 1) * BLOCK_SIZE
}

fn read_block(buffer: &[u8], index: usize) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&buffer[block_range(index)]);
    block
}

fn xor_into(target: &mut Block, other: &Block) {
    for (t, o) in target.iter_mut().zip(other.iter()) {
        *t ^= o;
    }
}
