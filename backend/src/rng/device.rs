//! Seeding and generation
//!
//! # Seeding
//!
//! 1. Allocate a zeroed scratch buffer of `N` bytes
//! 2. XOR seed byte `i` into `buffer[i % N]`
//! 3. For each sequence in [`Sequence::ALL`]: run [`PASSES_PER_SEQUENCE`]
//!    mixing passes over the buffer (never reset in between), then decode the
//!    buffer as `N / 8` little-endian words into that sequence
//! 4. Force the lane parity invariants
//! 5. `previous = current`
//!
//! # Generation
//!
//! Every draw advances `current`. `previous` only changes through
//! [`RandomNumberDevice::save_state`].

use crate::core::{words_from_le_bytes, WORD_SIZE};
use crate::mixer::{mix_pass, BLOCK_SIZE};
use crate::models::{Sequence, StateMachine};
use crate::rng::config::DeviceConfig;
use crate::rng::export::StateDump;
use log::debug;
use rand_core::{impls, RngCore};
use thiserror::Error;

/// Mixing passes run before each sequence is extracted
pub const PASSES_PER_SEQUENCE: usize = 2;

/// Low 53 bits of a draw, used as the mantissa of an `f64`
pub const MASK_F64: u64 = 0x1F_FFFF_FFFF_FFFF;

/// `2^-53`
pub const MIN_VAL_F64: f64 = 1.0 / (1u64 << 53) as f64;

/// Errors that can occur while building a device
#[derive(Debug, Error, PartialEq)]
pub enum DeviceError {
    #[error("Invalid state size: {byte_length} bytes (must be a multiple of 32 and greater than 32)")]
    InvalidStateSize { byte_length: usize },
}

pub(crate) fn validate_byte_length(byte_length: usize) -> Result<(), DeviceError> {
    if byte_length % BLOCK_SIZE != 0 || byte_length <= BLOCK_SIZE {
        return Err(DeviceError::InvalidStateSize { byte_length });
    }
    Ok(())
}

/// Deterministic generator seeded through hash-based block mixing
///
/// Owns the scratch buffer, the `current` state machine and an independent
/// `previous` snapshot. Not internally synchronized; use one device per
/// thread or guard it externally.
///
/// # Example
/// ```
/// use hashmix_prng_core_rs::RandomNumberDevice;
///
/// let mut device = RandomNumberDevice::new(64, &[0x01, 0x02, 0x03]).unwrap();
/// assert_eq!(device.next_u64(), 0xE854_A29D_BA66_930A);
///
/// let x = device.next_f64();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RandomNumberDevice {
    buffer: Vec<u8>,
    current: StateMachine,
    previous: StateMachine,
}

impl RandomNumberDevice {
    /// Build a device from a byte length `N` and seed bytes
    ///
    /// # Errors
    /// Returns [`DeviceError::InvalidStateSize`] unless `N % 32 == 0` and
    /// `N > 32`.
    pub fn new(byte_length: usize, seed: &[u8]) -> Result<Self, DeviceError> {
        validate_byte_length(byte_length)?;

        let mut buffer = vec![0u8; byte_length];
        for (i, byte) in seed.iter().enumerate() {
            buffer[i % byte_length] ^= byte;
        }

        let block_count = byte_length / BLOCK_SIZE;
        let mut current = StateMachine::zeroed(byte_length / WORD_SIZE);

        for sequence in Sequence::ALL {
            for _ in 0..PASSES_PER_SEQUENCE {
                mix_pass(&mut buffer, block_count);
            }
            current
                .sequence_mut(sequence)
                .copy_from_slice(&words_from_le_bytes(&buffer));
        }

        current.enforce_invariants();
        let previous = current.clone();

        debug!(
            "Seeded device: {} bytes, {} blocks, {} lanes, {} seed bytes",
            byte_length,
            block_count,
            current.lanes(),
            seed.len()
        );

        Ok(Self {
            buffer,
            current,
            previous,
        })
    }

    /// Build a device from a [`DeviceConfig`]
    pub fn from_config(config: &DeviceConfig) -> Result<Self, DeviceError> {
        Self::new(config.byte_length, &config.seed)
    }

    /// Reassemble a device from already-validated parts
    pub(crate) fn from_parts(
        buffer: Vec<u8>,
        current: StateMachine,
        previous: StateMachine,
    ) -> Self {
        Self {
            buffer,
            current,
            previous,
        }
    }

    /// Scratch buffer length `N`
    pub fn byte_length(&self) -> usize {
        self.buffer.len()
    }

    /// Lane count `M = N / 8`
    pub fn lane_count(&self) -> usize {
        self.current.lanes()
    }

    /// Scratch buffer as left by seeding
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// State machine that draws advance
    pub fn current(&self) -> &StateMachine {
        &self.current
    }

    /// Saved snapshot
    pub fn previous(&self) -> &StateMachine {
        &self.previous
    }

    /// Next 64-bit word
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.current.next_word()
    }

    /// Next double in `[0, 1)` with 53 bits of precision
    ///
    /// The draw is masked to its low 53 bits before scaling by `2^-53`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        MIN_VAL_F64 * (self.next_u64() & MASK_F64) as f64
    }

    /// `n` successive [`next_u64`](Self::next_u64) draws, in call order
    pub fn generate_u64(&mut self, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.next_u64()).collect()
    }

    /// `n` successive [`next_f64`](Self::next_f64) draws, in call order
    pub fn generate_f64(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_f64()).collect()
    }

    /// Fill `dest` with successive 64-bit draws
    pub fn fill_u64(&mut self, dest: &mut [u64]) {
        for slot in dest.iter_mut() {
            *slot = self.next_u64();
        }
    }

    /// Fill `dest` with successive `[0, 1)` draws
    pub fn fill_f64(&mut self, dest: &mut [f64]) {
        for slot in dest.iter_mut() {
            *slot = self.next_f64();
        }
    }

    /// `previous := current`
    pub fn save_state(&mut self) {
        self.previous.copy_from(&self.current);
    }

    /// `current := previous`; `previous` is left unchanged
    pub fn restore_state(&mut self) {
        self.current.copy_from(&self.previous);
    }

    /// Owned copy of the buffer and the current state, for dumping
    pub fn export(&self) -> StateDump {
        StateDump {
            buffer: self.buffer.clone(),
            machine: self.current.clone(),
        }
    }
}

impl RngCore for RandomNumberDevice {
    fn next_u32(&mut self) -> u32 {
        (RandomNumberDevice::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        RandomNumberDevice::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
