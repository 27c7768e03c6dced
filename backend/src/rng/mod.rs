//! Seeded random number device
//!
//! A [`RandomNumberDevice`] derives a [`StateMachine`](crate::StateMachine)
//! from a byte length and a seed, then serves draws and a single
//! save/restore snapshot. Same `(byte_length, seed)` → same stream, on every
//! platform.

mod checkpoint;
mod config;
mod device;
mod export;

pub use checkpoint::{compute_config_hash, CheckpointError, DeviceCheckpoint};
pub use config::DeviceConfig;
pub use device::{DeviceError, RandomNumberDevice, MASK_F64, MIN_VAL_F64, PASSES_PER_SEQUENCE};
pub use export::{format_f64_burst, format_u64_burst, StateDump};
