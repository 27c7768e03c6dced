//! HashMix PRNG Core
//!
//! Deterministic pseudorandom number generator seeded through hash-based
//! block diffusion.
//!
//! # Architecture
//!
//! - **core**: Byte/word conversion (fixed little-endian)
//! - **mixer**: SHA-256 block ring diffusion used while seeding
//! - **models**: The two-speed multiply/xor state machine
//! - **rng**: Device construction, draws, snapshot, export and checkpoints
//!
//! # Critical Invariants
//!
//! 1. Same `(byte_length, seed)` → same state and same stream, on every platform
//! 2. Lane parity invariants hold after construction and after every draw
//! 3. The saved snapshot never shares storage with the current state
//!
//! The output stream is NOT cryptographically secure.

// Module declarations
pub mod core;
pub mod mixer;
pub mod models;
pub mod rng;

// Re-exports for convenience
pub use models::{Sequence, StateError, StateMachine};
pub use rng::{
    compute_config_hash, format_f64_burst, format_u64_burst, CheckpointError, DeviceCheckpoint,
    DeviceConfig, DeviceError, RandomNumberDevice, StateDump, MASK_F64, MIN_VAL_F64,
};
