//! Device configuration

use crate::rng::checkpoint::{compute_config_hash, CheckpointError};
use crate::rng::device::{validate_byte_length, DeviceError};
use serde::{Deserialize, Serialize};

/// Parameters a device is built from
///
/// # Example
/// ```
/// use hashmix_prng_core_rs::{DeviceConfig, RandomNumberDevice};
///
/// let config = DeviceConfig {
///     byte_length: 64,
///     seed: vec![0x01, 0x02, 0x03],
/// };
/// let mut device = RandomNumberDevice::from_config(&config).unwrap();
/// let _ = device.next_u64();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Scratch buffer length `N` in bytes (multiple of 32, greater than 32)
    pub byte_length: usize,

    /// Seed bytes XORed into the scratch buffer (may be empty)
    #[serde(default)]
    pub seed: Vec<u8>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            byte_length: 128,
            seed: Vec::new(),
        }
    }
}

impl DeviceConfig {
    /// Check the byte length precondition without building a device
    pub fn validate(&self) -> Result<(), DeviceError> {
        validate_byte_length(self.byte_length)
    }

    /// Lowercase hex SHA256 of this config, as recorded in checkpoints
    pub fn config_hash(&self) -> Result<String, CheckpointError> {
        compute_config_hash(self)
    }
}
