//! Checkpoint - Save/Load Device State
//!
//! Captures everything needed to resume a device exactly where it stood:
//! scratch buffer, current state machine and the saved snapshot.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored device emits the same stream as the original
//! - **Config Matching**: a checkpoint only loads with the config it was taken from
//! - **Lane Invariants**: both state machines pass [`StateMachine::validate`]

use crate::core::WORD_SIZE;
use crate::models::{StateError, StateMachine};
use crate::rng::config::DeviceConfig;
use crate::rng::device::{DeviceError, RandomNumberDevice};
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors raised while capturing or restoring a checkpoint
#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config mismatch: expected hash {expected}, found {found}")]
    ConfigMismatch { expected: String, found: String },

    #[error("Buffer holds {actual} bytes, config expects {expected}")]
    BufferLength { expected: usize, actual: usize },

    #[error("{which} state has {actual} lanes, config expects {expected}")]
    LaneCount {
        which: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid {which} state: {source}")]
    InvalidState {
        which: &'static str,
        source: StateError,
    },

    #[error(transparent)]
    InvalidConfig(#[from] DeviceError),
}

/// Complete device state snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCheckpoint {
    /// Config the device was built from
    pub config: DeviceConfig,

    /// SHA256 of the config (for validation)
    pub config_hash: String,

    /// Scratch buffer as left by seeding
    pub buffer: Vec<u8>,

    /// State machine that draws advance
    pub current: StateMachine,

    /// Saved snapshot
    pub previous: StateMachine,
}

impl DeviceCheckpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| {
            CheckpointError::Serialization(format!("Checkpoint serialization failed: {}", e))
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| {
            CheckpointError::Serialization(format!("Checkpoint deserialization failed: {}", e))
        })
    }
}

/// Compute deterministic SHA256 hash of a device config
///
/// Field order of the JSON encoding is fixed by the struct definition, so
/// equal configs always hash equally.
pub fn compute_config_hash(config: &DeviceConfig) -> Result<String, CheckpointError> {
    let json = serde_json::to_vec(config).map_err(|e| {
        CheckpointError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&json);
    Ok(format!("{:x}", hasher.finalize()))
}

impl RandomNumberDevice {
    /// Capture the full device state
    ///
    /// `config` must be the config this device was built from; it is stored
    /// alongside the state so a restore can be checked against it.
    pub fn checkpoint(&self, config: &DeviceConfig) -> Result<DeviceCheckpoint, CheckpointError> {
        Ok(DeviceCheckpoint {
            config: config.clone(),
            config_hash: config.config_hash()?,
            buffer: self.buffer().to_vec(),
            current: self.current().clone(),
            previous: self.previous().clone(),
        })
    }

    /// Rebuild a device from a checkpoint taken with the same config
    ///
    /// # Errors
    /// - [`CheckpointError::InvalidConfig`] if `config` itself is invalid
    /// - [`CheckpointError::ConfigMismatch`] if the checkpoint was taken with
    ///   a different config
    /// - [`CheckpointError::BufferLength`] / [`CheckpointError::LaneCount`]
    ///   if sizes disagree with `config.byte_length`
    /// - [`CheckpointError::InvalidState`] if a state machine is malformed
    pub fn from_checkpoint(
        config: &DeviceConfig,
        checkpoint: DeviceCheckpoint,
    ) -> Result<Self, CheckpointError> {
        config.validate()?;

        let expected = config.config_hash()?;
        for found in [
            checkpoint.config_hash.clone(),
            checkpoint.config.config_hash()?,
        ] {
            if found != expected {
                debug!("Rejected checkpoint: config hash {} != {}", found, expected);
                return Err(CheckpointError::ConfigMismatch { expected, found });
            }
        }

        if checkpoint.buffer.len() != config.byte_length {
            return Err(CheckpointError::BufferLength {
                expected: config.byte_length,
                actual: checkpoint.buffer.len(),
            });
        }

        let lanes = config.byte_length / WORD_SIZE;
        for (which, machine) in [
            ("current", &checkpoint.current),
            ("previous", &checkpoint.previous),
        ] {
            machine
                .validate()
                .map_err(|source| CheckpointError::InvalidState { which, source })?;
            if machine.lanes() != lanes {
                return Err(CheckpointError::LaneCount {
                    which,
                    expected: lanes,
                    actual: machine.lanes(),
                });
            }
        }

        debug!(
            "Restored device from checkpoint: {} bytes, cursors ({}, {})",
            config.byte_length,
            checkpoint.current.idx_mult(),
            checkpoint.current.idx_xor()
        );

        Ok(RandomNumberDevice::from_parts(
            checkpoint.buffer,
            checkpoint.current,
            checkpoint.previous,
        ))
    }
}
