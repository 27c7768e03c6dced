//! CLI error type

use hashmix_prng_core_rs::DeviceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid seed octet '{0}': expected a hex byte such as 0A")]
    InvalidSeedOctet(String),

    #[error("Invalid draw request '{0}': expected <type>:<count>, e.g. u64:4")]
    InvalidRequest(String),

    #[error("Unknown draw type '{0}': expected u64 or f64")]
    UnknownDrawType(String),

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
