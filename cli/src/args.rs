//! Command-line arguments and request parsing

use crate::error::CliError;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hashmix-prng")]
#[command(about = "Write a deterministic PRNG state/draw trace", long_about = None)]
pub struct Cli {
    /// Scratch buffer length in bytes (multiple of 32, greater than 32)
    #[arg(short = 'n', long = "length-u8", default_value_t = 128)]
    pub length_u8: usize,

    /// Seed as comma-separated hex octets, e.g. 01,02,03 (empty for no seed)
    #[arg(short, long = "seed-u8", default_value = "")]
    pub seed_u8: String,

    /// Draw requests as comma-separated <type>:<count> pairs, e.g. u64:4,f64:2
    #[arg(short, long = "types-of-arr", default_value = "")]
    pub types_of_arr: String,

    /// Output file (default: stdout)
    #[arg(short, long = "file-path")]
    pub file_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    U64,
    F64,
}

/// One burst of draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRequest {
    pub kind: DrawKind,
    pub count: usize,
}

/// Parse `01,02,ff` into bytes. An empty string is an empty seed.
pub fn parse_seed(text: &str) -> Result<Vec<u8>, CliError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|octet| {
            let octet = octet.trim();
            if octet.is_empty() || octet.len() > 2 {
                return Err(CliError::InvalidSeedOctet(octet.to_string()));
            }
            u8::from_str_radix(octet, 16).map_err(|_| CliError::InvalidSeedOctet(octet.to_string()))
        })
        .collect()
}

/// Parse `u64:4,f64:2` into ordered draw requests
pub fn parse_requests(text: &str) -> Result<Vec<DrawRequest>, CliError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|token| {
            let token = token.trim();
            let (kind, count) = token
                .split_once(':')
                .ok_or_else(|| CliError::InvalidRequest(token.to_string()))?;

            let kind = match kind {
                "u64" => DrawKind::U64,
                "f64" => DrawKind::F64,
                other => return Err(CliError::UnknownDrawType(other.to_string())),
            };
            let count = count
                .parse::<usize>()
                .map_err(|_| CliError::InvalidRequest(token.to_string()))?;

            Ok(DrawRequest { kind, count })
        })
        .collect()
}
