//! Textual state export
//!
//! One record per dump, nine lines:
//!
//! ```text
//! v_state_u8:<2-hex-digit bytes>
//! v_x_mult:<16-hex-digit words>
//! v_a_mult:...
//! v_b_mult:...
//! v_x_xor:...
//! v_a_xor:...
//! v_b_xor:...
//! idx_values_mult:<decimal>
//! idx_values_xor:<decimal>
//! ```
//!
//! Values are comma-separated, hex is uppercase. Rendering happens in
//! memory; writing it anywhere is the caller's job.

use crate::models::{Sequence, StateMachine};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owned copy of a device's scratch buffer and current state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDump {
    pub buffer: Vec<u8>,
    pub machine: StateMachine,
}

impl fmt::Display for StateDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "v_state_u8:{}", join_hex_bytes(&self.buffer))?;
        for sequence in Sequence::ALL {
            writeln!(
                f,
                "{}:{}",
                sequence.label(),
                join_hex_words(self.machine.sequence(sequence))
            )?;
        }
        writeln!(f, "idx_values_mult:{}", self.machine.idx_mult())?;
        writeln!(f, "idx_values_xor:{}", self.machine.idx_xor())
    }
}

/// `v_vec_u64:<words>` line for a burst of 64-bit draws (no line ending)
pub fn format_u64_burst(values: &[u64]) -> String {
    format!("v_vec_u64:{}", join_hex_words(values))
}

/// `v_vec_f64:<doubles>` line for a burst of `[0, 1)` draws (no line ending)
///
/// Each double is printed with exactly 16 decimal places.
pub fn format_f64_burst(values: &[f64]) -> String {
    let joined = values
        .iter()
        .map(|v| format!("{:.16}", v))
        .collect::<Vec<_>>()
        .join(",");
    format!("v_vec_f64:{}", joined)
}

fn join_hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(",")
}

fn join_hex_words(words: &[u64]) -> String {
    words
        .iter()
        .map(|w| format!("{:016X}", w))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_lines() {
        assert_eq!(
            format_u64_burst(&[1, 0xABCD_EF01_2345_6789]),
            "v_vec_u64:0000000000000001,ABCDEF0123456789"
        );
        assert_eq!(
            format_f64_burst(&[0.5, 0.0]),
            "v_vec_f64:0.5000000000000000,0.0000000000000000"
        );
        assert_eq!(format_u64_burst(&[]), "v_vec_u64:");
    }

    #[test]
    fn test_dump_layout() {
        let machine = StateMachine::from_sequences([
            vec![0xFF],
            vec![1],
            vec![1],
            vec![0],
            vec![0],
            vec![1],
        ])
        .unwrap();
        let dump = StateDump {
            buffer: vec![0x0A, 0xB0],
            machine,
        };

        let expected = "v_state_u8:0A,B0\n\
                        v_x_mult:00000000000000FF\n\
                        v_a_mult:0000000000000001\n\
                        v_b_mult:0000000000000001\n\
                        v_x_xor:0000000000000000\n\
                        v_a_xor:0000000000000000\n\
                        v_b_xor:0000000000000001\n\
                        idx_values_mult:0\n\
                        idx_values_xor:0\n";
        assert_eq!(dump.to_string(), expected);
    }
}
