//! Trace writer
//!
//! Layout: one state dump, then for every request its burst line followed
//! by a fresh dump.

use crate::args::{DrawKind, DrawRequest};
use crate::error::CliError;
use hashmix_prng_core_rs::{format_f64_burst, format_u64_burst, RandomNumberDevice};
use log::debug;
use std::io::Write;

pub fn write_trace<W: Write>(
    out: &mut W,
    device: &mut RandomNumberDevice,
    requests: &[DrawRequest],
) -> Result<(), CliError> {
    write!(out, "{}", device.export())?;

    for request in requests {
        let line = match request.kind {
            DrawKind::U64 => format_u64_burst(&device.generate_u64(request.count)),
            DrawKind::F64 => format_f64_burst(&device.generate_f64(request.count)),
        };
        writeln!(out, "{}", line)?;
        write!(out, "{}", device.export())?;

        debug!("Wrote {:?} burst of {} draws", request.kind, request.count);
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_layout() {
        let mut device = RandomNumberDevice::new(64, &[1, 2, 3]).unwrap();
        let requests = [
            DrawRequest { kind: DrawKind::U64, count: 4 },
            DrawRequest { kind: DrawKind::F64, count: 2 },
        ];

        let mut out = Vec::new();
        write_trace(&mut out, &mut device, &requests).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // 9 dump lines + (1 burst + 9 dump lines) per request
        assert_eq!(lines.len(), 9 + 2 * 10);
        assert!(lines[0].starts_with("v_state_u8:"));
        assert_eq!(
            lines[9],
            "v_vec_u64:E854A29DBA66930A,5046E844091F9577,C99F1B677F06BA47,8B0F5DCDAA71B1E1"
        );
        assert_eq!(lines[17], "idx_values_mult:4");
        assert_eq!(lines[18], "idx_values_xor:0");
        assert!(lines[19].starts_with("v_vec_f64:"));
        assert_eq!(lines[19].split(',').count(), 2);
        assert_eq!(lines[27], "idx_values_mult:6");
        assert_eq!(lines[28], "idx_values_xor:0");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_trace_without_requests_is_single_dump() {
        let mut device = RandomNumberDevice::new(96, &[]).unwrap();
        let mut out = Vec::new();

        write_trace(&mut out, &mut device, &[]).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), device.export().to_string());
    }
}
