//! Error types for the pipeline simulator.
//!
//! Every fatal condition the simulator can encounter — bad CLI arguments, an
//! unreadable trace file, a malformed trace line, or a trace record outside
//! the modeled operation set — is collected into a single `SimError` so that
//! `main` has one place to turn a failure into a diagnostic and an exit code.

use std::fmt;
use std::io;

/// Unified error type for the CLI, trace reader, and pipeline core.
#[derive(Debug)]
pub enum SimError {
    /// A configuration value (`rob_size`, `iq_size`, or `width`) was zero.
    InvalidConfig { field: &'static str, value: i64 },
    /// The trace file could not be opened.
    FileOpen { path: String, source: io::Error },
    /// A trace line did not have the expected five whitespace-separated fields,
    /// or one of them failed to parse as an integer.
    TraceParse { line_no: usize, line: String },
    /// A trace record's `op_type` was outside `{0, 1, 2}`.
    UnsupportedOpType { seq_no: u64, op_type: i64 },
    /// Writing a retirement line or the summary to the output sink failed.
    Io(io::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidConfig { field, value } => {
                write!(f, "invalid configuration: {field} must be > 0, got {value}")
            }
            SimError::FileOpen { path, source } => {
                write!(f, "failed to open trace file '{path}': {source}")
            }
            SimError::TraceParse { line_no, line } => {
                write!(f, "malformed trace record at line {line_no}: '{line}'")
            }
            SimError::UnsupportedOpType { seq_no, op_type } => {
                write!(
                    f,
                    "unsupported op_type {op_type} on instruction seq_no={seq_no} (expected 0, 1, or 2)"
                )
            }
            SimError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::FileOpen { source, .. } => Some(source),
            SimError::Io(err) => Some(err),
            _ => None,
        }
    }
}
