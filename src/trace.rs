//! Trace source: a line-oriented reader of decoded trace records.
//!
//! The pipeline core only depends on the [`TraceSource`] trait, not on file
//! I/O directly, so it can be driven from a real file in `main` or from an
//! in-memory `Vec` in tests.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::common::SimError;

/// A decoded trace record: operation type and the three register fields.
/// The program counter is read and discarded per §6.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub op_type: i64,
    pub dest: i64,
    pub src1: i64,
    pub src2: i64,
}

/// A source the fetch stage can pull decoded trace records from, one at a
/// time, until exhausted.
pub trait TraceSource {
    /// Returns the next record, or `Ok(None)` once the trace is depleted.
    fn next_record(&mut self) -> Result<Option<RawRecord>, SimError>;
}

/// Reads trace records from a file, one whitespace-separated line at a time,
/// skipping blank lines.
pub struct FileTraceSource {
    reader: BufReader<File>,
    line_no: usize,
}

impl FileTraceSource {
    pub fn open(path: &str) -> Result<Self, SimError> {
        let file = File::open(path).map_err(|source| SimError::FileOpen {
            path: path.to_string(),
            source,
        })?;
        Ok(FileTraceSource {
            reader: BufReader::new(file),
            line_no: 0,
        })
    }
}

impl TraceSource for FileTraceSource {
    fn next_record(&mut self) -> Result<Option<RawRecord>, SimError> {
        loop {
            let mut line = String::new();
            let bytes_read = self
                .reader
                .read_line(&mut line)
                .map_err(|source| SimError::FileOpen {
                    path: "<trace>".to_string(),
                    source,
                })?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return parse_line(trimmed, self.line_no).map(Some);
        }
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<RawRecord, SimError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let malformed = || SimError::TraceParse {
        line_no,
        line: line.to_string(),
    };
    if fields.len() != 5 {
        return Err(malformed());
    }
    // fields[0] is the pc, read and discarded.
    let op_type: i64 = fields[1].parse().map_err(|_| malformed())?;
    let dest: i64 = fields[2].parse().map_err(|_| malformed())?;
    let src1: i64 = fields[3].parse().map_err(|_| malformed())?;
    let src2: i64 = fields[4].parse().map_err(|_| malformed())?;
    Ok(RawRecord {
        op_type,
        dest,
        src1,
        src2,
    })
}

/// An in-memory trace source, used by tests and fuzzers.
pub struct VecTraceSource {
    records: std::collections::VecDeque<RawRecord>,
}

impl VecTraceSource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        VecTraceSource {
            records: records.into(),
        }
    }
}

impl TraceSource for VecTraceSource {
    fn next_record(&mut self) -> Result<Option<RawRecord>, SimError> {
        Ok(self.records.pop_front())
    }
}

/// A sink the retire stage writes one formatted trace line to per retired
/// instruction. Implemented by `io::Write` adapters in `main` and by a
/// `Vec<String>` collector in tests.
pub trait RetireSink {
    fn emit(&mut self, line: &str) -> Result<(), SimError>;
}

impl<W: io::Write> RetireSink for W {
    fn emit(&mut self, line: &str) -> Result<(), SimError> {
        writeln!(self, "{line}").map_err(SimError::Io)
    }
}

/// Collects emitted lines in memory, used by tests that assert on output.
#[derive(Default)]
pub struct VecSink {
    pub lines: Vec<String>,
}

impl RetireSink for VecSink {
    fn emit(&mut self, line: &str) -> Result<(), SimError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let rec = parse_line("0x0 0 1 -1 -1", 1).unwrap();
        assert_eq!(
            rec,
            RawRecord {
                op_type: 0,
                dest: 1,
                src1: -1,
                src2: -1,
            }
        );
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(parse_line("0x0 0 1 -1", 1).is_err());
    }

    #[test]
    fn rejects_non_numeric_field() {
        assert!(parse_line("0x0 x 1 -1 -1", 1).is_err());
    }
}
