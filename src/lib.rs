//! Superscalar Out-of-Order Pipeline Simulator.
//!
//! This crate implements a cycle-accurate simulator of a nine-stage
//! superscalar out-of-order processor pipeline. Given a dynamic instruction
//! trace and three configuration parameters (reorder-buffer capacity,
//! issue-queue capacity, and pipeline width), it models the progression of
//! each instruction through FETCH, DECODE, RENAME, REG_READ, DISPATCH,
//! ISSUE, EXECUTE, WRITEBACK, and RETIRE, honoring data dependencies
//! resolved via register renaming and in-order retirement via a reorder
//! buffer.
//!
//! # Modules
//!
//! * `common`: Shared error type used across the CLI, trace reader, and
//!   pipeline core.
//! * `config`: Validated processor configuration (`rob_size`, `iq_size`,
//!   `width`).
//! * `core`: The pipeline itself — instructions, ROB, RMT, and the nine
//!   stages.
//! * `stats`: Dynamic instruction count, cycle count, and IPC reporting.
//! * `trace`: Line-oriented trace record source and retirement line sink.

/// Shared error type used across the CLI, trace reader, and pipeline core.
pub mod common;

/// Validated processor configuration.
pub mod config;

/// The pipeline core: instructions, ROB, RMT, and the nine stages.
pub mod core;

/// Dynamic instruction count, cycle count, and IPC reporting.
pub mod stats;

/// Line-oriented trace record source and retirement line sink.
pub mod trace;
