//! The nine pipeline stage implementations, invoked by the cycle driver in
//! reverse order (retire first, fetch last) each cycle — see [`super`].

/// FETCH: reads up to `width` records from the trace into DE.
pub mod fetch;

/// DECODE: drains DE into RN.
pub mod decode;

/// RENAME: allocates ROB slots and resolves sources via the RMT, draining RN into RR.
pub mod rename;

/// REG_READ: re-checks source readiness against the ROB, draining RR into DI.
pub mod reg_read;

/// DISPATCH: drains DI into the issue queue.
pub mod dispatch;

/// ISSUE: selects up to `width` oldest ready instructions from the issue queue.
pub mod issue;

/// EXECUTE: counts down per-instruction latency and broadcasts wakeup on completion.
pub mod execute;

/// WRITEBACK: commits finished instructions into their ROB slots.
pub mod writeback;

/// RETIRE: pops ready ROB-head entries in order and emits the trace line.
pub mod retire;
