//! The pipeline core: dynamic instruction records, the reorder buffer, the
//! register map table, and the nine-stage pipeline that ties them together.

/// Dynamic instruction records and per-stage timing pairs.
pub mod instruction;

/// The superscalar out-of-order pipeline and its stage implementations.
pub mod pipeline;

/// Register map table: architectural register to in-flight ROB tag.
pub mod rmt;

/// Reorder buffer: circular, fixed-capacity, FIFO between rename and retire.
pub mod rob;

pub use pipeline::Pipeline;
