//! FETCH stage (§4.1).

use crate::common::SimError;
use crate::core::instruction::Instruction;
use crate::core::pipeline::Pipeline;
use crate::core::pipeline::traits::StageLatch;
use crate::trace::TraceSource;

/// Reads up to `width` records from `trace` into DE, iff DE is currently
/// empty and the trace has not already been marked depleted. A record with
/// `op_type` outside `{0, 1, 2}` is fatal.
pub fn fetch_stage(
    pipeline: &mut Pipeline,
    trace: &mut dyn TraceSource,
) -> Result<(), SimError> {
    if pipeline.trace_depleted || !pipeline.de.is_empty() {
        return Ok(());
    }

    let cycle = pipeline.cycle;
    for _ in 0..pipeline.width {
        match trace.next_record()? {
            Some(record) => {
                if !(0..=2).contains(&record.op_type) {
                    return Err(SimError::UnsupportedOpType {
                        seq_no: pipeline.next_seq_no,
                        op_type: record.op_type,
                    });
                }
                let mut inst = Instruction::new(
                    pipeline.next_seq_no,
                    record.op_type,
                    record.dest,
                    record.src1,
                    record.src2,
                );
                inst.timings.fe.sc = cycle;
                inst.timings.fe.tc = 1;
                inst.timings.de.sc = cycle + 1;
                pipeline.next_seq_no += 1;
                pipeline.de.push_back(inst);
            }
            None => {
                pipeline.trace_depleted = true;
                return Ok(());
            }
        }
    }
    Ok(())
}
