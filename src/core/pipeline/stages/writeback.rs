//! WRITEBACK stage (§4.8).

use crate::core::pipeline::Pipeline;
use crate::core::pipeline::traits::StageLatch;

/// Drains WB fully: sets the ROB slot's `dest_ready` bit and commits the
/// full instruction record into it in the same step, so RETIRE — which
/// runs before WRITEBACK next cycle but after it this one — never observes
/// `dest_ready` set without a record to emit.
pub fn writeback_stage(pipeline: &mut Pipeline) {
    if pipeline.wb.is_empty() {
        return;
    }
    let cycle = pipeline.cycle;
    for mut inst in pipeline.wb.take_all() {
        inst.timings.wb.tc = (cycle + 1) - inst.timings.wb.sc;
        inst.timings.rt.sc = cycle + 1;
        let tag = inst.dest as usize;
        pipeline.rob.set_dest_ready(tag);
        pipeline.rob.writeback(tag, inst);
    }
}
