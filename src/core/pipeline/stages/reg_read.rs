//! REG_READ stage (§4.4).

use crate::core::instruction::NO_REG;
use crate::core::pipeline::Pipeline;
use crate::core::pipeline::traits::StageLatch;

/// Drains RR into DI, re-checking source readiness against ROB `dest_ready`
/// to pick up writebacks that landed since rename. Acts only if RR is
/// non-empty and DI is empty.
pub fn reg_read_stage(pipeline: &mut Pipeline) {
    if pipeline.rr.is_empty() || !pipeline.di.is_empty() {
        return;
    }
    let cycle = pipeline.cycle;
    for mut inst in pipeline.rr.drain_all() {
        if !inst.src1_ready && inst.src1 != NO_REG && pipeline.rob.is_dest_ready(inst.src1 as usize)
        {
            inst.src1_ready = true;
        }
        if !inst.src2_ready && inst.src2 != NO_REG && pipeline.rob.is_dest_ready(inst.src2 as usize)
        {
            inst.src2_ready = true;
        }
        inst.timings.rr.tc = (cycle + 1) - inst.timings.rr.sc;
        inst.timings.di.sc = cycle + 1;
        pipeline.di.push_back(inst);
    }
}
