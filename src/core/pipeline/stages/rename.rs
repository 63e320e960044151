//! RENAME stage (§4.3).

use crate::core::instruction::NO_REG;
use crate::core::pipeline::Pipeline;
use crate::core::pipeline::traits::StageLatch;

/// Drains RN into RR, allocating a ROB slot and resolving sources via the
/// RMT for each instruction in program order. Acts only if RN is non-empty,
/// RR is empty, and the ROB has at least `|RN|` free slots.
pub fn rename_stage(pipeline: &mut Pipeline) {
    if pipeline.rn.is_empty() || !pipeline.rr.is_empty() {
        return;
    }
    if pipeline.rob.free_slots() < pipeline.rn.len() {
        return;
    }

    let cycle = pipeline.cycle;
    for mut inst in pipeline.rn.drain_all() {
        let tag = pipeline.rob.allocate(inst.seq_no, inst.dest_orig);

        for (src_orig, src, ready) in [
            (inst.src1_orig, &mut inst.src1, &mut inst.src1_ready),
            (inst.src2_orig, &mut inst.src2, &mut inst.src2_ready),
        ] {
            if src_orig == NO_REG {
                *ready = true;
            } else if pipeline.rmt.is_valid(src_orig) {
                let producer = pipeline.rmt.rob_tag(src_orig);
                *src = producer as i64;
                if pipeline.rob.is_dest_ready(producer) {
                    *ready = true;
                }
            } else {
                *ready = true;
            }
        }

        if inst.dest_orig != NO_REG {
            pipeline.rmt.set(inst.dest_orig, tag);
        }
        inst.dest = tag as i64;

        inst.timings.rn.tc = (cycle + 1) - inst.timings.rn.sc;
        inst.timings.rr.sc = cycle + 1;
        pipeline.rr.push_back(inst);
    }
}
