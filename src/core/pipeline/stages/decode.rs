//! DECODE stage (§4.2).

use crate::core::pipeline::Pipeline;
use crate::core::pipeline::traits::StageLatch;

/// Drains DE into RN wholesale, iff DE is non-empty and RN is empty.
pub fn decode_stage(pipeline: &mut Pipeline) {
    if pipeline.de.is_empty() || !pipeline.rn.is_empty() {
        return;
    }
    let cycle = pipeline.cycle;
    for mut inst in pipeline.de.drain_all() {
        inst.timings.de.tc = (cycle + 1) - inst.timings.de.sc;
        inst.timings.rn.sc = cycle + 1;
        pipeline.rn.push_back(inst);
    }
}
