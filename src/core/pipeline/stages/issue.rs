//! ISSUE stage (§4.6).

use crate::core::pipeline::Pipeline;

/// Selects up to `width` oldest ready instructions from the issue queue and
/// moves them to the execute list, preserving the program order of those
/// left behind.
pub fn issue_stage(pipeline: &mut Pipeline) {
    let cycle = pipeline.cycle;
    let width = pipeline.width;
    for mut inst in pipeline.iq.take_ready(width) {
        inst.timings.is.tc = (cycle + 1) - inst.timings.is.sc;
        inst.timings.ex.sc = cycle + 1;
        pipeline.ex.push(inst);
    }
}
