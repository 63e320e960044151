//! DISPATCH stage (§4.5).

use crate::core::pipeline::Pipeline;
use crate::core::pipeline::traits::StageLatch;

/// Drains DI into the issue queue wholesale, iff DI is non-empty and the
/// issue queue has at least `|DI|` free slots.
pub fn dispatch_stage(pipeline: &mut Pipeline) {
    if pipeline.di.is_empty() {
        return;
    }
    let iq_free = pipeline.iq_size - pipeline.iq.len();
    if pipeline.di.len() > iq_free {
        return;
    }
    let cycle = pipeline.cycle;
    for mut inst in pipeline.di.drain_all() {
        inst.timings.di.tc = (cycle + 1) - inst.timings.di.sc;
        inst.timings.is.sc = cycle + 1;
        pipeline.iq.push(inst);
    }
}
