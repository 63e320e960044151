//! RETIRE stage (§4.9).

use crate::common::SimError;
use crate::core::instruction::NO_REG;
use crate::core::pipeline::Pipeline;
use crate::trace::RetireSink;

/// Pops up to `width` ready ROB-head entries in order, stopping at the
/// first head whose destination is not yet ready. Emits the formatted trace
/// line for each and invalidates its RMT mapping if nothing newer has
/// overwritten it.
pub fn retire_stage(pipeline: &mut Pipeline, sink: &mut dyn RetireSink) -> Result<(), SimError> {
    let cycle = pipeline.cycle;
    for _ in 0..pipeline.width {
        if !pipeline.rob.head_ready() {
            break;
        }
        let head_dest = pipeline.rob.slot(pipeline.rob.head_tag()).dest;
        let head_tag = pipeline.rob.head_tag();
        let (tag, mut inst) = pipeline.rob.pop_head();
        debug_assert_eq!(tag, head_tag);

        inst.timings.rt.tc = (cycle + 1) - inst.timings.rt.sc;
        sink.emit(&inst.format_retire_line())?;

        if head_dest != NO_REG {
            pipeline.rmt.clear_if_matches(head_dest, tag);
        }

        pipeline.stats.dynamic_instruction_count += 1;
    }
    Ok(())
}
