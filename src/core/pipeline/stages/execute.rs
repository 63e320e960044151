//! EXECUTE stage (§4.7).

use crate::core::pipeline::hazards;
use crate::core::pipeline::Pipeline;

/// Counts down per-instruction execute latency. An occupant that reaches its
/// `ex_lat` this cycle completes: its own record is marked ready, a wakeup
/// is broadcast to IQ/DI/RR, and it moves to WB. Others have `ex_tc`
/// incremented and stay put.
///
/// The ROB slot's `dest_ready` bit is *not* set here, even though the
/// instruction has logically finished: RETIRE runs before WRITEBACK every
/// cycle (§4), so setting it here would make a ROB head look ready for
/// retirement one cycle before WRITEBACK has written the record RETIRE
/// needs to emit. It is set in `writeback_stage` instead, atomically with
/// the record itself.
pub fn execute_stage(pipeline: &mut Pipeline) {
    let cycle = pipeline.cycle;
    let mut finished = Vec::new();
    let mut still_running = Vec::new();

    for mut inst in pipeline.ex.take_all() {
        if inst.ex_tc == inst.ex_lat {
            inst.dest_ready = true;
            inst.timings.wb.sc = cycle + 1;
            finished.push(inst);
        } else {
            inst.ex_tc += 1;
            still_running.push(inst);
        }
    }

    for inst in still_running {
        pipeline.ex.push(inst);
    }

    for inst in &finished {
        let tag = inst.dest;
        hazards::broadcast(
            tag,
            pipeline
                .iq
                .iter_mut()
                .chain(pipeline.di.iter_mut())
                .chain(pipeline.rr.iter_mut()),
        );
    }

    for inst in finished {
        pipeline.wb.push(inst);
    }
}
