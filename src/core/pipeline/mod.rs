//! The superscalar out-of-order pipeline: nine stages driven in reverse
//! order each cycle, plus the circular reorder buffer and register map
//! table that tie them together.
//!
//! [`Pipeline::run`] is the cycle driver described in §4 and §5 of the
//! specification: a post-test loop that calls RETIRE, WRITEBACK, EXECUTE,
//! ISSUE, DISPATCH, REG_READ, RENAME, DECODE, FETCH in that order every
//! cycle, so each stage observes the previous cycle's output of the stage
//! after it before that stage has a chance to overwrite it this cycle.

use crate::common::SimError;
use crate::config::PipelineConfig;
use crate::core::rmt::Rmt;
use crate::core::rob::Rob;
use crate::stats::SimStats;
use crate::trace::{RetireSink, TraceSource};

/// Wakeup/bypass broadcast: completing instructions wake dependents sitting
/// in IQ, DI, or RR by ROB-tag comparison.
pub mod hazards;

/// Inter-stage latches: FIFOs for DE/RN/RR/DI, an age-ordered issue queue,
/// and scratch lists for EX/WB.
pub mod latches;

/// The nine stage implementations.
pub mod stages;

/// The [`StageLatch`] occupancy interface shared by every latch type.
pub mod traits;

use latches::{ExecuteList, FifoLatch, IssueQueue};
use traits::StageLatch;

/// The pipeline core: all stage latches, the ROB, the RMT, and the cycle
/// counter and depletion flags the termination condition depends on.
pub struct Pipeline {
    pub(crate) de: FifoLatch,
    pub(crate) rn: FifoLatch,
    pub(crate) rr: FifoLatch,
    pub(crate) di: FifoLatch,
    pub(crate) iq: IssueQueue,
    pub(crate) ex: ExecuteList,
    pub(crate) wb: ExecuteList,

    pub(crate) rob: Rob,
    pub(crate) rmt: Rmt,

    pub(crate) iq_size: usize,
    pub(crate) width: usize,

    pub(crate) cycle: u64,
    pub(crate) next_seq_no: u64,
    pub(crate) trace_depleted: bool,

    pub stats: SimStats,

    /// When set, one diagnostic line of per-latch occupancy is printed to
    /// stderr at the end of every cycle.
    pub verbose: bool,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Pipeline {
            de: FifoLatch::new(),
            rn: FifoLatch::new(),
            rr: FifoLatch::new(),
            di: FifoLatch::new(),
            iq: IssueQueue::new(),
            ex: ExecuteList::new(),
            wb: ExecuteList::new(),
            rob: Rob::new(config.rob_size),
            rmt: Rmt::new(),
            iq_size: config.iq_size,
            width: config.width,
            cycle: 0,
            next_seq_no: 0,
            trace_depleted: false,
            stats: SimStats::new(),
            verbose: false,
        }
    }

    /// Prints one line of per-latch occupancy to stderr, used by `--verbose`.
    fn log_occupancy(&self) {
        eprintln!(
            "[cycle {}] DE={} RN={} RR={} DI={} IQ={} EX={} WB={} ROB={}/{}",
            self.cycle,
            self.de.len(),
            self.rn.len(),
            self.rr.len(),
            self.di.len(),
            self.iq.len(),
            self.ex.len(),
            self.wb.len(),
            self.rob.len(),
            self.rob.capacity(),
        );
    }

    /// Whether every latch upstream of and including the ROB holds no
    /// instructions. The ROB being empty implies RR/DI/IQ/EX/WB are also
    /// empty (every occupant of those has already been allocated a ROB
    /// slot), so only DE and RN need checking in addition (§4.9, §8).
    fn pipeline_drained(&self) -> bool {
        self.rob.is_empty() && self.de.is_empty() && self.rn.is_empty()
    }

    /// Runs the cycle driver to completion: a post-test loop that executes
    /// at least one cycle and stops once the trace is depleted and the
    /// pipeline has fully drained.
    pub fn run(
        &mut self,
        trace: &mut dyn TraceSource,
        sink: &mut dyn RetireSink,
    ) -> Result<(), SimError> {
        loop {
            stages::retire::retire_stage(self, sink)?;
            stages::writeback::writeback_stage(self);
            stages::execute::execute_stage(self);
            stages::issue::issue_stage(self);
            stages::dispatch::dispatch_stage(self);
            stages::reg_read::reg_read_stage(self);
            stages::rename::rename_stage(self);
            stages::decode::decode_stage(self);
            stages::fetch::fetch_stage(self, trace)?;

            if self.verbose {
                self.log_occupancy();
            }
            self.cycle += 1;
            if self.trace_depleted && self.pipeline_drained() {
                break;
            }
        }
        self.stats.cycles = self.cycle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{RawRecord, VecSink, VecTraceSource};

    fn run_trace(records: Vec<RawRecord>, config: PipelineConfig) -> (Pipeline, VecSink) {
        let mut pipeline = Pipeline::new(config);
        let mut trace = VecTraceSource::new(records);
        let mut sink = VecSink::default();
        pipeline.run(&mut trace, &mut sink).unwrap();
        (pipeline, sink)
    }

    #[test]
    fn scenario_one_single_independent_add() {
        let config = PipelineConfig::new(8, 8, 1).unwrap();
        let (pipeline, sink) = run_trace(
            vec![RawRecord {
                op_type: 0,
                dest: 1,
                src1: -1,
                src2: -1,
            }],
            config,
        );
        assert_eq!(pipeline.cycle, 9);
        assert_eq!(sink.lines.len(), 1);
        assert!(sink.lines[0].contains("FE{0,1}"));
        assert!(sink.lines[0].contains("DE{1,1}"));
        assert!(sink.lines[0].contains("RN{2,1}"));
        assert!(sink.lines[0].contains("RR{3,1}"));
        assert!(sink.lines[0].contains("DI{4,1}"));
        assert!(sink.lines[0].contains("IS{5,1}"));
        assert!(sink.lines[0].contains("EX{6,1}"));
        assert!(sink.lines[0].contains("WB{7,1}"));
        assert!(sink.lines[0].contains("RT{8,1}"));
    }

    #[test]
    fn scenario_two_independent_ops_width_two() {
        let config = PipelineConfig::new(8, 8, 2).unwrap();
        let (pipeline, sink) = run_trace(
            vec![
                RawRecord {
                    op_type: 0,
                    dest: 1,
                    src1: -1,
                    src2: -1,
                },
                RawRecord {
                    op_type: 0,
                    dest: 2,
                    src1: -1,
                    src2: -1,
                },
            ],
            config,
        );
        assert_eq!(pipeline.stats.dynamic_instruction_count, 2);
        assert_eq!(pipeline.cycle, 9);
        assert_eq!(sink.lines.len(), 2);
    }

    #[test]
    fn raw_chain_second_waits_for_first_wakeup() {
        let config = PipelineConfig::new(8, 8, 1).unwrap();
        let (_, sink) = run_trace(
            vec![
                RawRecord {
                    op_type: 0,
                    dest: 5,
                    src1: -1,
                    src2: -1,
                },
                RawRecord {
                    op_type: 0,
                    dest: 6,
                    src1: 5,
                    src2: -1,
                },
            ],
            config,
        );
        assert_eq!(sink.lines.len(), 2);
        assert!(sink.lines[1].contains("IS{6,1}"));
        assert!(sink.lines[1].contains("EX{7,1}"));
    }

    #[test]
    fn rob_full_back_pressure_does_not_violate_capacity() {
        let config = PipelineConfig::new(2, 8, 1).unwrap();
        let records = (0..4)
            .map(|i| RawRecord {
                op_type: 2,
                dest: i,
                src1: -1,
                src2: -1,
            })
            .collect();
        let (pipeline, sink) = run_trace(records, config);
        assert_eq!(sink.lines.len(), 4);
        assert_eq!(pipeline.stats.dynamic_instruction_count, 4);
    }

    #[test]
    fn rmt_overwrite_no_crosstalk() {
        let config = PipelineConfig::new(8, 8, 1).unwrap();
        let (_, sink) = run_trace(
            vec![
                RawRecord {
                    op_type: 0,
                    dest: 5,
                    src1: -1,
                    src2: -1,
                },
                RawRecord {
                    op_type: 0,
                    dest: 5,
                    src1: -1,
                    src2: -1,
                },
                RawRecord {
                    op_type: 0,
                    dest: 9,
                    src1: 5,
                    src2: -1,
                },
            ],
            config,
        );
        assert_eq!(sink.lines.len(), 3);
    }

    #[test]
    fn determinism_across_identical_runs() {
        let config = PipelineConfig::new(4, 4, 2).unwrap();
        let records = vec![
            RawRecord {
                op_type: 1,
                dest: 1,
                src1: -1,
                src2: -1,
            },
            RawRecord {
                op_type: 2,
                dest: 2,
                src1: 1,
                src2: -1,
            },
        ];
        let (p1, s1) = run_trace(records.clone(), config);
        let (p2, s2) = run_trace(records, config);
        assert_eq!(p1.cycle, p2.cycle);
        assert_eq!(s1.lines, s2.lines);
    }
}
