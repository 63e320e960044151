//! Dynamic instruction records and per-stage timing.

/// Sentinel used for "no such operand" in both original and renamed register fields.
pub const NO_REG: i64 = -1;

/// Per-operation-type execution latency, indexed by `op_type`.
pub const EXEC_LATENCY: [u64; 3] = [1, 2, 5];

/// A (start-cycle, total-cycles) pair recorded when an instruction leaves a stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageTiming {
    /// Cycle in which the instruction entered this stage.
    pub sc: u64,
    /// Number of cycles spent in this stage.
    pub tc: u64,
}

/// Timing record for all nine pipeline stages, in traversal order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timings {
    pub fe: StageTiming,
    pub de: StageTiming,
    pub rn: StageTiming,
    pub rr: StageTiming,
    pub di: StageTiming,
    pub is: StageTiming,
    pub ex: StageTiming,
    pub wb: StageTiming,
    pub rt: StageTiming,
}

/// A dynamic instruction as it flows through the pipeline.
///
/// `dest`, `src1`, `src2` start out equal to their `_orig` counterparts and are
/// overwritten with ROB tags by the rename stage; the `_orig` fields are kept
/// unchanged for the retirement trace line.
#[derive(Clone, Debug)]
pub struct Instruction {
    pub seq_no: u64,
    pub op_type: i64,
    pub ex_lat: u64,

    pub dest_orig: i64,
    pub src1_orig: i64,
    pub src2_orig: i64,

    /// ROB tag once renamed; equal to `dest_orig` before rename runs.
    pub dest: i64,
    /// ROB tag of the producer once renamed; equal to `src1_orig` before rename.
    pub src1: i64,
    pub src2: i64,

    pub dest_ready: bool,
    pub src1_ready: bool,
    pub src2_ready: bool,

    /// Cycles spent in EXECUTE so far; starts at 1 on entry (§4.7).
    pub ex_tc: u64,

    pub timings: Timings,
}

impl Instruction {
    /// Builds a freshly fetched instruction. Renamed fields mirror the
    /// originals and ready bits are cleared until rename resolves them.
    pub fn new(seq_no: u64, op_type: i64, dest_orig: i64, src1_orig: i64, src2_orig: i64) -> Self {
        let ex_lat = EXEC_LATENCY[op_type as usize];
        Instruction {
            seq_no,
            op_type,
            ex_lat,
            dest_orig,
            src1_orig,
            src2_orig,
            dest: dest_orig,
            src1: src1_orig,
            src2: src2_orig,
            dest_ready: false,
            src1_ready: false,
            src2_ready: false,
            ex_tc: 1,
            timings: Timings::default(),
        }
    }

    /// Formats the retirement trace line described in §6 of the specification.
    pub fn format_retire_line(&self) -> String {
        let t = &self.timings;
        format!(
            "{} fu{{{}}} src{{{},{}}} dst{{{}}} FE{{{},{}}} DE{{{},{}}} RN{{{},{}}} RR{{{},{}}} DI{{{},{}}} IS{{{},{}}} EX{{{},{}}} WB{{{},{}}} RT{{{},{}}}",
            self.seq_no,
            self.op_type,
            self.src1_orig,
            self.src2_orig,
            self.dest_orig,
            t.fe.sc, t.fe.tc,
            t.de.sc, t.de.tc,
            t.rn.sc, t.rn.tc,
            t.rr.sc, t.rr.tc,
            t.di.sc, t.di.tc,
            t.is.sc, t.is.tc,
            t.ex.sc, t.ex.tc,
            t.wb.sc, t.wb.tc,
            t.rt.sc, t.rt.tc,
        )
    }
}
