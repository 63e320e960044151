//! Integration tests exercising the pipeline through its public API: build
//! a config, feed it a trace, and check the emitted retirement lines and
//! final cycle count against the specification's worked scenarios.

use ooo_pipeline_sim::config::PipelineConfig;
use ooo_pipeline_sim::core::Pipeline;
use ooo_pipeline_sim::trace::{RawRecord, VecSink, VecTraceSource};

fn rec(op_type: i64, dest: i64, src1: i64, src2: i64) -> RawRecord {
    RawRecord {
        op_type,
        dest,
        src1,
        src2,
    }
}

fn run(records: Vec<RawRecord>, rob_size: i64, iq_size: i64, width: i64) -> (Pipeline, VecSink) {
    let config = PipelineConfig::new(rob_size, iq_size, width).unwrap();
    let mut pipeline = Pipeline::new(config);
    let mut trace = VecTraceSource::new(records);
    let mut sink = VecSink::default();
    pipeline.run(&mut trace, &mut sink).unwrap();
    (pipeline, sink)
}

#[test]
fn width_one_serializes_issue_and_retire() {
    let (_, sink) = run(
        vec![rec(0, 1, -1, -1), rec(0, 2, -1, -1), rec(0, 3, -1, -1)],
        8,
        8,
        1,
    );
    assert_eq!(sink.lines.len(), 3);
    // Sequence numbers retire strictly in order.
    for (i, line) in sink.lines.iter().enumerate() {
        assert!(line.starts_with(&format!("{i} fu")));
    }
}

#[test]
fn rob_size_one_degenerates_to_in_order_execution() {
    let (pipeline, sink) = run(vec![rec(2, 1, -1, -1), rec(0, 2, -1, -1)], 1, 8, 1);
    assert_eq!(sink.lines.len(), 2);
    // Second instruction cannot even be renamed until the first retires,
    // since the ROB only ever holds one in-flight instruction.
    assert!(pipeline.stats.ipc() <= 1.0 / 5.0 + 1e-9);
}

#[test]
fn all_sources_absent_ready_the_cycle_after_rename() {
    let (_, sink) = run(vec![rec(0, 1, -1, -1)], 8, 8, 1);
    assert_eq!(sink.lines.len(), 1);
    assert!(sink.lines[0].contains("RN{2,1}"));
    assert!(sink.lines[0].contains("RR{3,1}"));
}

#[test]
fn latency_escalation_consumer_waits_for_slow_producer() {
    // op_type 2 has ex_lat = 5; the dependent add must sit in IS until the
    // producer's execute completes and broadcasts wakeup.
    let (_, sink) = run(vec![rec(2, 1, -1, -1), rec(0, 2, 1, -1)], 8, 8, 1);
    assert_eq!(sink.lines.len(), 2);
    assert!(sink.lines[0].contains("EX{6,5}"));
    assert!(sink.lines[1].contains("IS{6,5}"));
    assert!(sink.lines[1].contains("EX{11,1}"));
}

#[test]
fn determinism_repeated_runs_are_byte_identical() {
    let records = vec![rec(1, 1, -1, -1), rec(2, 2, 1, -1), rec(0, 3, 2, -1)];
    let (p1, s1) = run(records.clone(), 4, 4, 2);
    let (p2, s2) = run(records, 4, 4, 2);
    assert_eq!(p1.stats.cycles, p2.stats.cycles);
    assert_eq!(s1.lines, s2.lines);
}

#[test]
fn seq_no_retirement_is_monotonic() {
    let records: Vec<RawRecord> = (0..6).map(|i| rec(0, i, -1, -1)).collect();
    let (_, sink) = run(records, 8, 8, 3);
    for (i, line) in sink.lines.iter().enumerate() {
        assert!(line.starts_with(&format!("{i} ")));
    }
}
