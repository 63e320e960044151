//! Inter-stage pipeline latches.
//!
//! DE and RN are pure FIFOs: a stage either drains one of them wholesale or
//! leaves it untouched. RR and DI additionally need their contents
//! inspected and possibly revised in place (source readiness re-checks) but
//! are still drained front-to-back, so they use the same `VecDeque` shape.
//! IQ has no ordering requirement beyond age for issue scan purposes and is
//! rebuilt with `retain` each cycle, so a plain `Vec` is simplest. EX and WB
//! are scratch lists rebuilt every cycle by execute/writeback and read once
//! downstream, so they are plain `Vec`s too.

use std::collections::VecDeque;

use crate::core::instruction::Instruction;
use crate::core::pipeline::traits::StageLatch;

/// A FIFO inter-stage latch (used for DE, RN, RR, DI).
#[derive(Default)]
pub struct FifoLatch {
    entries: VecDeque<Instruction>,
}

impl FifoLatch {
    pub fn new() -> Self {
        FifoLatch {
            entries: VecDeque::new(),
        }
    }

    pub fn push_back(&mut self, inst: Instruction) {
        self.entries.push_back(inst);
    }

    /// Drains the entire latch in program order.
    pub fn drain_all(&mut self) -> Vec<Instruction> {
        self.entries.drain(..).collect()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Instruction> {
        self.entries.iter_mut()
    }
}

impl StageLatch for FifoLatch {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Issue queue: age-ordered (insertion order), but issue may remove from any
/// position, so it is a `Vec` rebuilt by [`IssueQueue::take_ready`].
#[derive(Default)]
pub struct IssueQueue {
    entries: Vec<Instruction>,
}

impl IssueQueue {
    pub fn new() -> Self {
        IssueQueue {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, inst: Instruction) {
        self.entries.push(inst);
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Instruction> {
        self.entries.iter_mut()
    }

    /// Removes and returns up to `width` oldest ready instructions, in
    /// program order, preserving the relative order of those left behind.
    pub fn take_ready(&mut self, width: usize) -> Vec<Instruction> {
        let mut taken = Vec::new();
        let mut remaining = Vec::with_capacity(self.entries.len());
        for inst in self.entries.drain(..) {
            if taken.len() < width && inst.src1_ready && inst.src2_ready {
                taken.push(inst);
            } else {
                remaining.push(inst);
            }
        }
        self.entries = remaining;
        taken
    }
}

impl StageLatch for IssueQueue {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Execute-stage occupant list, rebuilt fresh each cycle by issue/execute.
#[derive(Default)]
pub struct ExecuteList {
    entries: Vec<Instruction>,
}

impl ExecuteList {
    pub fn new() -> Self {
        ExecuteList {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, inst: Instruction) {
        self.entries.push(inst);
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Instruction> {
        self.entries.iter_mut()
    }

    pub fn take_all(&mut self) -> Vec<Instruction> {
        std::mem::take(&mut self.entries)
    }
}

impl StageLatch for ExecuteList {
    fn len(&self) -> usize {
        self.entries.len()
    }
}
