//! Wakeup/bypass broadcast.
//!
//! When an instruction completes execute it broadcasts its ROB tag; every
//! waiter still sitting in IQ, DI, or RR with an unsatisfied source whose
//! renamed tag matches gets that source marked ready a cycle early, instead
//! of waiting for the writeback-visible `dest_ready` bit on the ROB slot.
//! Tracking is by tag comparison only, never by back-pointer, so the waiter
//! lists stay flat data.

use crate::core::instruction::Instruction;

/// Marks `inst`'s sources ready if they match the completing `rob_tag`.
fn wake(inst: &mut Instruction, rob_tag: i64) {
    if !inst.src1_ready && inst.src1 == rob_tag {
        inst.src1_ready = true;
    }
    if !inst.src2_ready && inst.src2 == rob_tag {
        inst.src2_ready = true;
    }
}

/// Broadcasts a completing ROB tag to every instruction in the given
/// iterators (IQ, DI, RR, in that order at the call site).
pub fn broadcast<'a>(rob_tag: i64, waiters: impl Iterator<Item = &'a mut Instruction>) {
    for inst in waiters {
        wake(inst, rob_tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instruction::NO_REG;

    #[test]
    fn wakeup_only_matches_unsatisfied_source_on_tag() {
        let mut inst = Instruction::new(0, 0, NO_REG, 3, 4);
        inst.src1 = 3;
        inst.src2 = 4;

        wake(&mut inst, 3);
        assert!(inst.src1_ready);
        assert!(!inst.src2_ready);

        wake(&mut inst, 4);
        assert!(inst.src2_ready);
    }
}
