//! Reorder buffer: a fixed-capacity circular structure that maintains
//! program-order completion from rename through retirement.

use crate::core::instruction::Instruction;

/// A single reorder-buffer slot.
///
/// `retired` is populated at writeback so retire can emit the full timing
/// record without having to thread it back through the latches.
#[derive(Clone, Debug, Default)]
pub struct RobSlot {
    pub seq_no: u64,
    /// Destination architectural register, or [`crate::core::instruction::NO_REG`].
    pub dest: i64,
    pub dest_ready: bool,
    pub retired: Option<Instruction>,
}

/// Circular reorder buffer of fixed capacity `rob_size`.
///
/// Head and tail are always taken modulo `rob_size`; `occupied` disambiguates
/// the empty (`head == tail`, `occupied == 0`) and full (`head == tail`,
/// `occupied == rob_size`) cases, since the indices alone coincide in both.
pub struct Rob {
    slots: Vec<RobSlot>,
    head: usize,
    tail: usize,
    occupied: usize,
}

impl Rob {
    pub fn new(rob_size: usize) -> Self {
        Rob {
            slots: vec![RobSlot::default(); rob_size],
            head: 0,
            tail: 0,
            occupied: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    pub fn free_slots(&self) -> usize {
        self.capacity() - self.occupied
    }

    /// Allocates a slot at the tail for a newly renamed instruction.
    /// Returns the ROB tag it was given. Caller must have already verified
    /// `free_slots() > 0`.
    pub fn allocate(&mut self, seq_no: u64, dest: i64) -> usize {
        assert!(self.occupied < self.capacity(), "ROB allocate on full ROB");
        let tag = self.tail;
        self.slots[tag] = RobSlot {
            seq_no,
            dest,
            dest_ready: false,
            retired: None,
        };
        self.tail = (self.tail + 1) % self.capacity();
        self.occupied += 1;
        tag
    }

    pub fn slot(&self, tag: usize) -> &RobSlot {
        &self.slots[tag]
    }

    pub fn slot_mut(&mut self, tag: usize) -> &mut RobSlot {
        &mut self.slots[tag]
    }

    pub fn is_dest_ready(&self, tag: usize) -> bool {
        self.slots[tag].dest_ready
    }

    /// Marks a slot's destination ready, triggered by execute completion.
    pub fn set_dest_ready(&mut self, tag: usize) {
        self.slots[tag].dest_ready = true;
    }

    /// Writes the finished instruction record into its slot at writeback.
    pub fn writeback(&mut self, tag: usize, inst: Instruction) {
        self.slots[tag].retired = Some(inst);
    }

    pub fn head_tag(&self) -> usize {
        self.head
    }

    /// Whether the head slot is ready to retire this cycle.
    pub fn head_ready(&self) -> bool {
        !self.is_empty() && self.slots[self.head].dest_ready
    }

    /// Pops the head slot, returning its retired instruction. Caller must
    /// have already verified [`Rob::head_ready`].
    pub fn pop_head(&mut self) -> (usize, Instruction) {
        assert!(self.head_ready(), "retire on non-ready ROB head");
        let tag = self.head;
        let inst = self.slots[tag]
            .retired
            .take()
            .expect("ready ROB head missing writeback record");
        self.head = (self.head + 1) % self.capacity();
        self.occupied -= 1;
        (tag, inst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_and_retire_cycles_through_capacity() {
        let mut rob = Rob::new(2);
        assert!(rob.is_empty());
        let t0 = rob.allocate(0, 5);
        let t1 = rob.allocate(1, 6);
        assert_eq!(rob.len(), 2);
        assert_eq!(rob.free_slots(), 0);
        assert_ne!(t0, t1);

        rob.set_dest_ready(t0);
        rob.writeback(t0, Instruction::new(0, 0, 5, NO_REG_SENTINEL, NO_REG_SENTINEL));
        assert!(rob.head_ready());
        let (tag, inst) = rob.pop_head();
        assert_eq!(tag, t0);
        assert_eq!(inst.seq_no, 0);
        assert_eq!(rob.len(), 1);
        assert_eq!(rob.free_slots(), 1);
    }

    #[test]
    #[should_panic]
    fn allocate_on_full_rob_panics() {
        let mut rob = Rob::new(1);
        rob.allocate(0, -1);
        rob.allocate(1, -1);
    }

    const NO_REG_SENTINEL: i64 = -1;
}
