//! Pipeline latch interface.
//!
//! Adapted from a flush/is_empty trait pair: there is no branch
//! misprediction recovery to flush for in this model (see Non-goals), so
//! only the emptiness/occupancy query the cycle driver needs for
//! back-pressure checks (§5) survives.
pub trait StageLatch {
    /// Number of instructions currently held.
    fn len(&self) -> usize;

    /// Whether the latch holds no instructions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
