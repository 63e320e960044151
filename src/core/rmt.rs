//! Register map table: architectural register to in-flight ROB tag.

/// Number of architectural registers modeled (r0..r66).
pub const NUM_ARCH_REGS: usize = 67;

#[derive(Clone, Copy, Debug, Default)]
struct RmtEntry {
    valid: bool,
    rob_tag: usize,
}

/// Maps each architectural register to the ROB tag of its most recent
/// in-flight producer, if any.
pub struct Rmt {
    entries: [RmtEntry; NUM_ARCH_REGS],
}

impl Rmt {
    pub fn new() -> Self {
        Rmt {
            entries: [RmtEntry::default(); NUM_ARCH_REGS],
        }
    }

    pub fn is_valid(&self, reg: i64) -> bool {
        self.entries[reg as usize].valid
    }

    pub fn rob_tag(&self, reg: i64) -> usize {
        self.entries[reg as usize].rob_tag
    }

    /// Installs `reg -> rob_tag` as the current producer mapping,
    /// unconditionally overwriting any prior mapping (§4.3 step 3).
    pub fn set(&mut self, reg: i64, rob_tag: usize) {
        self.entries[reg as usize] = RmtEntry {
            valid: true,
            rob_tag,
        };
    }

    /// Clears the mapping for `reg`, but only if it still points at
    /// `rob_tag` — a later producer may have already overwritten it.
    pub fn clear_if_matches(&mut self, reg: i64, rob_tag: usize) {
        let entry = &mut self.entries[reg as usize];
        if entry.valid && entry.rob_tag == rob_tag {
            entry.valid = false;
        }
    }
}

impl Default for Rmt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_then_clear_only_if_still_current() {
        let mut rmt = Rmt::new();
        rmt.set(5, 2);
        assert!(rmt.is_valid(5));
        assert_eq!(rmt.rob_tag(5), 2);

        rmt.set(5, 7);
        assert_eq!(rmt.rob_tag(5), 7);

        // Retiring the stale producer (tag 2) must not clear the newer mapping.
        rmt.clear_if_matches(5, 2);
        assert!(rmt.is_valid(5));
        assert_eq!(rmt.rob_tag(5), 7);

        rmt.clear_if_matches(5, 7);
        assert!(!rmt.is_valid(5));
    }
}
