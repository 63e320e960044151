//! Simulation summary statistics.
//!
//! Tracks exactly the two counters the specification requires — dynamic
//! instruction count and total cycles — and renders the fixed-format
//! summary block from §6.

use std::io::Write;

use crate::common::SimError;

/// Dynamic instruction count and cycle count, with IPC derived on demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimStats {
    pub dynamic_instruction_count: u64,
    pub cycles: u64,
}

impl SimStats {
    pub fn new() -> Self {
        SimStats::default()
    }

    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.dynamic_instruction_count as f64 / self.cycles as f64
        }
    }

    /// Writes the `# === Simulation Results ========` block to `sink`.
    pub fn print_summary<W: Write>(&self, sink: &mut W) -> Result<(), SimError> {
        writeln!(sink, "# === Simulation Results ========").map_err(SimError::Io)?;
        writeln!(
            sink,
            "# Dynamic Instruction Count    = {}",
            self.dynamic_instruction_count
        )
        .map_err(SimError::Io)?;
        writeln!(sink, "# Cycles                       = {}", self.cycles).map_err(SimError::Io)?;
        writeln!(sink, "# Instructions Per Cycle (IPC) = {:.2}", self.ipc())
            .map_err(SimError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipc_matches_scenario_one() {
        let stats = SimStats {
            dynamic_instruction_count: 1,
            cycles: 9,
        };
        assert!((stats.ipc() - 0.111).abs() < 0.01);
    }

    #[test]
    fn ipc_is_zero_with_no_cycles() {
        let stats = SimStats::default();
        assert_eq!(stats.ipc(), 0.0);
    }
}
