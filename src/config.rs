//! Processor configuration: the three capacity/width parameters the
//! simulator is invoked with. There is no TOML file to load here — unlike
//! the wider SoC simulators in this corpus, everything this simulator needs
//! arrives positionally on the CLI (§6), so this module's only job is to
//! validate those three values into one place.

use crate::common::SimError;

/// Reorder-buffer capacity, issue-queue capacity, and pipeline width.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub rob_size: usize,
    pub iq_size: usize,
    pub width: usize,
}

impl PipelineConfig {
    /// Validates that all three parameters are strictly positive.
    pub fn new(rob_size: i64, iq_size: i64, width: i64) -> Result<Self, SimError> {
        if rob_size <= 0 {
            return Err(SimError::InvalidConfig {
                field: "rob_size",
                value: rob_size,
            });
        }
        if iq_size <= 0 {
            return Err(SimError::InvalidConfig {
                field: "iq_size",
                value: iq_size,
            });
        }
        if width <= 0 {
            return Err(SimError::InvalidConfig {
                field: "width",
                value: width,
            });
        }
        Ok(PipelineConfig {
            rob_size: rob_size as usize,
            iq_size: iq_size as usize,
            width: width as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_values() {
        assert!(PipelineConfig::new(0, 8, 1).is_err());
        assert!(PipelineConfig::new(8, -1, 1).is_err());
        assert!(PipelineConfig::new(8, 8, 0).is_err());
    }

    #[test]
    fn accepts_positive_values() {
        let cfg = PipelineConfig::new(8, 8, 1).unwrap();
        assert_eq!(cfg.rob_size, 8);
        assert_eq!(cfg.iq_size, 8);
        assert_eq!(cfg.width, 1);
    }
}
