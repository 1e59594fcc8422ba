//! Search tuning parameters.

use serde::{Deserialize, Serialize};

/// Tuning for the event searches. The defaults suit daily-sampled data;
/// coarser data sets want a larger `step_days`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Coarse-scan step in days.
    pub step_days: f64,
    /// How far a forward scan may range before giving up.
    pub max_scan_days: f64,
    /// Bisection iteration cap.
    pub max_iterations: u32,
    /// Bisection interval tolerance in days.
    pub convergence_days: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            step_days: 1.0,
            max_scan_days: 60.0,
            max_iterations: 50,
            convergence_days: 1e-6,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.step_days > 0.0) {
            return Err("step_days must be positive");
        }
        if self.max_scan_days < self.step_days {
            return Err("max_scan_days must be at least step_days");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be greater than zero");
        }
        if !(self.convergence_days > 0.0) {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }
}
