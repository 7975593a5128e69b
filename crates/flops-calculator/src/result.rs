//! FLOP Count Result

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Largest count below which every integer FLOP total is exact in `f64` (2^53)
///
/// Counts at or above this value may round, so two different input sizes
/// can report the same total.
pub const MAX_EXACT_FLOPS: f64 = 9_007_199_254_740_992.0;

/// Operation count for one preprocessing pass
///
/// `total_flops` is always present. `breakdown` holds per-category counts
/// whose names depend on the calculator; they sum to `total_flops`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlopsResult {
    /// Total floating-point operations
    pub total_flops: f64,
    /// Per-category operation counts
    pub breakdown: BTreeMap<String, f64>,
}

impl FlopsResult {
    /// Create an empty result (zero FLOPs, no categories)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category count, accumulating into the total
    pub fn with_category(mut self, name: &str, flops: f64) -> Self {
        *self.breakdown.entry(name.to_string()).or_insert(0.0) += flops;
        self.total_flops += flops;
        self
    }

    /// Count for a single category, if the calculator reports it
    pub fn category(&self, name: &str) -> Option<f64> {
        self.breakdown.get(name).copied()
    }

    /// Whether `total_flops` is below the `f64` integer-exact ceiling
    pub fn is_exact(&self) -> bool {
        self.total_flops < MAX_EXACT_FLOPS
    }

    /// Scale every count by a constant factor
    pub fn scaled(mut self, factor: f64) -> Self {
        for value in self.breakdown.values_mut() {
            *value *= factor;
        }
        self.total_flops *= factor;
        self
    }
}
