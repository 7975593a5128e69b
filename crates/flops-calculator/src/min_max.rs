//! Min-Max Scaling Cost

use crate::result::FlopsResult;

/// FLOP calculator for min-max scaling to [0, 1]
#[derive(Debug, Clone, Copy, Default)]
pub struct MinMaxScalingCalculator;

impl MinMaxScalingCalculator {
    /// Create a new calculator
    pub fn new() -> Self {
        Self
    }

    /// Calculate FLOPs for scaling `elements` values by `(x - min) / (max - min)`
    ///
    /// Totals are exact only below [`MAX_EXACT_FLOPS`](crate::MAX_EXACT_FLOPS).
    pub fn calculate_flops(&self, elements: u64) -> FlopsResult {
        if elements == 0 {
            return FlopsResult::new();
        }

        let n = elements as f64;

        FlopsResult::new()
            .with_category("min", n - 1.0)
            .with_category("max", n - 1.0)
            .with_category("range", 1.0)
            .with_category("scale", 2.0 * n)
    }
}
