//! Gramian Angular Difference Field Cost
//!
//! A GADF image of a series with `T` steps is built in four stages:
//! find min/max, rescale into [-1, 1], map to polar angles with arccos,
//! then fill the `T x T` field with `sin(phi_i - phi_j)`.

use crate::result::FlopsResult;

/// FLOP calculator for the Gramian Angular Difference Field
#[derive(Debug, Clone, Copy, Default)]
pub struct GramianDifferenceFieldCalculator;

impl GramianDifferenceFieldCalculator {
    /// Create a new calculator
    pub fn new() -> Self {
        Self
    }

    /// Calculate FLOPs for `channels` independent series of `time_steps` each
    ///
    /// Each channel produces its own field, so the per-series cost is
    /// multiplied by the channel count. Totals are exact only below
    /// [`MAX_EXACT_FLOPS`](crate::MAX_EXACT_FLOPS).
    pub fn calculate_flops(&self, channels: u64, time_steps: u64) -> FlopsResult {
        if channels == 0 || time_steps == 0 {
            return FlopsResult::new();
        }

        Self::per_series(time_steps).scaled(channels as f64)
    }

    fn per_series(time_steps: u64) -> FlopsResult {
        let t = time_steps as f64;

        FlopsResult::new()
            // 2(T - 1) comparisons, one range subtraction
            .with_category("min_max", 2.0 * (t - 1.0) + 1.0)
            // 2 * (x - min) / range - 1
            .with_category("rescale", 4.0 * t)
            .with_category("polar", t)
            // Subtraction and sine for every (i, j) pair
            .with_category("field", 2.0 * t * t)
    }
}
