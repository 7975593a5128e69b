//! Z-Score Normalization Cost

use crate::result::FlopsResult;

/// FLOP calculator for z-score normalization
///
/// Two statistics passes (mean, standard deviation) followed by one
/// scaling pass `(x - mean) / std`. Total: `6n + 3` for `n > 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizationCalculator;

impl NormalizationCalculator {
    /// Create a new calculator
    pub fn new() -> Self {
        Self
    }

    /// Calculate FLOPs for normalizing `elements` values
    ///
    /// Totals are exact only below [`MAX_EXACT_FLOPS`](crate::MAX_EXACT_FLOPS).
    pub fn calculate_flops(&self, elements: u64) -> FlopsResult {
        if elements == 0 {
            return FlopsResult::new();
        }

        let n = elements as f64;

        // Sum, then one division
        let mean = n + 1.0;
        // Subtract, square, accumulate per element; divide, sqrt
        let std = 3.0 * n + 2.0;
        // Subtract mean, divide by std
        let scale = 2.0 * n;

        FlopsResult::new()
            .with_category("mean", mean)
            .with_category("std", std)
            .with_category("scale", scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_formula() {
        let result = NormalizationCalculator::new().calculate_flops(10_000);
        assert_eq!(result.total_flops, 60_003.0);
        assert_eq!(result.category("mean"), Some(10_001.0));
        assert_eq!(result.category("std"), Some(30_002.0));
        assert_eq!(result.category("scale"), Some(20_000.0));
    }

    #[test]
    fn test_empty_input() {
        let result = NormalizationCalculator::new().calculate_flops(0);
        assert_eq!(result.total_flops, 0.0);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn test_linear_growth() {
        let calc = NormalizationCalculator::new();
        let small = calc.calculate_flops(1_000).total_flops;
        let large = calc.calculate_flops(2_000).total_flops;
        assert_eq!(large - small, 6.0 * 1_000.0);
    }
}
