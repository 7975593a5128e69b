//! Preprocessing FLOP and Energy Estimator

use crate::error::EstimatorError;
use crate::kind::PreprocessingKind;
use crate::settings::{EstimatorConfig, ProcessorProfile};
use flops_calculator::{
    FlopsResult, GramianDifferenceFieldCalculator, MinMaxScalingCalculator, NormalizationCalculator,
    MAX_EXACT_FLOPS,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Energy estimate for one preprocessing pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyResult {
    /// Estimated energy (J): `total_time * max_power`
    pub total_energy: f64,
    /// Input volume processed: `data_bits * time_steps`
    pub total_bits: u64,
    /// FLOPs charged for the pass
    pub total_flops: f64,
    /// Processing time at full throughput (s)
    pub total_time: f64,
}

/// Dispatches FLOP requests to the active calculator and converts
/// the result into energy on the configured processor
#[derive(Debug, Clone)]
pub struct PreprocessingEstimator {
    config: EstimatorConfig,
    normalization: NormalizationCalculator,
    min_max_scaling: MinMaxScalingCalculator,
    gadf: GramianDifferenceFieldCalculator,
}

impl PreprocessingEstimator {
    /// Create an estimator from a validated configuration
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        info!(
            "Creating preprocessing estimator: kind={}, flops_per_second={}, max_power={}",
            config.kind, config.processor.flops_per_second, config.processor.max_power
        );

        Ok(Self {
            config,
            normalization: NormalizationCalculator::new(),
            min_max_scaling: MinMaxScalingCalculator::new(),
            gadf: GramianDifferenceFieldCalculator::new(),
        })
    }

    /// Create an estimator selecting the kind by its registered name
    pub fn from_name(
        kind: &str,
        processor: ProcessorProfile,
        default_time_steps: u64,
    ) -> Result<Self, EstimatorError> {
        let kind = kind.parse::<PreprocessingKind>().inspect_err(|_| {
            warn!("Rejected preprocessing kind at construction: {}", kind);
        })?;

        Self::new(EstimatorConfig {
            kind,
            processor,
            default_time_steps,
        })
    }

    /// Active preprocessing kind
    pub fn kind(&self) -> PreprocessingKind {
        self.config.kind
    }

    /// Processor model
    pub fn profile(&self) -> &ProcessorProfile {
        &self.config.processor
    }

    /// Step count used by `compute_energy_default`
    pub fn default_time_steps(&self) -> u64 {
        self.config.default_time_steps
    }

    /// Select a different preprocessing kind
    pub fn set_kind(&mut self, kind: PreprocessingKind) {
        info!("Preprocessing kind changed: {} -> {}", self.config.kind, kind);
        self.config.kind = kind;
    }

    /// Select a preprocessing kind by name
    ///
    /// On failure the active kind is left unchanged.
    pub fn set_kind_by_name(&mut self, kind: &str) -> Result<(), EstimatorError> {
        match kind.parse::<PreprocessingKind>() {
            Ok(parsed) => {
                self.set_kind(parsed);
                Ok(())
            }
            Err(e) => {
                warn!("Rejected preprocessing kind {}, keeping {}", kind, self.config.kind);
                Err(e)
            }
        }
    }

    /// FLOPs for the active kind
    ///
    /// Only GADF uses `time_steps`; element-wise kinds are costed on
    /// `data_bits` alone. Sizes whose count would reach
    /// [`MAX_EXACT_FLOPS`] are rejected, since `f64` can no longer tell
    /// neighboring sizes apart.
    pub fn compute_flops(
        &self,
        data_bits: u64,
        time_steps: u64,
    ) -> Result<FlopsResult, EstimatorError> {
        require_time_steps(time_steps)?;

        let flops = match self.config.kind {
            PreprocessingKind::Normalization => self.normalization.calculate_flops(data_bits),
            PreprocessingKind::MinMaxScaling => self.min_max_scaling.calculate_flops(data_bits),
            PreprocessingKind::Gadf => self.gadf.calculate_flops(data_bits, time_steps),
        };

        if !flops.is_exact() {
            return Err(EstimatorError::InvalidParameter {
                name: "data_bits",
                reason: format!(
                    "{} cost for {data_bits} bits x {time_steps} steps reaches 2^53 FLOPs",
                    self.config.kind
                ),
            });
        }
        Ok(flops)
    }

    /// FLOPs for a single time step
    pub fn compute_flops_single(&self, data_bits: u64) -> Result<FlopsResult, EstimatorError> {
        self.compute_flops(data_bits, 1)
    }

    /// Energy for processing `data_bits` per step over `time_steps` steps
    ///
    /// Element-wise kinds collapse the time dimension and are costed on
    /// `data_bits * time_steps` elements. GADF keeps both dimensions since
    /// its cost is quadratic in `time_steps`.
    pub fn compute_energy(
        &self,
        data_bits: u64,
        time_steps: u64,
    ) -> Result<EnergyResult, EstimatorError> {
        require_time_steps(time_steps)?;
        let total_bits = data_bits
            .checked_mul(time_steps)
            .ok_or_else(|| EstimatorError::InvalidParameter {
                name: "data_bits",
                reason: format!("{data_bits} bits x {time_steps} steps overflows u64"),
            })?;

        let flops = if self.config.kind.is_time_series_aware() {
            self.compute_flops(data_bits, time_steps)?
        } else {
            self.compute_flops(total_bits, 1)?
        };

        let total_flops = flops.total_flops;
        let total_time = total_flops / self.config.processor.flops_per_second;
        let total_energy = total_time * self.config.processor.max_power;

        debug!(
            "Energy estimate: kind={}, bits={}, steps={}, flops={}, energy={}",
            self.config.kind, data_bits, time_steps, total_flops, total_energy
        );

        Ok(EnergyResult {
            total_energy,
            total_bits,
            total_flops,
            total_time,
        })
    }

    /// Energy using the configured default step count
    pub fn compute_energy_default(&self, data_bits: u64) -> Result<EnergyResult, EstimatorError> {
        self.compute_energy(data_bits, self.config.default_time_steps)
    }
}

impl Default for PreprocessingEstimator {
    fn default() -> Self {
        Self {
            config: EstimatorConfig::default(),
            normalization: NormalizationCalculator::new(),
            min_max_scaling: MinMaxScalingCalculator::new(),
            gadf: GramianDifferenceFieldCalculator::new(),
        }
    }
}

fn require_time_steps(time_steps: u64) -> Result<(), EstimatorError> {
    if time_steps == 0 {
        return Err(EstimatorError::InvalidParameter {
            name: "time_steps",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator(kind: &str) -> PreprocessingEstimator {
        PreprocessingEstimator::from_name(kind, ProcessorProfile::new(1e12, 100.0), 1).unwrap()
    }

    #[test]
    fn test_normalization_scenario() {
        let est = estimator("normalization");
        let energy = est.compute_energy(1000, 10).unwrap();

        assert_eq!(energy.total_bits, 10_000);
        assert_eq!(energy.total_flops, 60_003.0);
        assert_eq!(energy.total_energy, 60_003.0 / 1e12 * 100.0);
    }

    #[test]
    fn test_gadf_keeps_time_dimension() {
        let est = estimator("GADF");
        let energy = est.compute_energy(1000, 4).unwrap();

        assert_eq!(energy.total_bits, 4000);
        assert_eq!(energy.total_flops, 59_000.0);

        // Collapsing into 4000 single-step channels would cost 32000
        let collapsed = est.compute_flops(4000, 1).unwrap();
        assert_eq!(collapsed.total_flops, 32_000.0);
        assert_ne!(energy.total_flops, collapsed.total_flops);
    }

    #[test]
    fn test_element_wise_ignores_time_steps_in_flops() {
        let est = estimator("min_max_scaling");
        let one = est.compute_flops(1000, 1).unwrap();
        let many = est.compute_flops(1000, 50).unwrap();
        assert_eq!(one, many);
    }

    #[test]
    fn test_energy_formula() {
        let profile = ProcessorProfile::new(2.5e9, 35.0);
        let est = PreprocessingEstimator::from_name("min_max_scaling", profile, 1).unwrap();
        let energy = est.compute_energy(4096, 3).unwrap();

        let flops = est.compute_flops(4096 * 3, 1).unwrap().total_flops;
        assert_eq!(energy.total_flops, flops);
        assert_eq!(energy.total_time, flops / 2.5e9);
        assert_eq!(energy.total_energy, (flops / 2.5e9) * 35.0);
    }

    #[test]
    fn test_unsupported_kind_at_construction() {
        let result = PreprocessingEstimator::from_name("foo", ProcessorProfile::default(), 1);
        assert!(matches!(result, Err(EstimatorError::UnsupportedKind(name)) if name == "foo"));
    }

    #[test]
    fn test_unsupported_kind_keeps_active_kind() {
        let mut est = estimator("GADF");
        let result = est.set_kind_by_name("foo");

        assert!(matches!(result, Err(EstimatorError::UnsupportedKind(_))));
        assert_eq!(est.kind(), PreprocessingKind::Gadf);
    }

    #[test]
    fn test_set_kind_switches_routing() {
        let mut est = estimator("normalization");
        est.set_kind_by_name("GADF").unwrap();

        assert_eq!(est.kind(), PreprocessingKind::Gadf);
        // Routed through the time-series path, not the collapsed one
        assert_eq!(est.compute_energy(1000, 4).unwrap().total_flops, 59_000.0);

        est.set_kind(PreprocessingKind::Normalization);
        assert_eq!(est.compute_energy(1000, 10).unwrap().total_flops, 60_003.0);
    }

    #[test]
    fn test_invalid_processor_rejected() {
        let profile = ProcessorProfile::new(0.0, 100.0);
        let result = PreprocessingEstimator::from_name("normalization", profile, 1);
        assert!(matches!(
            result,
            Err(EstimatorError::InvalidParameter { name: "flops_per_second", .. })
        ));

        let profile = ProcessorProfile::new(1e12, -5.0);
        let result = PreprocessingEstimator::from_name("normalization", profile, 1);
        assert!(matches!(result, Err(EstimatorError::InvalidParameter { name: "max_power", .. })));
    }

    #[test]
    fn test_zero_time_steps_rejected() {
        let est = estimator("GADF");
        assert!(matches!(
            est.compute_flops(10, 0),
            Err(EstimatorError::InvalidParameter { name: "time_steps", .. })
        ));
        assert!(est.compute_energy(10, 0).is_err());
    }

    #[test]
    fn test_total_bits_overflow_rejected() {
        let est = estimator("normalization");
        assert!(matches!(
            est.compute_energy(u64::MAX, 2),
            Err(EstimatorError::InvalidParameter { name: "data_bits", .. })
        ));
    }

    #[test]
    fn test_largest_exact_size_still_increases() {
        let est = estimator("normalization");
        // Largest n with 6n + 3 < 2^53
        let n = 1_501_199_875_790_164u64;

        let below = est.compute_flops_single(n - 1).unwrap().total_flops;
        let at = est.compute_flops_single(n).unwrap().total_flops;
        assert_eq!(at - below, 6.0);
        assert!(at < MAX_EXACT_FLOPS);

        assert!(matches!(
            est.compute_flops_single(n + 1),
            Err(EstimatorError::InvalidParameter { name: "data_bits", .. })
        ));
    }

    #[test]
    fn test_sizes_past_exact_ceiling_rejected() {
        let two_pow_53 = 1u64 << 53;
        for kind in PreprocessingKind::ALL {
            let mut est = estimator("normalization");
            est.set_kind(kind);
            assert!(est.compute_flops_single(two_pow_53).is_err());
            assert!(est.compute_flops_single(two_pow_53 + 1).is_err());
            assert!(est.compute_energy(two_pow_53, 1).is_err());
        }

        let est = estimator("GADF");
        assert!(est.compute_flops(1, 1 << 27).is_err());
    }

    #[test]
    fn test_default_time_steps() {
        let est =
            PreprocessingEstimator::from_name("GADF", ProcessorProfile::default(), 4).unwrap();
        assert_eq!(est.default_time_steps(), 4);
        assert_eq!(est.compute_energy_default(1000).unwrap(), est.compute_energy(1000, 4).unwrap());
    }

    #[test]
    fn test_default_estimator() {
        let est = PreprocessingEstimator::default();
        assert_eq!(est.kind(), PreprocessingKind::Normalization);
        assert_eq!(est.profile(), &ProcessorProfile::default());
        assert_eq!(est.compute_flops_single(0).unwrap().total_flops, 0.0);
    }

    #[test]
    fn test_energy_result_serializes() {
        let energy = estimator("normalization").compute_energy(8, 2).unwrap();
        let json = serde_json::to_value(energy).unwrap();
        assert_eq!(json["total_bits"], 16);
        assert!(json["total_energy"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_estimator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PreprocessingEstimator>();
    }
}
