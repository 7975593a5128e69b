//! Estimator Settings

use crate::error::EstimatorError;
use crate::kind::PreprocessingKind;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "PREPROC_ENERGY";

/// Modeled processor used to turn FLOPs into energy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorProfile {
    /// Sustained throughput (FLOP/s)
    pub flops_per_second: f64,
    /// Power draw at full utilization (W)
    pub max_power: f64,
}

impl Default for ProcessorProfile {
    fn default() -> Self {
        Self {
            flops_per_second: 1e12,
            max_power: 100.0,
        }
    }
}

impl ProcessorProfile {
    /// Create a profile from throughput and power
    pub fn new(flops_per_second: f64, max_power: f64) -> Self {
        Self {
            flops_per_second,
            max_power,
        }
    }

    /// Check that both values are finite and strictly positive
    pub fn validate(&self) -> Result<(), EstimatorError> {
        require_positive("flops_per_second", self.flops_per_second)?;
        require_positive("max_power", self.max_power)
    }
}

/// Full estimator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Active preprocessing kind
    pub kind: PreprocessingKind,
    /// Processor model
    pub processor: ProcessorProfile,
    /// Time steps used by `compute_energy_default`
    pub default_time_steps: u64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            kind: PreprocessingKind::default(),
            processor: ProcessorProfile::default(),
            default_time_steps: 1,
        }
    }
}

impl EstimatorConfig {
    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, EstimatorError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Load from a file, with `PREPROC_ENERGY__*` environment overrides
    ///
    /// The format is inferred from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EstimatorError> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Check processor values and the default step count
    pub fn validate(&self) -> Result<(), EstimatorError> {
        self.processor.validate()?;
        if self.default_time_steps == 0 {
            return Err(EstimatorError::InvalidParameter {
                name: "default_time_steps",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), EstimatorError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EstimatorError::InvalidParameter {
            name,
            reason: format!("must be finite and positive, got {value}"),
        })
    }
}
