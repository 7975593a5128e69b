//! Preprocessing Energy Estimation
//!
//! Selects a preprocessing FLOP calculator by kind and converts its
//! operation count into an energy estimate for a modeled processor.

mod error;
mod estimator;
mod kind;
mod settings;

pub use error::EstimatorError;
pub use estimator::{EnergyResult, PreprocessingEstimator};
pub use flops_calculator::FlopsResult;
pub use kind::PreprocessingKind;
pub use settings::{EstimatorConfig, ProcessorProfile, ENV_PREFIX};
