//! Estimator Error Types

use thiserror::Error;

/// Errors raised while configuring or querying the estimator
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// Preprocessing kind name is not registered
    #[error("Unsupported preprocessing type: {0}")]
    UnsupportedKind(String),

    /// Numeric parameter outside its valid domain
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Configuration source failed to load or deserialize
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
