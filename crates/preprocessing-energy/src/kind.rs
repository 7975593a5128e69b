//! Preprocessing Kinds

use crate::error::EstimatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported preprocessing transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PreprocessingKind {
    /// Z-score normalization
    #[default]
    Normalization,
    /// Min-max scaling to [0, 1]
    MinMaxScaling,
    /// Gramian Angular Difference Field
    Gadf,
}

impl PreprocessingKind {
    /// All registered kinds
    pub const ALL: [PreprocessingKind; 3] = [
        PreprocessingKind::Normalization,
        PreprocessingKind::MinMaxScaling,
        PreprocessingKind::Gadf,
    ];

    /// Registered name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            PreprocessingKind::Normalization => "normalization",
            PreprocessingKind::MinMaxScaling => "min_max_scaling",
            PreprocessingKind::Gadf => "GADF",
        }
    }

    /// Whether the cost depends on the time-series layout rather than
    /// only on the total element count
    pub fn is_time_series_aware(&self) -> bool {
        matches!(self, PreprocessingKind::Gadf)
    }
}

impl fmt::Display for PreprocessingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PreprocessingKind {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EstimatorError::UnsupportedKind(s.to_string()))
    }
}

impl TryFrom<String> for PreprocessingKind {
    type Error = EstimatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PreprocessingKind> for String {
    fn from(kind: PreprocessingKind) -> Self {
        kind.name().to_string()
    }
}
