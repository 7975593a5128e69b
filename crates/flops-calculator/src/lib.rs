//! Preprocessing FLOP Calculators
//!
//! Closed-form floating-point operation counts for common preprocessing
//! transforms. Every operation (add, compare, divide, sqrt, arccos, sine)
//! counts as one FLOP.

mod gadf;
mod min_max;
mod normalization;
mod result;

pub use gadf::GramianDifferenceFieldCalculator;
pub use min_max::MinMaxScalingCalculator;
pub use normalization::NormalizationCalculator;
pub use result::{FlopsResult, MAX_EXACT_FLOPS};
