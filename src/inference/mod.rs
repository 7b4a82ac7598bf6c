//! Statistical inference (standard errors, p-values, confidence intervals,
//! goodness of fit).

mod coefficient;
mod goodness;
mod prediction;

pub use coefficient::CoefficientInference;
pub use goodness::{FitStatistics, SumsOfSquares};
pub use prediction::compute_prediction_intervals;
