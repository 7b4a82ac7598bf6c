//! Core types for regression analysis.

mod error;
#[cfg(feature = "serde")]
pub(crate) mod float_serde;
mod na_action;
mod options;
mod prediction;
mod result;

pub use error::RegressionError;
pub use na_action::{NaAction, NaError, NaHandler, NaInfo, NaResult};
pub use options::{
    check_alpha, FitOptions, FitOptionsBuilder, OptionsError, DEFAULT_PIVOT_TOLERANCE,
};
pub use prediction::{IntervalType, PredictionResult};
pub use result::{FitResult, INTERCEPT_TERM};
