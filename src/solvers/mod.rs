//! Regression solvers.

mod ols;
mod traits;

pub use ols::{estimate, FittedOls, LeastSquaresEstimate, OlsRegressor, OlsRegressorBuilder};
pub use traits::{FittedRegressor, Regressor};
