//! Ordinary least squares regression with full statistical inference.
//!
//! This library fits linear models by solving the normal equations and
//! reports standard errors, t-statistics, p-values, confidence intervals,
//! goodness-of-fit statistics and multicollinearity diagnostics (VIF,
//! condition number) for every fit.
//!
//! Data can be supplied either as a raw `faer` matrix, through the
//! sklearn-style [`Regressor`] trait, or as named typed columns through
//! [`analysis::analyze`], which dummy-encodes categorical predictors and drops
//! incomplete rows.
//!
//! # Example
//!
//! ```rust
//! use regstat::prelude::*;
//! use faer::{Col, Mat};
//!
//! let x = Mat::from_fn(5, 1, |i, _| (i + 1) as f64);
//! let y = Col::from_fn(5, |i| 2.0 * (i + 1) as f64);
//!
//! let fitted = OlsRegressor::builder()
//!     .with_intercept(true)
//!     .confidence_level(0.95)
//!     .build()
//!     .fit(&x, &y)?;
//!
//! let result = fitted.result();
//! assert!((result.coefficients[1] - 2.0).abs() < 1e-10);
//! assert_eq!(result.df_residual, 3);
//!
//! let x_new = Mat::from_fn(1, 1, |_, _| 6.0);
//! let predictions = fitted.predict(&x_new)?;
//! assert!((predictions[0] - 12.0).abs() < 1e-10);
//! # Ok::<(), regstat::core::RegressionError>(())
//! ```

pub mod analysis;
pub mod core;
pub mod data;
pub mod diagnostics;
pub mod distributions;
pub mod inference;
pub mod linalg;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::{analyze, Analysis, ModelSpec};
    pub use crate::core::{
        FitOptions, FitOptionsBuilder, FitResult, IntervalType, NaAction, NaError, NaHandler,
        NaInfo, PredictionResult, RegressionError,
    };
    pub use crate::data::{Column, ColumnData, Dataset};
    pub use crate::diagnostics::{
        compute_leverage, high_leverage_points, high_vif_predictors, standardized_residuals,
        variance_inflation_factor, DiagnosticsBundle,
    };
    pub use crate::solvers::{FittedOls, FittedRegressor, OlsRegressor, Regressor};
}

pub use crate::analysis::{analyze, Analysis, ModelSpec};
pub use crate::core::{FitOptions, FitResult, NaAction, RegressionError};
pub use crate::solvers::{FittedOls, FittedRegressor, OlsRegressor, Regressor};
