//! Regression diagnostics (VIF, collinearity, leverage, residuals).
//!
//! - **VIF**: Variance Inflation Factor per predictor
//! - **Collinearity**: condition number and determinant of X'X
//! - **Leverage**: hat matrix diagonal
//! - **Residuals**: standardized residuals for outlier detection
//!
//! # Example
//!
//! ```rust
//! use regstat::diagnostics::{high_vif_predictors, variance_inflation_factor};
//! use faer::Mat;
//!
//! let x = Mat::from_fn(20, 2, |i, j| if j == 0 { i as f64 } else { (i * i % 7) as f64 });
//! let vif = variance_inflation_factor(&x, false, 1e-10);
//! let collinear = high_vif_predictors(&vif, 5.0);
//! assert!(collinear.is_empty());
//! ```

mod collinearity;
mod leverage;
mod residuals;
mod vif;

pub use collinearity::{collinearity_diagnostics, DiagnosticsBundle};
pub use leverage::{compute_leverage, high_leverage_points};
pub use residuals::{residual_outliers, standardized_residuals};
pub use vif::{high_vif_predictors, variance_inflation_factor};
