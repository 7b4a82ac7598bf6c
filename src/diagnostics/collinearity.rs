//! Overall collinearity indicators for a fitted design.

use crate::core::RegressionError;
use crate::linalg::{condition_number, determinant};
use faer::Mat;

/// Collinearity diagnostics for one fit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosticsBundle {
    /// VIF per design column; NaN for the intercept.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub vif: Vec<f64>,
    /// λ_max / λ_min of X'X.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub condition_number: f64,
    /// det(X'X).
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub determinant: f64,
}

/// Condition number and determinant of `xtx`, bundled with precomputed VIFs.
pub fn collinearity_diagnostics(
    xtx: &Mat<f64>,
    vif: Vec<f64>,
) -> Result<DiagnosticsBundle, RegressionError> {
    Ok(DiagnosticsBundle {
        vif,
        condition_number: condition_number(xtx),
        determinant: determinant(xtx)?,
    })
}
