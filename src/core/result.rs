//! Regression result structures.

use super::na_action::NaInfo;
use crate::diagnostics::DiagnosticsBundle;

/// Label used for the intercept column.
pub const INTERCEPT_TERM: &str = "(Intercept)";

/// Complete result from an OLS fit.
///
/// Every per-coefficient vector is aligned with the design matrix columns, so
/// with an intercept index 0 is the intercept. Per-row vectors cover the rows
/// that entered the fit; use [`FitResult::residuals_expanded`] to map them back
/// to the original rows when incomplete rows were excluded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitResult {
    // ========== Core Results ==========
    /// Label for each design column.
    pub term_names: Vec<String>,

    /// Estimated coefficients.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub coefficients: Vec<f64>,

    /// Fitted values (ŷ = Xβ).
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub fitted_values: Vec<f64>,

    /// Residuals (y − ŷ).
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub residuals: Vec<f64>,

    /// Whether the design matrix has a leading ones column.
    pub include_intercept: bool,

    // ========== Dimensions ==========
    /// Number of observations used in the fit.
    pub n: usize,

    /// Number of design columns (parameters).
    pub k: usize,

    /// Model degrees of freedom: k − 1 with intercept, else k.
    pub df_model: usize,

    /// Residual degrees of freedom: n − k.
    pub df_residual: usize,

    // ========== Sums of Squares ==========
    /// Explained sum of squares.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub ssr: f64,

    /// Residual sum of squares.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub sse: f64,

    /// Total sum of squares.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub tss: f64,

    // ========== Fit Statistics ==========
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub r_squared: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub adj_r_squared: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub mse: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub rmse: f64,

    /// Overall F-statistic.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub f_stat: f64,

    /// Upper-tail p-value of the F-statistic.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub f_p_value: f64,

    // ========== Information Criteria ==========
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub log_likelihood: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub aic: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub aicc: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub bic: f64,

    // ========== Coefficient Inference ==========
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub standard_errors: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub t_stats: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub p_values: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub conf_int_lower: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub conf_int_upper: Vec<f64>,

    /// Significance level used for the intervals.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub alpha: f64,

    // ========== Diagnostics ==========
    /// Variance inflation factors; NaN for the intercept or when undefined.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub vif: Vec<f64>,

    /// Condition number of X'X.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub condition_number: f64,

    /// Determinant of X'X.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde"))]
    pub xtx_determinant: f64,

    /// Diagonal of the hat matrix.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub leverage: Vec<f64>,

    /// Residuals scaled by s·√(1 − hᵢᵢ).
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub standardized_residuals: Vec<f64>,

    // ========== NA Handling Information ==========
    /// Which rows entered the fit, when data went through complete-case filtering.
    pub na_info: Option<NaInfo>,
}

impl FitResult {
    /// Confidence level used for intervals.
    pub fn confidence_level(&self) -> f64 {
        1.0 - self.alpha
    }

    /// Intercept estimate, if the model has one.
    pub fn intercept(&self) -> Option<f64> {
        if self.include_intercept {
            self.coefficients.first().copied()
        } else {
            None
        }
    }

    /// Coefficients of the non-intercept columns.
    pub fn slopes(&self) -> &[f64] {
        if self.include_intercept {
            &self.coefficients[1..]
        } else {
            &self.coefficients
        }
    }

    /// Look up the position of a term by name.
    pub fn term_index(&self, name: &str) -> Option<usize> {
        self.term_names.iter().position(|t| t == name)
    }

    /// Coefficient for a named term.
    pub fn coefficient(&self, name: &str) -> Option<f64> {
        self.term_index(name).map(|i| self.coefficients[i])
    }

    /// Collinearity diagnostics for this fit.
    pub fn diagnostics(&self) -> DiagnosticsBundle {
        DiagnosticsBundle {
            vif: self.vif.clone(),
            condition_number: self.condition_number,
            determinant: self.xtx_determinant,
        }
    }

    /// Residuals padded back to the original row count (NaN in dropped rows).
    pub fn residuals_expanded(&self) -> Vec<f64> {
        match &self.na_info {
            Some(info) => info.expand(&self.residuals),
            None => self.residuals.clone(),
        }
    }

    /// Fitted values padded back to the original row count (NaN in dropped rows).
    pub fn fitted_expanded(&self) -> Vec<f64> {
        match &self.na_info {
            Some(info) => info.expand(&self.fitted_values),
            None => self.fitted_values.clone(),
        }
    }

    /// Number of rows dropped by complete-case filtering.
    pub fn n_na_removed(&self) -> usize {
        self.na_info.as_ref().map_or(0, |info| info.n_removed)
    }

    /// Number of rows before complete-case filtering.
    pub fn n_original_observations(&self) -> usize {
        self.na_info.as_ref().map_or(self.n, |info| info.n_original)
    }
}
