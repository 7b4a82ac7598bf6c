//! Fit options and configuration.

use super::na_action::NaAction;
use thiserror::Error;

/// Default pivot tolerance for Gauss-Jordan inversion.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-10;

/// Configuration options for an OLS fit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitOptions {
    /// Whether to include an intercept term (default: true).
    pub with_intercept: bool,
    /// Significance level for confidence intervals (default: 0.05).
    pub alpha: f64,
    /// Pivot tolerance for matrix inversion, scaled by the largest entry.
    pub pivot_tolerance: f64,
    /// Whether to run the auxiliary VIF regressions (default: true).
    pub compute_vif: bool,
    /// How rows with missing values are treated (default: `Omit`).
    pub na_action: NaAction,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            with_intercept: true,
            alpha: 0.05,
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            compute_vif: true,
            na_action: NaAction::Omit,
        }
    }
}

/// Errors that can occur when validating fit options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("alpha must be in (0, 1), got {0}")]
    InvalidAlpha(f64),
    #[error("pivot_tolerance must be positive and finite, got {0}")]
    InvalidPivotTolerance(f64),
}

/// Reject a significance level outside (0, 1).
pub fn check_alpha(alpha: f64) -> Result<(), OptionsError> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(OptionsError::InvalidAlpha(alpha))
    }
}

impl FitOptions {
    /// Create a new builder for fit options.
    pub fn builder() -> FitOptionsBuilder {
        FitOptionsBuilder::default()
    }

    /// Confidence level matching `alpha` (e.g. 0.95 for alpha = 0.05).
    pub fn confidence_level(&self) -> f64 {
        1.0 - self.alpha
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        check_alpha(self.alpha)?;
        if !(self.pivot_tolerance > 0.0 && self.pivot_tolerance.is_finite()) {
            return Err(OptionsError::InvalidPivotTolerance(self.pivot_tolerance));
        }
        Ok(())
    }
}

/// Builder for `FitOptions`.
#[derive(Debug, Clone, Default)]
pub struct FitOptionsBuilder {
    options: FitOptions,
}

impl FitOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include an intercept term.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.options.with_intercept = include;
        self
    }

    /// Set the significance level used for confidence intervals.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.options.alpha = alpha;
        self
    }

    /// Set the confidence level (shorthand for `alpha(1.0 - level)`).
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.alpha = 1.0 - level;
        self
    }

    /// Set the pivot tolerance for matrix inversion.
    pub fn pivot_tolerance(mut self, tol: f64) -> Self {
        self.options.pivot_tolerance = tol;
        self
    }

    /// Set whether VIF values are computed.
    pub fn compute_vif(mut self, compute: bool) -> Self {
        self.options.compute_vif = compute;
        self
    }

    /// Set the missing-value policy.
    pub fn na_action(mut self, action: NaAction) -> Self {
        self.options.na_action = action;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<FitOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> FitOptions {
        self.options
    }
}
