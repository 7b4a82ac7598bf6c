//! Error taxonomy shared by the kernel, the estimator and data preparation.

use super::na_action::NaError;
use super::options::OptionsError;
use thiserror::Error;

/// Errors that can occur while preparing data or fitting a regression.
#[derive(Debug, Error)]
pub enum RegressionError {
    /// Operand dimensions do not agree (`(rows, cols)` for both sides).
    #[error("shape mismatch in {operation}: left operand is {left:?}, right operand is {right:?}")]
    Shape {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A Gauss-Jordan pivot fell below the tolerance.
    #[error(
        "matrix is singular or nearly singular (pivot {pivot:e} in column {column}); \
         the predictors are probably perfectly collinear"
    )]
    SingularMatrix { column: usize, pivot: f64 },

    /// Too few observations for the number of parameters, or nothing to fit.
    #[error("insufficient data: {n} observations for {k} parameters ({reason})")]
    InsufficientData {
        n: usize,
        k: usize,
        reason: &'static str,
    },

    /// A response or predictor column is absent or unassigned.
    #[error("missing variable: {0}")]
    MissingVariable(String),

    /// The response column is categorical.
    #[error("response variable '{0}' must be numeric")]
    NonNumericResponse(String),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error(transparent)]
    Na(#[from] NaError),
}

impl RegressionError {
    pub(crate) fn shape(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        Self::Shape {
            operation,
            left,
            right,
        }
    }
}
