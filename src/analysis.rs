//! Named-column entry point: from a [`Dataset`] to a fitted OLS model.
//!
//! # Example
//!
//! ```rust
//! use regstat::analysis::{analyze, ModelSpec};
//! use regstat::core::FitOptions;
//! use regstat::data::{Column, Dataset};
//!
//! let data = Dataset::new()
//!     .with_column(Column::from_f64("y", &[2.1, 3.9, 6.2, 7.8, 10.1, 12.0]))
//!     .with_column(Column::from_f64("x", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]))
//!     .with_column(Column::categorical_from_strs("site", &["a", "b", "a", "b", "a", "b"]));
//!
//! let spec = ModelSpec::new("y", ["x", "site"]);
//! let analysis = analyze(&data, &spec, &FitOptions::default()).unwrap();
//!
//! assert_eq!(analysis.result().term_names, vec!["(Intercept)", "x", "site[b]"]);
//! ```

use crate::core::{FitOptions, FitResult, RegressionError};
use crate::data::{assemble_design, Dataset};
use crate::solvers::{FittedOls, FittedRegressor, OlsRegressor};

/// Which columns to regress on which.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec {
    /// Response column name.
    pub response: String,
    /// Predictor column names, numeric or categorical.
    pub predictors: Vec<String>,
    /// Overrides `FitOptions::with_intercept` when set.
    pub include_intercept: Option<bool>,
}

impl ModelSpec {
    pub fn new<I, S>(response: impl Into<String>, predictors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            response: response.into(),
            predictors: predictors.into_iter().map(Into::into).collect(),
            include_intercept: None,
        }
    }

    /// Fit with or without an intercept regardless of the options.
    pub fn include_intercept(mut self, include: bool) -> Self {
        self.include_intercept = Some(include);
        self
    }
}

/// A fitted model together with the specification that produced it.
#[derive(Debug, Clone)]
pub struct Analysis {
    spec: ModelSpec,
    fitted: FittedOls,
}

impl Analysis {
    pub fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    /// The fitted model, for prediction on new design rows.
    pub fn fitted(&self) -> &FittedOls {
        &self.fitted
    }

    pub fn result(&self) -> &FitResult {
        self.fitted.result()
    }

    pub fn into_result(self) -> FitResult {
        self.fitted.into_result()
    }
}

/// Resolve, encode, filter and fit.
///
/// Categorical predictors are dummy-encoded against every row before
/// incomplete rows are removed according to `options.na_action`.
pub fn analyze(
    dataset: &Dataset,
    spec: &ModelSpec,
    options: &FitOptions,
) -> Result<Analysis, RegressionError> {
    let design = assemble_design(dataset, &spec.response, &spec.predictors)?;

    let mut options = options.clone();
    if let Some(include) = spec.include_intercept {
        options.with_intercept = include;
    }

    log::debug!(
        "analyze: response '{}' on {} predictor column(s) from {} variable(s)",
        spec.response,
        design.predictor_names.len(),
        spec.predictors.len()
    );

    let fitted =
        OlsRegressor::new(options).fit_named(&design.x, &design.y, &design.predictor_names)?;

    Ok(Analysis {
        spec: spec.clone(),
        fitted,
    })
}
