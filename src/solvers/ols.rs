//! Ordinary Least Squares regression solver.

use crate::core::{
    check_alpha, FitOptions, FitOptionsBuilder, FitResult, IntervalType, NaHandler,
    PredictionResult, RegressionError, INTERCEPT_TERM,
};
use crate::diagnostics::{
    collinearity_diagnostics, compute_leverage, standardized_residuals,
    variance_inflation_factor,
};
use crate::inference::{
    compute_prediction_intervals, CoefficientInference, FitStatistics, SumsOfSquares,
};
use crate::linalg::{invert, multiply, multiply_vec, transpose, with_intercept_column};
use crate::solvers::traits::{FittedRegressor, Regressor};
use faer::{Col, Mat};

/// Raw least-squares solution of the normal equations for one design matrix.
#[derive(Debug, Clone)]
pub struct LeastSquaresEstimate {
    /// β = (X'X)⁻¹X'y
    pub coefficients: Col<f64>,
    /// ŷ = Xβ
    pub fitted_values: Col<f64>,
    /// e = y − ŷ
    pub residuals: Col<f64>,
    /// X'X
    pub xtx: Mat<f64>,
    /// (X'X)⁻¹
    pub xtx_inverse: Mat<f64>,
}

/// Solve the normal equations for `design` (already carrying any intercept
/// column) and `y`.
///
/// # Errors
/// - `Shape` if `design` and `y` disagree on the number of rows
/// - `SingularMatrix` if X'X cannot be inverted at `tolerance`
pub fn estimate(
    design: &Mat<f64>,
    y: &Col<f64>,
    tolerance: f64,
) -> Result<LeastSquaresEstimate, RegressionError> {
    if design.nrows() != y.nrows() {
        return Err(RegressionError::shape(
            "estimate",
            (design.nrows(), design.ncols()),
            (y.nrows(), 1),
        ));
    }

    let xt = transpose(design);
    let xtx = multiply(&xt, design)?;
    let xtx_inverse = invert(&xtx, tolerance)?;
    let xty = multiply_vec(&xt, y)?;
    let coefficients = multiply_vec(&xtx_inverse, &xty)?;

    let fitted_values = multiply_vec(design, &coefficients)?;
    let residuals = Col::from_fn(y.nrows(), |i| y[i] - fitted_values[i]);

    Ok(LeastSquaresEstimate {
        coefficients,
        fitted_values,
        residuals,
        xtx,
        xtx_inverse,
    })
}

/// Default predictor labels `x1, x2, …`.
fn default_predictor_names(p: usize) -> Vec<String> {
    (1..=p).map(|j| format!("x{}", j)).collect()
}

/// Ordinary Least Squares regression estimator.
///
/// Solves the normal equations with Gauss-Jordan inversion of X'X. A design
/// that is perfectly collinear fails with `SingularMatrix` instead of
/// returning ill-defined coefficients.
///
/// # Example
///
/// ```rust
/// use regstat::solvers::{FittedRegressor, OlsRegressor, Regressor};
/// use faer::{Col, Mat};
///
/// let x = Mat::from_fn(20, 2, |i, j| ((i * (j + 2)) % 7) as f64 + i as f64 * 0.5);
/// let y = Col::from_fn(20, |i| 1.0 + 2.0 * x[(i, 0)] - 0.5 * x[(i, 1)]);
///
/// let fitted = OlsRegressor::builder()
///     .with_intercept(true)
///     .build()
///     .fit(&x, &y)
///     .unwrap();
///
/// assert!((fitted.r_squared() - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OlsRegressor {
    options: FitOptions,
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given options.
    pub fn new(options: FitOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }

    /// Options this regressor fits with.
    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    /// Fit the model, labelling the predictor columns with `predictor_names`.
    ///
    /// Rows with a NaN in `y` or `x` are handled according to the configured
    /// `NaAction` before anything else happens.
    pub fn fit_named(
        &self,
        x: &Mat<f64>,
        y: &Col<f64>,
        predictor_names: &[String],
    ) -> Result<FittedOls, RegressionError> {
        self.options.validate()?;

        if x.nrows() != y.nrows() {
            return Err(RegressionError::shape(
                "fit",
                (x.nrows(), x.ncols()),
                (y.nrows(), 1),
            ));
        }
        if predictor_names.len() != x.ncols() {
            return Err(RegressionError::shape(
                "term names",
                (x.nrows(), x.ncols()),
                (predictor_names.len(), 1),
            ));
        }

        let na = NaHandler::process(x, y, self.options.na_action)?;
        let x = &na.x_clean;
        let y = &na.y_clean;

        let include_intercept = self.options.with_intercept;
        let n = y.nrows();
        let k = x.ncols() + usize::from(include_intercept);

        if n < k + 2 {
            return Err(RegressionError::InsufficientData {
                n,
                k,
                reason: "need at least 2 residual degrees of freedom",
            });
        }

        let df_model = k - usize::from(include_intercept);
        let df_residual = n - k;
        if df_model < 1 {
            return Err(RegressionError::InsufficientData {
                n,
                k,
                reason: "model has no predictor columns",
            });
        }

        let design = if include_intercept {
            with_intercept_column(x)
        } else {
            x.clone()
        };

        let est = estimate(&design, y, self.options.pivot_tolerance)?;

        let ss = SumsOfSquares::compute(y, &est.fitted_values, &est.residuals, include_intercept);
        let stats = FitStatistics::compute(&ss, n, k, df_model, df_residual, include_intercept);

        let coefficients: Vec<f64> = est.coefficients.iter().copied().collect();
        let inference = CoefficientInference::compute(
            &coefficients,
            &est.xtx_inverse,
            stats.mse,
            df_residual as f64,
            self.options.alpha,
        );

        let vif = if self.options.compute_vif {
            variance_inflation_factor(x, include_intercept, self.options.pivot_tolerance)
        } else {
            vec![f64::NAN; k]
        };
        let collinearity = collinearity_diagnostics(&est.xtx, vif)?;

        let residuals: Vec<f64> = est.residuals.iter().copied().collect();
        let leverage = compute_leverage(&design, &est.xtx_inverse);
        let std_resid = standardized_residuals(&residuals, &leverage, stats.mse);

        let mut term_names = Vec::with_capacity(k);
        if include_intercept {
            term_names.push(INTERCEPT_TERM.to_string());
        }
        term_names.extend(predictor_names.iter().cloned());

        log::debug!(
            "OLS fit: n = {}, k = {}, R² = {:.6}, F = {:.4}",
            n,
            k,
            stats.r_squared,
            stats.f_stat
        );

        let result = FitResult {
            term_names,
            coefficients,
            fitted_values: est.fitted_values.iter().copied().collect(),
            residuals,
            include_intercept,
            n,
            k,
            df_model,
            df_residual,
            ssr: ss.ssr,
            sse: ss.sse,
            tss: ss.tss,
            r_squared: stats.r_squared,
            adj_r_squared: stats.adj_r_squared,
            mse: stats.mse,
            rmse: stats.rmse,
            f_stat: stats.f_stat,
            f_p_value: stats.f_p_value,
            log_likelihood: stats.log_likelihood,
            aic: stats.aic,
            aicc: stats.aicc,
            bic: stats.bic,
            standard_errors: inference.standard_errors,
            t_stats: inference.t_stats,
            p_values: inference.p_values,
            conf_int_lower: inference.conf_int_lower,
            conf_int_upper: inference.conf_int_upper,
            alpha: self.options.alpha,
            vif: collinearity.vif,
            condition_number: collinearity.condition_number,
            xtx_determinant: collinearity.determinant,
            leverage,
            standardized_residuals: std_resid,
            na_info: Some(na.na_info),
        };

        Ok(FittedOls {
            options: self.options.clone(),
            result,
            xtx_inverse: est.xtx_inverse,
        })
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        self.fit_named(x, y, &default_predictor_names(x.ncols()))
    }
}

/// A fitted OLS regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    options: FitOptions,
    result: FitResult,
    /// (X'X)⁻¹ of the fitted design, kept for prediction intervals.
    xtx_inverse: Mat<f64>,
}

impl FittedOls {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    /// (X'X)⁻¹ of the fitted design.
    pub fn xtx_inverse(&self) -> &Mat<f64> {
        &self.xtx_inverse
    }

    /// Coefficient covariance matrix (X'X)⁻¹ · MSE.
    pub fn covariance_matrix(&self) -> Mat<f64> {
        let mse = self.result.mse;
        Mat::from_fn(self.xtx_inverse.nrows(), self.xtx_inverse.ncols(), |i, j| {
            self.xtx_inverse[(i, j)] * mse
        })
    }

    /// Consume the model, keeping only its result.
    pub fn into_result(self) -> FitResult {
        self.result
    }

    /// Design rows for new predictors, with the intercept column if needed.
    fn design_for(&self, x: &Mat<f64>) -> Result<Mat<f64>, RegressionError> {
        let n_predictors = self.result.k - usize::from(self.result.include_intercept);
        if x.ncols() != n_predictors {
            return Err(RegressionError::shape(
                "predict",
                (x.nrows(), x.ncols()),
                (n_predictors, 1),
            ));
        }
        Ok(if self.result.include_intercept {
            with_intercept_column(x)
        } else {
            x.clone()
        })
    }
}

impl FittedRegressor for FittedOls {
    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        let design = self.design_for(x)?;
        let beta = Col::from_fn(self.result.k, |j| self.result.coefficients[j]);
        multiply_vec(&design, &beta)
    }

    fn result(&self) -> &FitResult {
        &self.result
    }

    fn predict_with_interval(
        &self,
        x: &Mat<f64>,
        interval: Option<IntervalType>,
        alpha: f64,
    ) -> Result<PredictionResult, RegressionError> {
        check_alpha(alpha)?;
        let design = self.design_for(x)?;
        let beta = Col::from_fn(self.result.k, |j| self.result.coefficients[j]);
        let predictions: Vec<f64> = multiply_vec(&design, &beta)?.iter().copied().collect();

        Ok(match interval {
            None => PredictionResult::point_only(predictions),
            Some(interval_type) => compute_prediction_intervals(
                &design,
                &self.xtx_inverse,
                predictions,
                self.result.mse,
                self.result.df_residual as f64,
                alpha,
                interval_type,
            ),
        })
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    builder: FitOptionsBuilder,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include an intercept term.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.builder = self.builder.with_intercept(include);
        self
    }

    /// Set the significance level for confidence intervals.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.builder = self.builder.alpha(alpha);
        self
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Set the pivot tolerance for Gauss-Jordan inversion.
    pub fn pivot_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.pivot_tolerance(tol);
        self
    }

    /// Set whether VIF values are computed.
    pub fn compute_vif(mut self, compute: bool) -> Self {
        self.builder = self.builder.compute_vif(compute);
        self
    }

    /// Set the missing-value policy.
    pub fn na_action(mut self, action: crate::core::NaAction) -> Self {
        self.builder = self.builder.na_action(action);
        self
    }

    /// Build the OLS regressor. Options are validated when fitting.
    pub fn build(self) -> OlsRegressor {
        OlsRegressor::new(self.builder.build_unchecked())
    }
}
