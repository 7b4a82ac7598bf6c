//! Core traits for regression estimators.

use crate::core::{FitResult, IntervalType, PredictionResult, RegressionError};
use faer::{Col, Mat};

/// A regression estimator that can be fit to data.
///
/// Fitting returns a separate fitted model; the estimator itself holds only
/// configuration, so one estimator can serve any number of independent fits.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Predictor matrix of shape (n_samples, n_features), without an
    ///   intercept column
    /// * `y` - Response vector of length n_samples
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Predict the response for new predictor rows.
    ///
    /// `x` has the same columns as the matrix the model was fit on.
    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError>;

    /// Access the fit result.
    fn result(&self) -> &FitResult;

    /// Coefficients aligned with the design columns.
    fn coefficients(&self) -> &[f64] {
        &self.result().coefficients
    }

    /// Intercept, if the model has one.
    fn intercept(&self) -> Option<f64> {
        self.result().intercept()
    }

    /// R² of the fit.
    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }

    /// R² of the model's predictions on new data.
    fn score(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<f64, RegressionError> {
        let predictions = self.predict(x)?;
        if predictions.nrows() != y.nrows() {
            return Err(RegressionError::Shape {
                operation: "score",
                left: (x.nrows(), x.ncols()),
                right: (y.nrows(), 1),
            });
        }
        let n = y.nrows();

        let y_mean: f64 = y.iter().sum::<f64>() / n as f64;

        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let rss: f64 = y
            .iter()
            .zip(predictions.iter())
            .map(|(&yi, &pi)| (yi - pi).powi(2))
            .sum();

        Ok(if tss == 0.0 {
            if rss == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - rss / tss
        })
    }

    /// Predict with confidence or prediction intervals.
    ///
    /// # Arguments
    /// * `x` - Predictor rows
    /// * `interval` - `None` for point predictions only,
    ///   `Some(IntervalType::Confidence)` for the mean response,
    ///   `Some(IntervalType::Prediction)` for new observations
    /// * `alpha` - Significance level (0.05 for 95% intervals)
    fn predict_with_interval(
        &self,
        x: &Mat<f64>,
        interval: Option<IntervalType>,
        alpha: f64,
    ) -> Result<PredictionResult, RegressionError>;
}
