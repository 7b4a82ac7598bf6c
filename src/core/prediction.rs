//! Prediction types for interval estimation.

/// Kind of interval around a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntervalType {
    /// Interval for the mean response E[Y | x₀]; covers coefficient
    /// uncertainty only.
    Confidence,

    /// Interval for a new observation Y | x₀; adds the residual variance.
    #[default]
    Prediction,
}

/// Point predictions with optional interval bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictionResult {
    /// Point predictions.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub fit: Vec<f64>,
    /// Lower bounds (equal to `fit` when no interval was requested).
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub lower: Vec<f64>,
    /// Upper bounds (equal to `fit` when no interval was requested).
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub upper: Vec<f64>,
    /// Standard error of the mean response at each row.
    #[cfg_attr(feature = "serde", serde(with = "crate::core::float_serde::vec"))]
    pub se_fit: Vec<f64>,
    /// Interval kind, `None` for point predictions only.
    pub interval: Option<IntervalType>,
}

impl PredictionResult {
    /// Point predictions without intervals.
    pub fn point_only(fit: Vec<f64>) -> Self {
        let n = fit.len();
        Self {
            lower: fit.clone(),
            upper: fit.clone(),
            fit,
            se_fit: vec![0.0; n],
            interval: None,
        }
    }

    /// Number of predictions.
    pub fn len(&self) -> usize {
        self.fit.len()
    }

    /// Returns true if there are no predictions.
    pub fn is_empty(&self) -> bool {
        self.fit.is_empty()
    }
}
