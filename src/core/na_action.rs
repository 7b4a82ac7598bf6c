//! Complete-case handling of missing values.
//!
//! Missing values are represented as NaN once columns have been encoded into a
//! numeric design matrix. A row is kept only when the response and every
//! design column are present. Three policies decide what happens to the rows
//! that are not complete:
//! - `Omit`: drop them; outputs are shorter than the input
//! - `Exclude`: drop them, but remember their positions so outputs can be
//!   padded back to the input length
//! - `Fail`: refuse to fit if any row is incomplete
//!
//! # Example
//!
//! ```
//! use regstat::core::{NaAction, NaHandler};
//! use faer::{Col, Mat};
//!
//! let x = Mat::from_fn(5, 2, |i, j| if i == 2 { f64::NAN } else { (i + j) as f64 });
//! let y = Col::from_fn(5, |i| if i == 3 { f64::NAN } else { i as f64 });
//!
//! let result = NaHandler::process(&x, &y, NaAction::Omit).unwrap();
//! assert_eq!(result.x_clean.nrows(), 3); // rows 0, 1, 4 kept
//! ```

use faer::{Col, Mat};
use thiserror::Error;

/// Action to take when a row has a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NaAction {
    /// Remove incomplete rows. Residuals and fitted values cover kept rows only.
    #[default]
    Omit,

    /// Remove incomplete rows, but pad expanded outputs with NaN at their
    /// original positions.
    Exclude,

    /// Return an error if any row is incomplete.
    Fail,
}

/// Errors raised by missing-value handling.
#[derive(Debug, Error)]
pub enum NaError {
    /// Missing values found while using `NaAction::Fail`.
    #[error("missing values found in data: {n_na} rows are incomplete")]
    NaValuesPresent { n_na: usize },

    /// Every row had at least one missing value.
    #[error("all observations contain missing values")]
    AllNa,

    /// Predictor matrix and response disagree on the number of rows.
    #[error("predictor matrix has {x_rows} rows but response has {y_rows}")]
    DimensionMismatch { x_rows: usize, y_rows: usize },
}

/// Bookkeeping about which rows survived complete-case filtering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NaInfo {
    /// Number of rows before filtering.
    pub n_original: usize,

    /// Number of complete rows.
    pub n_clean: usize,

    /// `true` for rows that were dropped.
    pub na_mask: Vec<bool>,

    /// Original indices of the kept rows, in order.
    pub kept_indices: Vec<usize>,

    /// Number of dropped rows.
    pub n_removed: usize,

    /// Policy that produced this info.
    pub action: NaAction,
}

impl NaInfo {
    /// Info for data where every row is complete.
    pub fn no_na(n_observations: usize, action: NaAction) -> Self {
        Self {
            n_original: n_observations,
            n_clean: n_observations,
            na_mask: vec![false; n_observations],
            kept_indices: (0..n_observations).collect(),
            n_removed: 0,
            action,
        }
    }

    /// Check if any rows were removed.
    pub fn has_removed(&self) -> bool {
        self.n_removed > 0
    }

    /// Check if outputs should be padded back to the original length.
    pub fn needs_expansion(&self) -> bool {
        self.action == NaAction::Exclude && self.n_removed > 0
    }

    /// Expand per-row values to the original length, NaN in dropped rows.
    ///
    /// Values are returned unchanged unless the policy was `Exclude`.
    pub fn expand(&self, clean_values: &[f64]) -> Vec<f64> {
        if !self.needs_expansion() {
            return clean_values.to_vec();
        }

        let mut expanded = vec![f64::NAN; self.n_original];
        for (&orig_idx, &value) in self.kept_indices.iter().zip(clean_values) {
            expanded[orig_idx] = value;
        }
        expanded
    }
}

/// Result of complete-case filtering.
#[derive(Debug, Clone)]
pub struct NaResult {
    /// Predictor matrix with incomplete rows removed.
    pub x_clean: Mat<f64>,

    /// Response with incomplete rows removed.
    pub y_clean: Col<f64>,

    /// Which rows were kept.
    pub na_info: NaInfo,
}

/// Handler for missing value processing.
pub struct NaHandler;

impl NaHandler {
    /// Filter `x` and `y` down to complete rows according to `action`.
    ///
    /// # Errors
    ///
    /// - `NaError::NaValuesPresent` if `action` is `Fail` and a row is incomplete
    /// - `NaError::AllNa` if no row is complete
    /// - `NaError::DimensionMismatch` if `x` and `y` have different row counts
    pub fn process(x: &Mat<f64>, y: &Col<f64>, action: NaAction) -> Result<NaResult, NaError> {
        if x.nrows() != y.nrows() {
            return Err(NaError::DimensionMismatch {
                x_rows: x.nrows(),
                y_rows: y.nrows(),
            });
        }

        let n_samples = y.nrows();
        let n_features = x.ncols();

        let na_mask = Self::find_na_rows(x, y);
        let n_na = na_mask.iter().filter(|&&v| v).count();

        if n_na > 0 && action == NaAction::Fail {
            return Err(NaError::NaValuesPresent { n_na });
        }

        if n_na == 0 {
            return Ok(NaResult {
                x_clean: x.clone(),
                y_clean: y.clone(),
                na_info: NaInfo::no_na(n_samples, action),
            });
        }

        if n_na == n_samples {
            return Err(NaError::AllNa);
        }

        let kept_indices: Vec<usize> = na_mask
            .iter()
            .enumerate()
            .filter_map(|(i, &had_na)| if !had_na { Some(i) } else { None })
            .collect();

        let n_clean = kept_indices.len();
        let x_clean = Mat::from_fn(n_clean, n_features, |i, j| x[(kept_indices[i], j)]);
        let y_clean = Col::from_fn(n_clean, |i| y[kept_indices[i]]);

        log::debug!(
            "complete-case filtering dropped {} of {} rows",
            n_na,
            n_samples
        );

        Ok(NaResult {
            x_clean,
            y_clean,
            na_info: NaInfo {
                n_original: n_samples,
                n_clean,
                na_mask,
                kept_indices,
                n_removed: n_na,
                action,
            },
        })
    }

    /// Mark rows with a missing value in `y` or any column of `x`.
    fn find_na_rows(x: &Mat<f64>, y: &Col<f64>) -> Vec<bool> {
        (0..y.nrows())
            .map(|i| y[i].is_nan() || (0..x.ncols()).any(|j| x[(i, j)].is_nan()))
            .collect()
    }
}
