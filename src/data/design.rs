//! Assemble a numeric design from named dataset columns.

use super::encoding::dummy_encode;
use super::{ColumnData, Dataset};
use crate::core::RegressionError;
use faer::{Col, Mat};

/// Response and predictor columns ready for fitting.
///
/// Missing cells are NaN; rows are not yet filtered.
#[derive(Debug, Clone)]
pub struct DesignData {
    /// Predictor matrix without an intercept column.
    pub x: Mat<f64>,
    /// Response vector.
    pub y: Col<f64>,
    /// One label per column of `x`.
    pub predictor_names: Vec<String>,
}

/// Resolve `response` and `predictors` in `dataset` and build the numeric
/// predictor matrix.
///
/// Numeric predictors come first in declared order, followed by the dummy
/// columns of categorical predictors in declared order.
///
/// # Errors
/// - `MissingVariable` if the response name is empty or any name is absent
/// - `NonNumericResponse` if the response is categorical
/// - `Shape` if a predictor's length differs from the response's
pub fn assemble_design(
    dataset: &Dataset,
    response: &str,
    predictors: &[String],
) -> Result<DesignData, RegressionError> {
    if response.trim().is_empty() {
        return Err(RegressionError::MissingVariable(
            "no response variable assigned".to_string(),
        ));
    }

    let response_column = dataset
        .column(response)
        .ok_or_else(|| RegressionError::MissingVariable(response.to_string()))?;
    let y_values: Vec<f64> = match response_column.data() {
        ColumnData::Numeric(values) => values.iter().map(|v| v.unwrap_or(f64::NAN)).collect(),
        ColumnData::Categorical(_) => {
            return Err(RegressionError::NonNumericResponse(response.to_string()))
        }
    };
    let n = y_values.len();

    let mut numeric_names = Vec::new();
    let mut numeric_columns: Vec<Vec<f64>> = Vec::new();
    let mut dummy_names = Vec::new();
    let mut dummy_columns: Vec<Vec<f64>> = Vec::new();

    for name in predictors {
        let column = dataset
            .column(name)
            .ok_or_else(|| RegressionError::MissingVariable(name.clone()))?;
        if column.len() != n {
            return Err(RegressionError::shape("assemble design", (n, 1), (column.len(), 1)));
        }

        match column.data() {
            ColumnData::Numeric(values) => {
                numeric_names.push(name.clone());
                numeric_columns.push(values.iter().map(|v| v.unwrap_or(f64::NAN)).collect());
            }
            ColumnData::Categorical(values) => {
                let encoded = dummy_encode(name, values);
                if encoded.is_empty() {
                    log::debug!(
                        "categorical predictor '{}' has {} level(s) and contributes no columns",
                        name,
                        encoded.levels.len()
                    );
                }
                dummy_names.extend(encoded.names);
                dummy_columns.extend(encoded.columns);
            }
        }
    }

    let first_dummy = numeric_columns.len();
    numeric_names.extend(dummy_names);
    numeric_columns.extend(dummy_columns);

    let x = Mat::from_fn(n, numeric_columns.len(), |i, j| numeric_columns[j][i]);
    let y = Col::from_fn(n, |i| y_values[i]);

    for j in indicators_unused_by_complete_rows(&x, &y, first_dummy) {
        log::warn!(
            "indicator '{}' is zero in every complete row; its level occurs only in rows \
             with missing values and the design will be singular",
            numeric_names[j]
        );
    }

    Ok(DesignData {
        x,
        y,
        predictor_names: numeric_names,
    })
}

/// Indices of columns from `first` onward that are never 1 in a row where
/// `y` and every column of `x` are present.
fn indicators_unused_by_complete_rows(x: &Mat<f64>, y: &Col<f64>, first: usize) -> Vec<usize> {
    let complete: Vec<usize> = (0..y.nrows())
        .filter(|&i| !y[i].is_nan() && (0..x.ncols()).all(|j| !x[(i, j)].is_nan()))
        .collect();
    if complete.is_empty() {
        return Vec::new();
    }

    (first..x.ncols())
        .filter(|&j| complete.iter().all(|&i| x[(i, j)] == 0.0))
        .collect()
}
