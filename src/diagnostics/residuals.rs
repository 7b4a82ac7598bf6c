//! Standardized residuals.

/// Compute internally standardized residuals: e_i / (s · sqrt(1 − h_ii)).
///
/// `s` is the residual standard error sqrt(MSE). Entries are NaN when MSE is
/// not positive or h_ii is 1 (the residual is then identically zero).
pub fn standardized_residuals(residuals: &[f64], leverage: &[f64], mse: f64) -> Vec<f64> {
    if mse <= 0.0 || !mse.is_finite() {
        return vec![f64::NAN; residuals.len()];
    }

    let s = mse.sqrt();

    residuals
        .iter()
        .zip(leverage.iter())
        .map(|(&e, &h)| {
            let one_minus_h = 1.0 - h;
            if one_minus_h <= 1e-14 {
                f64::NAN
            } else {
                e / (s * one_minus_h.sqrt())
            }
        })
        .collect()
}

/// Indices of observations whose standardized residual exceeds `threshold`
/// in absolute value (commonly 2 or 3).
pub fn residual_outliers(standardized: &[f64], threshold: f64) -> Vec<usize> {
    standardized
        .iter()
        .enumerate()
        .filter(|(_, &r)| r.abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}
