//! Coefficient inference calculations.

use crate::distributions::{t_critical, t_two_tailed_p};
use faer::Mat;

/// Standard errors, t-tests and confidence intervals for a coefficient vector.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientInference {
    pub standard_errors: Vec<f64>,
    pub t_stats: Vec<f64>,
    pub p_values: Vec<f64>,
    pub conf_int_lower: Vec<f64>,
    pub conf_int_upper: Vec<f64>,
}

impl CoefficientInference {
    /// Run every coefficient-level test for one fit.
    ///
    /// `xtx_inverse` is (X'X)⁻¹ for the same design the coefficients came from.
    pub fn compute(
        coefficients: &[f64],
        xtx_inverse: &Mat<f64>,
        mse: f64,
        df_residual: f64,
        alpha: f64,
    ) -> Self {
        let standard_errors = Self::standard_errors(xtx_inverse, mse);
        let t_stats = Self::t_statistics(coefficients, &standard_errors);
        let p_values = Self::p_values(&t_stats, df_residual);
        let (conf_int_lower, conf_int_upper) =
            Self::confidence_intervals(coefficients, &standard_errors, df_residual, alpha);

        Self {
            standard_errors,
            t_stats,
            p_values,
            conf_int_lower,
            conf_int_upper,
        }
    }

    /// SE(β_j) = sqrt(σ² · (X'X)⁻¹_jj)
    pub fn standard_errors(xtx_inverse: &Mat<f64>, mse: f64) -> Vec<f64> {
        (0..xtx_inverse.nrows())
            .map(|j| {
                let var = mse * xtx_inverse[(j, j)];
                if var >= 0.0 {
                    var.sqrt()
                } else {
                    f64::NAN
                }
            })
            .collect()
    }

    /// t_j = β_j / SE(β_j); NaN when the standard error is zero or undefined.
    pub fn t_statistics(coefficients: &[f64], std_errors: &[f64]) -> Vec<f64> {
        coefficients
            .iter()
            .zip(std_errors)
            .map(|(&b, &se)| {
                if se.is_nan() || se == 0.0 {
                    f64::NAN
                } else {
                    b / se
                }
            })
            .collect()
    }

    /// p_j = 2 · P(T > |t_j|) where T ~ t(df)
    pub fn p_values(t_statistics: &[f64], df: f64) -> Vec<f64> {
        t_statistics
            .iter()
            .map(|&t| {
                if df <= 0.0 || t.is_nan() {
                    f64::NAN
                } else {
                    t_two_tailed_p(t, df)
                }
            })
            .collect()
    }

    /// CI_j = β_j ± t_{1−α/2, df} · SE(β_j)
    pub fn confidence_intervals(
        coefficients: &[f64],
        std_errors: &[f64],
        df: f64,
        alpha: f64,
    ) -> (Vec<f64>, Vec<f64>) {
        let t_crit = if df > 0.0 {
            t_critical(alpha, df)
        } else {
            f64::NAN
        };

        coefficients
            .iter()
            .zip(std_errors)
            .map(|(&b, &se)| {
                let margin = t_crit * se;
                (b - margin, b + margin)
            })
            .unzip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_t_statistics() {
        let t_stats = CoefficientInference::t_statistics(&[1.0, 2.0, 3.0], &[0.5, 0.5, 0.0]);

        assert_relative_eq!(t_stats[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(t_stats[1], 4.0, epsilon = 1e-12);
        assert!(t_stats[2].is_nan());
    }

    #[test]
    fn test_p_values_bounds() {
        let p_vals = CoefficientInference::p_values(&[1.0, -2.0, 3.0, 0.0], 10.0);

        for p in &p_vals {
            assert!(*p >= 0.0 && *p <= 1.0);
        }
        assert_relative_eq!(p_vals[3], 1.0, epsilon = 1e-14);
        assert!(p_vals[0] > p_vals[1]);
        assert!(p_vals[1] > p_vals[2]);
    }

    #[test]
    fn test_standard_errors_from_diagonal() {
        let mut xtx_inv = Mat::zeros(2, 2);
        xtx_inv[(0, 0)] = 0.25;
        xtx_inv[(1, 1)] = 4.0;
        xtx_inv[(0, 1)] = 0.1;
        xtx_inv[(1, 0)] = 0.1;

        let se = CoefficientInference::standard_errors(&xtx_inv, 4.0);
        assert_relative_eq!(se[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(se[1], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_confidence_interval_width() {
        let (lower, upper) = CoefficientInference::confidence_intervals(&[2.0], &[1.0], 10.0, 0.05);
        let t_crit = 2.228138851986274;
        assert_relative_eq!(lower[0], 2.0 - t_crit, epsilon = 1e-8);
        assert_relative_eq!(upper[0], 2.0 + t_crit, epsilon = 1e-8);
    }

    #[test]
    fn test_compute_bundles_everything() {
        let xtx_inv = Mat::from_fn(2, 2, |i, j| if i == j { 1.0 } else { 0.0 });
        let inf = CoefficientInference::compute(&[3.0, -1.0], &xtx_inv, 1.0, 20.0, 0.05);

        assert_eq!(inf.standard_errors, vec![1.0, 1.0]);
        assert_eq!(inf.t_stats, vec![3.0, -1.0]);
        assert!(inf.p_values[0] < 0.01);
        assert!(inf.conf_int_lower[1] < -1.0 && inf.conf_int_upper[1] > -1.0);
    }
}
