//! Model-level fit statistics: sums of squares, R², F-test, information criteria.

use crate::distributions::f_sf;
use faer::Col;
use std::f64::consts::PI;

/// Decomposition of the response variation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumsOfSquares {
    /// Total sum of squares.
    pub tss: f64,
    /// Explained (regression) sum of squares.
    pub ssr: f64,
    /// Residual sum of squares.
    pub sse: f64,
}

impl SumsOfSquares {
    /// Compute TSS, SSR and SSE.
    ///
    /// With `centered` the sums are taken around the mean of `y`; otherwise
    /// around zero, which is the decomposition that holds for a model without
    /// intercept.
    pub fn compute(y: &Col<f64>, fitted: &Col<f64>, residuals: &Col<f64>, centered: bool) -> Self {
        let n = y.nrows();
        let center = if centered && n > 0 {
            y.iter().sum::<f64>() / n as f64
        } else {
            0.0
        };

        let tss = y.iter().map(|&yi| (yi - center).powi(2)).sum();
        let ssr = fitted.iter().map(|&fi| (fi - center).powi(2)).sum();
        let sse = residuals.iter().map(|&r| r.powi(2)).sum();

        Self { tss, ssr, sse }
    }

    /// Coefficient of determination 1 − SSE / TSS (equal to SSR / TSS for a
    /// least-squares fit).
    ///
    /// A constant response has TSS = 0; R² is then 1 for a perfect fit and 0
    /// otherwise.
    pub fn r_squared(&self) -> f64 {
        if self.tss > 0.0 {
            1.0 - self.sse / self.tss
        } else if self.sse < 1e-10 {
            1.0
        } else {
            0.0
        }
    }
}

/// Goodness-of-fit statistics derived from the sums of squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitStatistics {
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub mse: f64,
    pub rmse: f64,
    pub f_stat: f64,
    pub f_p_value: f64,
    pub log_likelihood: f64,
    pub aic: f64,
    pub aicc: f64,
    pub bic: f64,
}

impl FitStatistics {
    /// Compute all model-level statistics for `n` observations and `k`
    /// parameters.
    pub fn compute(
        ss: &SumsOfSquares,
        n: usize,
        k: usize,
        df_model: usize,
        df_residual: usize,
        include_intercept: bool,
    ) -> Self {
        let n_f = n as f64;
        let k_f = k as f64;
        let dfm = df_model as f64;
        let dfr = df_residual as f64;

        let r_squared = ss.r_squared();

        let adj_r_squared = if df_residual > 0 {
            let df_total = if include_intercept { n_f - 1.0 } else { n_f };
            1.0 - (1.0 - r_squared) * df_total / dfr
        } else {
            f64::NAN
        };

        let mse = if df_residual > 0 { ss.sse / dfr } else { f64::NAN };
        let rmse = mse.sqrt();

        let (f_stat, f_p_value) = if df_model > 0 && df_residual > 0 {
            let f = (ss.ssr / dfm) / (ss.sse / dfr);
            if f.is_nan() {
                (f64::NAN, f64::NAN)
            } else {
                (f, f_sf(f, dfm, dfr))
            }
        } else {
            (f64::NAN, f64::NAN)
        };

        let log_likelihood = if n > 0 {
            -0.5 * n_f * ((2.0 * PI).ln() + (ss.sse / n_f).ln() + 1.0)
        } else {
            f64::NAN
        };

        let aic = 2.0 * k_f - 2.0 * log_likelihood;
        let bic = k_f * n_f.ln() - 2.0 * log_likelihood;
        let aicc = if n_f - k_f - 1.0 > 0.0 {
            aic + 2.0 * k_f * (k_f + 1.0) / (n_f - k_f - 1.0)
        } else {
            f64::NAN
        };

        Self {
            r_squared,
            adj_r_squared,
            mse,
            rmse,
            f_stat,
            f_p_value,
            log_likelihood,
            aic,
            aicc,
            bic,
        }
    }
}
