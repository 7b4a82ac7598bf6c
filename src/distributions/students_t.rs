//! Student's t distribution.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Standard t distribution with `df` degrees of freedom, if `df` is valid.
fn standard(df: f64) -> Option<StudentsT> {
    StudentsT::new(0.0, 1.0, df).ok()
}

/// Upper-tail probability P(T > t) for `df` degrees of freedom.
pub fn t_sf(t: f64, df: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    standard(df).map_or(f64::NAN, |d| d.sf(t))
}

/// Cumulative distribution function P(T ≤ t).
pub fn t_cdf(t: f64, df: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    standard(df).map_or(f64::NAN, |d| d.cdf(t))
}

/// Two-tailed p-value 2·P(T > |t|).
pub fn t_two_tailed_p(t: f64, df: f64) -> f64 {
    (2.0 * t_sf(t.abs(), df)).min(1.0)
}

/// Quantile function: the `t` with P(T ≤ t) = p. NaN outside (0, 1).
pub fn t_quantile(p: f64, df: f64) -> f64 {
    if !(p > 0.0 && p < 1.0) {
        return f64::NAN;
    }
    standard(df).map_or(f64::NAN, |d| d.inverse_cdf(p))
}

/// Two-sided critical value t_{1−α/2, df}.
pub fn t_critical(alpha: f64, df: f64) -> f64 {
    t_quantile(1.0 - alpha / 2.0, df)
}
