//! Distribution functions and coefficient inference tests.

mod common;

use approx::assert_relative_eq;
use common::{generate_linear_data, Lcg};
use faer::Mat;
use regstat::distributions::{f_cdf, f_sf, t_cdf, t_critical, t_quantile, t_two_tailed_p};
use regstat::inference::{CoefficientInference, FitStatistics, SumsOfSquares};
use regstat::solvers::{estimate, FittedRegressor, OlsRegressor, Regressor};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

// ============================================================================
// Student's t
// ============================================================================

#[test]
fn test_t_reference_values() {
    // (t, df, two-tailed p, cdf)
    let cases = [
        (2.0, 5.0, 0.10193947882985836, 0.94903026058507082),
        (1.0, 1.0, 0.5, 0.75),
        (-1.5, 12.0, 0.15945750351320701, 0.079728751756603503),
        (4.0, 30.0, 0.00038184563608375684, 0.99980907718195812),
    ];

    for (t, df, p, cdf) in cases {
        assert_relative_eq!(t_two_tailed_p(t, df), p, max_relative = 1e-10);
        assert_relative_eq!(t_cdf(t, df), cdf, epsilon = 1e-12);
    }
}

#[test]
fn test_t_critical_reference_values() {
    assert_relative_eq!(t_critical(0.05, 3.0), 3.18244630528371, epsilon = 1e-9);
    assert_relative_eq!(t_critical(0.05, 10.0), 2.22813885198627, epsilon = 1e-9);
    assert_relative_eq!(t_critical(0.05, 120.0), 1.97993040508244, epsilon = 1e-9);
    assert_relative_eq!(t_critical(0.01, 20.0), 2.84533970978611, epsilon = 1e-9);
}

#[test]
fn test_t_quantile_inverts_statrs_cdf() {
    let mut rng = Lcg::new(77);
    for _ in 0..30 {
        let df = 1.0 + 60.0 * (rng.next_f64() + 1.0) / 2.0;
        let p = 0.01 + 0.98 * (rng.next_f64() + 1.0) / 2.0;

        let q = t_quantile(p, df);
        let reference = StudentsT::new(0.0, 1.0, df).unwrap();
        assert_relative_eq!(reference.cdf(q), p, epsilon = 1e-9);
    }
}

#[test]
fn test_t_quantile_out_of_range() {
    assert!(t_quantile(0.0, 5.0).is_nan());
    assert!(t_quantile(1.0, 5.0).is_nan());
    assert!(t_quantile(0.5, 0.0).is_nan());
    assert_eq!(t_quantile(0.5, 5.0), 0.0);
}

#[test]
fn test_t_critical_decreases_with_df() {
    let mut previous = f64::INFINITY;
    for df in [1.0, 2.0, 5.0, 10.0, 30.0, 100.0, 1000.0] {
        let t = t_critical(0.05, df);
        assert!(t < previous);
        previous = t;
    }
    assert!(previous > 1.959963984540054);
}

// ============================================================================
// Fisher-Snedecor
// ============================================================================

#[test]
fn test_f_reference_values() {
    assert_relative_eq!(f_sf(3.5, 3.0, 20.0), 0.034493103885124387, max_relative = 1e-10);
    assert_relative_eq!(f_sf(1.0, 2.0, 2.0), 0.5, epsilon = 1e-14);
    assert_relative_eq!(f_sf(10.0, 1.0, 5.0), 0.025031015818452946, max_relative = 1e-10);
    assert_relative_eq!(f_sf(4.102821015130399, 2.0, 10.0), 0.05, epsilon = 1e-10);
}

#[test]
fn test_f_cdf_matches_statrs() {
    let reference = FisherSnedecor::new(4.0, 17.0).unwrap();
    for f in [0.1, 0.5, 1.0, 2.0, 3.7, 8.0] {
        assert_relative_eq!(f_cdf(f, 4.0, 17.0), reference.cdf(f), epsilon = 1e-12);
        assert_relative_eq!(f_cdf(f, 4.0, 17.0) + f_sf(f, 4.0, 17.0), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_f_edge_values() {
    assert_eq!(f_sf(0.0, 2.0, 5.0), 1.0);
    assert_eq!(f_sf(f64::INFINITY, 2.0, 5.0), 0.0);
    assert!(f_sf(f64::NAN, 2.0, 5.0).is_nan());
}

// ============================================================================
// Coefficient inference
// ============================================================================

#[test]
fn test_coefficient_inference_matches_fit() {
    let (x, y, _) = generate_linear_data(40, 3, 1.0, 0.4, 55);
    let fitted = OlsRegressor::default().fit(&x, &y).unwrap();
    let r = fitted.result();

    let inference = CoefficientInference::compute(
        &r.coefficients,
        fitted.xtx_inverse(),
        r.mse,
        r.df_residual as f64,
        r.alpha,
    );

    assert_eq!(inference.standard_errors, r.standard_errors);
    assert_eq!(inference.p_values, r.p_values);

    let t = t_critical(r.alpha, r.df_residual as f64);
    for j in 0..r.k {
        assert_relative_eq!(r.t_stats[j], r.coefficients[j] / r.standard_errors[j], epsilon = 1e-12);
        assert_relative_eq!(
            r.conf_int_upper[j] - r.conf_int_lower[j],
            2.0 * t * r.standard_errors[j],
            epsilon = 1e-10
        );
        assert_relative_eq!(
            r.p_values[j],
            t_two_tailed_p(r.t_stats[j], r.df_residual as f64),
            epsilon = 1e-14
        );
    }
}

#[test]
fn test_zero_standard_error_gives_nan_t() {
    let xtx_inv = Mat::from_fn(2, 2, |i, j| if i == j { 1.0 } else { 0.0 });
    let inference = CoefficientInference::compute(&[1.0, 2.0], &xtx_inv, 0.0, 5.0, 0.05);

    assert!(inference.t_stats.iter().all(|t| t.is_nan()));
    assert!(inference.p_values.iter().all(|p| p.is_nan()));
}

// ============================================================================
// Goodness of fit
// ============================================================================

#[test]
fn test_information_criteria_relations() {
    let (x, y, _) = generate_linear_data(30, 2, 0.0, 1.0, 90);
    let r = OlsRegressor::default().fit(&x, &y).unwrap().into_result();

    let n = r.n as f64;
    let k = r.k as f64;
    assert_relative_eq!(r.aic, 2.0 * k - 2.0 * r.log_likelihood, epsilon = 1e-10);
    assert_relative_eq!(r.bic, k * n.ln() - 2.0 * r.log_likelihood, epsilon = 1e-10);
    assert_relative_eq!(r.aicc, r.aic + 2.0 * k * (k + 1.0) / (n - k - 1.0), epsilon = 1e-10);
    assert_relative_eq!(r.rmse, r.mse.sqrt(), epsilon = 1e-14);
    assert_relative_eq!(r.mse, r.sse / r.df_residual as f64, epsilon = 1e-14);
}

#[test]
fn test_f_statistic_from_sums() {
    let (x, y, _) = generate_linear_data(25, 3, 2.0, 0.7, 66);
    let r = OlsRegressor::default().fit(&x, &y).unwrap().into_result();

    let f = (r.ssr / r.df_model as f64) / (r.sse / r.df_residual as f64);
    assert_relative_eq!(r.f_stat, f, max_relative = 1e-12);
    assert_relative_eq!(
        r.f_p_value,
        f_sf(f, r.df_model as f64, r.df_residual as f64),
        max_relative = 1e-12
    );
}

#[test]
fn test_perfect_fit_statistics() {
    let (x, y, _) = generate_linear_data(10, 1, 3.0, 0.0, 12);
    let design = regstat::linalg::with_intercept_column(&x);
    let est = estimate(&design, &y, 1e-10).unwrap();

    let mut ss = SumsOfSquares::compute(&y, &est.fitted_values, &est.residuals, true);
    ss.sse = 0.0;
    let stats = FitStatistics::compute(&ss, 10, 2, 1, 8, true);

    assert_eq!(stats.f_stat, f64::INFINITY);
    assert_eq!(stats.f_p_value, 0.0);
    assert_eq!(stats.log_likelihood, f64::INFINITY);
    assert_eq!(stats.aic, f64::NEG_INFINITY);
    assert_eq!(stats.bic, f64::NEG_INFINITY);
}
