//! Fisher-Snedecor (F) distribution.

use statrs::distribution::{ContinuousCDF, FisherSnedecor};

fn distribution(d1: f64, d2: f64) -> Option<FisherSnedecor> {
    FisherSnedecor::new(d1, d2).ok()
}

/// Cumulative distribution function P(F ≤ f).
pub fn f_cdf(f: f64, d1: f64, d2: f64) -> f64 {
    if f.is_nan() {
        return f64::NAN;
    }
    distribution(d1, d2).map_or(f64::NAN, |d| if f <= 0.0 { 0.0 } else { d.cdf(f) })
}

/// Upper-tail probability P(F > f).
pub fn f_sf(f: f64, d1: f64, d2: f64) -> f64 {
    if f.is_nan() {
        return f64::NAN;
    }
    distribution(d1, d2).map_or(f64::NAN, |d| if f <= 0.0 { 1.0 } else { d.sf(f) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sf_complements_cdf() {
        for &f in &[0.3, 1.0, 4.2] {
            assert_relative_eq!(f_cdf(f, 3.0, 12.0) + f_sf(f, 3.0, 12.0), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_known_critical_value() {
        // F_{0.95}(2, 10) = 4.102821015130399
        assert_relative_eq!(f_sf(4.102821015130399, 2.0, 10.0), 0.05, epsilon = 1e-9);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(f_cdf(0.0, 2.0, 3.0), 0.0);
        assert_eq!(f_sf(0.0, 2.0, 3.0), 1.0);
        assert_eq!(f_sf(f64::INFINITY, 2.0, 3.0), 0.0);
        assert!(f_sf(1.0, 0.0, 3.0).is_nan());
        assert!(f_cdf(f64::NAN, 2.0, 3.0).is_nan());
    }
}
