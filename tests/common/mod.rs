//! Common test utilities and data generators.
#![allow(dead_code)]

use faer::{Col, Mat};
use regstat::data::{Column, Dataset};

/// Small deterministic generator so sweeps are reproducible.
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Uniform value in [-1, 1].
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        ((self.state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    }

    /// Uniform index in [0, bound).
    pub fn next_index(&mut self, bound: usize) -> usize {
        let u = (self.next_f64() + 1.0) / 2.0;
        ((u * bound as f64) as usize).min(bound - 1)
    }
}

/// Generate simple linear data: y = x * beta + intercept + noise, with
/// beta_j = j + 1.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Vec<f64>) {
    let mut rng = Lcg::new(seed);

    let true_coefficients: Vec<f64> = (0..n_features).map(|j| (j + 1) as f64).collect();
    let mut x = Mat::zeros(n_samples, n_features);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        let mut yi = intercept;
        for j in 0..n_features {
            x[(i, j)] = rng.next_f64();
            yi += x[(i, j)] * true_coefficients[j];
        }
        yi += noise_std * rng.next_f64();
        y[i] = yi;
    }

    (x, y, true_coefficients)
}

/// Generate data where column 1 is exactly twice column 0.
pub fn generate_collinear_data(n_samples: usize) -> (Mat<f64>, Col<f64>) {
    let mut x = Mat::zeros(n_samples, 3);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        x[(i, 0)] = i as f64;
        x[(i, 1)] = 2.0 * i as f64;
        x[(i, 2)] = (i * i) as f64;
        y[i] = 1.0 + 2.0 * x[(i, 0)] + 3.0 * x[(i, 2)];
    }

    (x, y)
}

/// Random symmetric positive definite matrix A'A + n·I.
pub fn random_spd(n: usize, seed: u64) -> Mat<f64> {
    let mut rng = Lcg::new(seed);
    let a = Mat::from_fn(n, n, |_, _| rng.next_f64());
    let ata = a.transpose() * &a;
    Mat::from_fn(n, n, |i, j| ata[(i, j)] + if i == j { n as f64 } else { 0.0 })
}

/// Dataset with numeric `x`, a three-level categorical `group` and response
/// `y = 1 + 2x + effect(group) + noise`.
pub fn generate_grouped_dataset(n_samples: usize, noise_std: f64, seed: u64) -> Dataset {
    let mut rng = Lcg::new(seed);
    let labels = ["control", "low", "high"];
    let effects = [0.0, 1.5, -2.0];

    let mut x = Vec::with_capacity(n_samples);
    let mut group = Vec::with_capacity(n_samples);
    let mut y = Vec::with_capacity(n_samples);

    for i in 0..n_samples {
        let level = i % labels.len();
        let xi = rng.next_f64() * 5.0;
        x.push(xi);
        group.push(labels[level]);
        y.push(1.0 + 2.0 * xi + effects[level] + noise_std * rng.next_f64());
    }

    Dataset::new()
        .with_column(Column::from_f64("y", &y))
        .with_column(Column::from_f64("x", &x))
        .with_column(Column::categorical_from_strs("group", &group))
}

/// Approximate equality check for floating point values.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
