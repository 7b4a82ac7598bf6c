//! Dense linear algebra kernel.
//!
//! Everything the estimator needs from linear algebra goes through here:
//! transpose, products with shape checking, Gauss-Jordan inversion with
//! partial pivoting, and the determinant / condition number used by the
//! collinearity diagnostics. Matrices are `faer::Mat<f64>`.

mod gauss_jordan;
mod matrix;

pub use gauss_jordan::{determinant, invert};
pub use matrix::{
    condition_number, drop_column, gram, multiply, multiply_vec, transpose,
    with_intercept_column,
};
