//! Sampling distributions used for inference.
//!
//! Thin wrappers over the `statrs` t and F distributions that return NaN
//! instead of an error for invalid degrees of freedom. Upper tails use
//! `ContinuousCDF::sf` so small p-values keep their precision.

mod fisher_snedecor;
mod students_t;

pub use fisher_snedecor::{f_cdf, f_sf};
pub use students_t::{t_cdf, t_critical, t_quantile, t_sf, t_two_tailed_p};
