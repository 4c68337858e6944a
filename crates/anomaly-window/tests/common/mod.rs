//! Shared utilities for integration tests

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-9;

/// Textbook population standard deviation, computed independently of the window
pub fn reference_stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt()
}

/// The last `capacity` values of a slice, i.e. what a window should hold
pub fn tail(values: &[f64], capacity: usize) -> &[f64] {
    &values[values.len().saturating_sub(capacity)..]
}
