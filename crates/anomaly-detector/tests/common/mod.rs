//! Shared utilities for integration tests

#![allow(dead_code)]

use anomaly_core::Sample;
use anomaly_detector::{DetectorConfig, StreamDetector};

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-9;

/// Number values 0, 1, 2, ... in order
pub fn indexed(values: &[f64]) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| Sample::new(i as u64, value))
        .collect()
}

pub fn detector(alpha: f64, threshold: f64, window_size: usize) -> StreamDetector {
    let config = DetectorConfig::new(alpha, threshold, window_size).expect("valid test config");
    StreamDetector::new(config).expect("valid test detector")
}

/// Textbook population standard deviation
pub fn reference_stddev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt()
}
