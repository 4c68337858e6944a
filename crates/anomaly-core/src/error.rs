//! Error types for streaming anomaly detection
//!
//! Provides a unified error type for all anomaly crates.

use thiserror::Error;

/// Core error type for anomaly detection operations
#[derive(Error, Debug)]
pub enum Error {
    /// Detector or window configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A sample was rejected; the detector state is unchanged
    #[error("Invalid sample at index {index}: {reason}")]
    InvalidSample { index: u64, reason: String },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a NaN/Inf sample value
    pub fn non_finite_sample(index: u64, value: f64) -> Self {
        Self::InvalidSample {
            index,
            reason: format!("value {value} is not finite"),
        }
    }

    /// Create an error for an index that does not advance the stream
    pub fn out_of_order(index: u64, previous: u64) -> Self {
        Self::InvalidSample {
            index,
            reason: format!("index must be greater than previous index {previous}"),
        }
    }

    /// Create an error for a stream whose last index was `u64::MAX`
    pub fn index_exhausted(previous: u64) -> Self {
        Self::InvalidSample {
            index: previous,
            reason: "index space exhausted, no index follows the previous one".to_string(),
        }
    }

    /// Create an error for a zero-capacity window
    pub fn empty_window() -> Self {
        Self::InvalidConfig("window_size must be at least 1".to_string())
    }

    /// Whether this error rejected a single sample rather than a configuration
    pub fn is_sample_error(&self) -> bool {
        matches!(self, Self::InvalidSample { .. })
    }
}
