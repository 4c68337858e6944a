//! Core traits and types for streaming anomaly detection
//!
//! This crate provides the vocabulary shared by the rest of the workspace:
//!
//! - [`Sample`]: an indexed observation
//! - [`AnomalyFlag`] and [`DetectionResult`]: what a detector reports per sample
//! - [`OnlineDetector`] and [`DetectionSink`]: the seams between producers,
//!   detectors and consumers
//! - [`Error`] and [`Result`]: the error taxonomy
//!
//! # Example
//!
//! ```rust
//! use anomaly_core::{AnomalyFlag, AnomalyKind, Sample};
//!
//! let sample = Sample::new(0, 12.5);
//! let flag = AnomalyFlag::ZScore { index: sample.index, value: sample.value };
//! assert_eq!(flag.kind(), AnomalyKind::ZScore);
//! ```

pub mod error;
pub mod traits;
pub mod types;

// Re-export core types
pub use error::{Error, Result};
pub use traits::{DetectionSink, DetectorProperties, OnlineDetector};
pub use types::{AnomalyFlag, AnomalyKind, DetectionResult, Sample};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
