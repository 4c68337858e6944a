//! Synthetic numeric streams for exercising anomaly detectors
//!
//! Streams combine a seasonal sine wave, a linear trend, Gaussian noise and
//! randomly injected spikes. Every point records whether a spike was
//! injected, so detector output can be compared against ground truth.
//!
//! ```rust
//! use anomaly_synth::{GeneratorConfig, SyntheticStream};
//!
//! let stream = SyntheticStream::new(GeneratorConfig::default(), 42).unwrap();
//! let injected = stream.points().filter(|p| p.injected_outlier).count();
//! assert!(injected > 0);
//! ```

pub mod config;
pub mod generator;

pub use config::GeneratorConfig;
pub use generator::{generate, GeneratedPoint, Points, SyntheticStream};
