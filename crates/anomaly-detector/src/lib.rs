//! Online anomaly detection over numeric streams
//!
//! Two independent rules score every sample as it arrives:
//!
//! - **Rolling z-score**: the value's z-score against the population mean and
//!   standard deviation of the last `window_size` values (including itself)
//!   exceeds `threshold`.
//! - **EMA deviation**: the value lies more than twice the rolling standard
//!   deviation away from the exponential moving average.
//!
//! Either, both or neither rule may fire for a given sample.
//!
//! ## Usage
//!
//! ```rust
//! use anomaly_detector::{AnomalyLog, DetectorConfig, StreamDetector};
//! use anomaly_core::Sample;
//!
//! let config = DetectorConfig::new(0.3, 3.0, 20).unwrap();
//! let mut detector = StreamDetector::new(config).unwrap();
//!
//! let samples = (0..100u64).map(|i| {
//!     let value = if i == 60 { 40.0 } else { (i % 5) as f64 };
//!     Sample::new(i, value)
//! });
//!
//! let mut log = AnomalyLog::new();
//! let summary = detector.process(samples, &mut log).unwrap();
//!
//! assert_eq!(summary.samples, 100);
//! assert!(log.flagged_indices().contains(&60));
//! ```

pub mod config;
pub mod detector;
pub mod ema;
pub mod sink;
pub mod stream;

pub use config::DetectorConfig;
pub use detector::{DetectorState, StreamDetector, EMA_DEVIATION_MULTIPLIER};
pub use ema::Ema;
pub use sink::{AnomalyLog, CollectingSink, FnSink, LoggingSink, NullSink, StreamSummary};
pub use stream::Detections;
