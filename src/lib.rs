//! Online anomaly detection for numeric streams
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - [`anomaly_core`]: samples, flags, results, errors and the detector/sink traits
//! - [`anomaly_window`]: the fixed-capacity rolling window
//! - [`anomaly_detector`]: the z-score + EMA-deviation stream detector
//! - [`anomaly_synth`]: seasonal synthetic streams with injected spikes
//!
//! ```rust
//! use stream_anomaly::prelude::*;
//!
//! let stream = SyntheticStream::new(GeneratorConfig::default(), 7).unwrap();
//! let mut detector = StreamDetector::new(DetectorConfig::default()).unwrap();
//! let mut log = AnomalyLog::new();
//!
//! let summary = detector.process(stream, &mut log).unwrap();
//! println!("{summary}");
//! ```

pub use anomaly_core;
pub use anomaly_detector;
pub use anomaly_synth;
pub use anomaly_window;

pub use anomaly_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use anomaly_core::{
        AnomalyFlag, AnomalyKind, DetectionResult, DetectionSink, DetectorProperties, Error,
        OnlineDetector, Result, Sample,
    };
    pub use anomaly_detector::{
        AnomalyLog, CollectingSink, DetectorConfig, DetectorState, FnSink, LoggingSink, NullSink,
        StreamDetector, StreamSummary,
    };
    pub use anomaly_synth::{GeneratorConfig, SyntheticStream};
    pub use anomaly_window::{RollingWindow, WindowStats};
}
