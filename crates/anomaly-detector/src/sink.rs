//! Result consumers
//!
//! Sinks let several consumers (logging, collection, anomaly logs) observe a
//! detector's output without the detector knowing about them.

use anomaly_core::{AnomalyFlag, AnomalyKind, DetectionResult, DetectionSink};
use std::fmt;

/// Counts gathered while driving a stream through a detector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub samples: u64,
    /// Samples with at least one flag
    pub anomalous_samples: u64,
    pub zscore_flags: u64,
    pub ema_flags: u64,
}

impl StreamSummary {
    pub fn record(&mut self, result: &DetectionResult) {
        self.samples += 1;
        if result.is_anomaly() {
            self.anomalous_samples += 1;
        }
        for flag in &result.flags {
            match flag.kind() {
                AnomalyKind::ZScore => self.zscore_flags += 1,
                AnomalyKind::EmaDeviation => self.ema_flags += 1,
            }
        }
    }

    pub fn total_flags(&self) -> u64 {
        self.zscore_flags + self.ema_flags
    }
}

impl fmt::Display for StreamSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} samples, {} anomalous ({} z-score flags, {} EMA flags)",
            self.samples, self.anomalous_samples, self.zscore_flags, self.ema_flags
        )
    }
}

/// Simple logging sink
///
/// Anomalies are logged at the configured level; quiet samples only at trace.
pub struct LoggingSink {
    level: log::Level,
}

impl LoggingSink {
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LoggingSink {
    fn default() -> Self {
        Self::new(log::Level::Info)
    }
}

impl DetectionSink for LoggingSink {
    fn handle_result(&mut self, result: &DetectionResult) {
        if result.is_anomaly() {
            for flag in &result.flags {
                log::log!(
                    self.level,
                    "{flag} (z={:.3}, ema={:.4}, mean={:.4}, std={:.4})",
                    result.z_score,
                    result.ema,
                    result.rolling_mean,
                    result.rolling_std
                );
            }
        } else {
            log::trace!("{result}");
        }
    }
}

/// Keeps every result it is handed
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    results: Vec<DetectionResult>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[DetectionResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<DetectionResult> {
        self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl DetectionSink for CollectingSink {
    fn handle_result(&mut self, result: &DetectionResult) {
        self.results.push(result.clone());
    }
}

/// Cumulative log of every flag raised so far
///
/// Only anomalous results reach it; quiet samples are skipped.
#[derive(Debug, Default, Clone)]
pub struct AnomalyLog {
    flags: Vec<AnomalyFlag>,
    results: Vec<DetectionResult>,
}

impl AnomalyLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All flags in the order they were raised
    pub fn flags(&self) -> &[AnomalyFlag] {
        &self.flags
    }

    /// The anomalous results themselves
    pub fn results(&self) -> &[DetectionResult] {
        &self.results
    }

    pub fn flags_of(&self, kind: AnomalyKind) -> impl Iterator<Item = &AnomalyFlag> {
        self.flags.iter().filter(move |flag| flag.kind() == kind)
    }

    /// Indices of samples with at least one flag
    pub fn flagged_indices(&self) -> Vec<u64> {
        self.results.iter().map(|result| result.index).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn clear(&mut self) {
        self.flags.clear();
        self.results.clear();
    }
}

impl DetectionSink for AnomalyLog {
    fn handle_result(&mut self, result: &DetectionResult) {
        self.flags.extend_from_slice(&result.flags);
        self.results.push(result.clone());
    }

    fn is_interested(&self, result: &DetectionResult) -> bool {
        result.is_anomaly()
    }
}

/// Wraps a closure as a sink
pub struct FnSink<F>(pub F);

impl<F: FnMut(&DetectionResult)> DetectionSink for FnSink<F> {
    fn handle_result(&mut self, result: &DetectionResult) {
        (self.0)(result)
    }
}

/// Null sink that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DetectionSink for NullSink {
    fn handle_result(&mut self, _result: &DetectionResult) {
        // Do nothing
    }

    fn is_interested(&self, _result: &DetectionResult) -> bool {
        false
    }
}
