//! Core traits for online anomaly detection
//!
//! Detectors consume one sample at a time and hand back a result; sinks
//! observe those results without the detector knowing who is listening.

use crate::error::Result;
use crate::types::{DetectionResult, Sample};

/// Properties of a detector that don't depend on its state
pub trait DetectorProperties {
    /// Get the name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;
}

/// Online detection, one sample per call
pub trait OnlineDetector: DetectorProperties {
    /// Absorb a single sample and classify it
    ///
    /// On error the detector state must be left exactly as it was.
    fn ingest(&mut self, sample: Sample) -> Result<DetectionResult>;

    /// Reset internal state
    fn reset(&mut self);

    /// Number of samples absorbed since construction or the last reset
    fn samples_seen(&self) -> u64;
}

/// Consumer of detection results
pub trait DetectionSink {
    /// Handle one result, in ingestion order
    fn handle_result(&mut self, result: &DetectionResult);

    /// Check if this sink wants a particular result
    fn is_interested(&self, _result: &DetectionResult) -> bool {
        true
    }
}

impl<S: DetectionSink + ?Sized> DetectionSink for &mut S {
    fn handle_result(&mut self, result: &DetectionResult) {
        (**self).handle_result(result)
    }

    fn is_interested(&self, result: &DetectionResult) -> bool {
        (**self).is_interested(result)
    }
}

impl<S: DetectionSink + ?Sized> DetectionSink for Box<S> {
    fn handle_result(&mut self, result: &DetectionResult) {
        (**self).handle_result(result)
    }

    fn is_interested(&self, result: &DetectionResult) -> bool {
        (**self).is_interested(result)
    }
}
