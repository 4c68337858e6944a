//! Online z-score and EMA-deviation detection
//!
//! Each sample goes through the same fixed sequence:
//!
//! 1. the value is pushed into the rolling window,
//! 2. mean and standard deviation are taken over the window *including* it,
//! 3. the EMA absorbs the value (the first value seeds it directly),
//! 4. rule A flags `|z| > threshold`, where `z` is 0 for a window without spread,
//! 5. rule B flags `|value - ema| > 2 * stddev`.
//!
//! Rule B has no zero-variance guard: while the window has no spread any
//! difference between the value and the EMA is flagged.

use crate::config::DetectorConfig;
use crate::ema::Ema;
use crate::sink::StreamSummary;
use crate::stream::Detections;
use anomaly_core::{
    AnomalyFlag, DetectionResult, DetectionSink, DetectorProperties, Error, OnlineDetector,
    Result, Sample,
};
use anomaly_window::RollingWindow;
use tracing::{debug, trace, warn};

/// Multiplier applied to the rolling standard deviation by rule B
pub const EMA_DEVIATION_MULTIPLIER: f64 = 2.0;

/// Lifecycle of a detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorState {
    /// No sample absorbed yet
    Uninitialized,
    /// At least one sample absorbed; there is no terminal state
    Running,
}

/// Stateful detector for a single stream
///
/// Use one instance per stream. Instances share nothing, so independent
/// streams can be processed on separate threads.
#[derive(Debug, Clone)]
pub struct StreamDetector {
    config: DetectorConfig,
    window: RollingWindow,
    ema: Ema,
    last_index: Option<u64>,
    samples_seen: u64,
}

impl StreamDetector {
    /// Create a detector, rejecting out-of-range parameters
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            window: RollingWindow::new(config.window_size)?,
            ema: Ema::new(config.alpha),
            config,
            last_index: None,
            samples_seen: 0,
        })
    }

    /// Absorb one sample and classify it
    ///
    /// Fails with [`Error::InvalidSample`] for a non-finite value or an index
    /// that does not advance past the previous one. Nothing is modified when
    /// that happens.
    pub fn ingest(&mut self, sample: Sample) -> Result<DetectionResult> {
        if let Err(err) = self.check_sample(&sample) {
            warn!(index = sample.index, value = sample.value, "rejected sample: {err}");
            return Err(err);
        }

        let Sample { index, value } = sample;

        self.window.push(value);
        let stats = self.window.stats();
        let ema = self.ema.update(value);
        self.last_index = Some(index);
        self.samples_seen += 1;

        let z_score = if stats.stddev != 0.0 {
            (value - stats.mean) / stats.stddev
        } else {
            0.0
        };
        let ema_threshold = EMA_DEVIATION_MULTIPLIER * stats.stddev;

        let mut flags = Vec::new();
        if z_score.abs() > self.config.threshold {
            flags.push(AnomalyFlag::ZScore { index, value });
        }
        if (value - ema).abs() > ema_threshold {
            flags.push(AnomalyFlag::EmaDeviation { index, value });
        }

        trace!(
            index,
            value,
            ema,
            mean = stats.mean,
            stddev = stats.stddev,
            z_score,
            "ingested sample"
        );
        if !flags.is_empty() {
            debug!(index, value, z_score, ema, flags = flags.len(), "anomaly flagged");
        }

        Ok(DetectionResult {
            index,
            value,
            ema,
            rolling_mean: stats.mean,
            rolling_std: stats.stddev,
            z_score,
            ema_threshold,
            flags,
        })
    }

    /// Ingest a bare value, assigning the next index in sequence
    pub fn ingest_value(&mut self, value: f64) -> Result<DetectionResult> {
        let index = match self.last_index {
            None => 0,
            Some(last) => last.checked_add(1).ok_or_else(|| Error::index_exhausted(last))?,
        };
        self.ingest(Sample::new(index, value))
    }

    /// Ingest one sample and forward the result to `sink`
    pub fn ingest_into<S: DetectionSink>(&mut self, sample: Sample, sink: &mut S) -> Result<()> {
        let result = self.ingest(sample)?;
        if sink.is_interested(&result) {
            sink.handle_result(&result);
        }
        Ok(())
    }

    /// Drive a whole stream into `sink`, stopping at the first rejected sample
    pub fn process<I, S>(&mut self, samples: I, sink: &mut S) -> Result<StreamSummary>
    where
        I: IntoIterator<Item = Sample>,
        S: DetectionSink,
    {
        let mut summary = StreamSummary::default();
        for result in self.detect_iter(samples) {
            let result = result?;
            summary.record(&result);
            if sink.is_interested(&result) {
                sink.handle_result(&result);
            }
        }
        Ok(summary)
    }

    /// Pull-based view: one result per sample, in order
    pub fn detect_iter<I>(&mut self, samples: I) -> Detections<'_, I::IntoIter>
    where
        I: IntoIterator<Item = Sample>,
    {
        Detections::new(self, samples.into_iter())
    }

    /// Return to the freshly constructed state, keeping the configuration
    pub fn reset(&mut self) {
        self.window.clear();
        self.ema.reset();
        self.last_index = None;
        self.samples_seen = 0;
    }

    pub fn state(&self) -> DetectorState {
        if self.ema.is_initialized() {
            DetectorState::Running
        } else {
            DetectorState::Uninitialized
        }
    }

    /// Current EMA, `None` before the first sample
    pub fn ema(&self) -> Option<f64> {
        self.ema.value()
    }

    pub fn last_index(&self) -> Option<u64> {
        self.last_index
    }

    pub fn samples_seen(&self) -> u64 {
        self.samples_seen
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    fn check_sample(&self, sample: &Sample) -> Result<()> {
        if !sample.value.is_finite() {
            return Err(Error::non_finite_sample(sample.index, sample.value));
        }
        match self.last_index {
            Some(previous) if sample.index <= previous => {
                Err(Error::out_of_order(sample.index, previous))
            }
            _ => Ok(()),
        }
    }
}

impl DetectorProperties for StreamDetector {
    fn algorithm_name(&self) -> &'static str {
        "Rolling Z-Score + EMA Deviation"
    }
}

impl OnlineDetector for StreamDetector {
    fn ingest(&mut self, sample: Sample) -> Result<DetectionResult> {
        StreamDetector::ingest(self, sample)
    }

    fn reset(&mut self) {
        StreamDetector::reset(self)
    }

    fn samples_seen(&self) -> u64 {
        self.samples_seen
    }
}
