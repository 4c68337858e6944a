//! Seasonal stream generator with injected outliers

use crate::config::GeneratorConfig;
use anomaly_core::{Error, Result, Sample};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;
use tracing::debug;

/// A generated sample together with its ground truth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratedPoint {
    pub sample: Sample,
    /// Whether a spike was added to this sample
    pub injected_outlier: bool,
}

/// Finite iterator of synthetic samples with indices `0..length`
///
/// Seeded construction uses ChaCha8 so a given seed always produces the same
/// stream on every platform.
pub struct SyntheticStream<R: Rng = ChaCha8Rng> {
    config: GeneratorConfig,
    noise: Normal<f64>,
    rng: R,
    next_index: u64,
}

impl SyntheticStream<ChaCha8Rng> {
    pub fn new(config: GeneratorConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> SyntheticStream<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let noise = Normal::new(0.0, config.noise_std).map_err(|e| {
            Error::InvalidParameter(format!("Failed to create noise distribution: {e}"))
        })?;
        debug!(length = config.length, "created synthetic stream");
        Ok(Self {
            config,
            noise,
            rng,
            next_index: 0,
        })
    }

    /// Noise-free value at `index`: seasonal wave plus trend
    pub fn baseline(&self, index: u64) -> f64 {
        let i = index as f64;
        self.config.amplitude * (2.0 * PI * i / self.config.period).sin() + self.config.trend * i
    }

    /// Next sample along with whether it carries an injected spike
    pub fn next_point(&mut self) -> Option<GeneratedPoint> {
        if self.next_index >= self.config.length {
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;

        let mut value = self.baseline(index) + self.noise.sample(&mut self.rng);

        let injected_outlier = self.rng.gen_bool(self.config.outlier_probability);
        if injected_outlier {
            let sign = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            value += sign * self.config.outlier_magnitude;
        }

        Some(GeneratedPoint {
            sample: Sample::new(index, value),
            injected_outlier,
        })
    }

    /// Adapter yielding points with ground truth instead of bare samples
    pub fn points(self) -> Points<R> {
        Points(self)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn remaining(&self) -> usize {
        usize::try_from(self.config.length - self.next_index).unwrap_or(usize::MAX)
    }
}

impl<R: Rng> Iterator for SyntheticStream<R> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        self.next_point().map(|point| point.sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

/// See [`SyntheticStream::points`]
pub struct Points<R: Rng>(SyntheticStream<R>);

impl<R: Rng> Iterator for Points<R> {
    type Item = GeneratedPoint;

    fn next(&mut self) -> Option<GeneratedPoint> {
        self.0.next_point()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Collect a whole seeded stream
pub fn generate(config: GeneratorConfig, seed: u64) -> Result<Vec<Sample>> {
    Ok(SyntheticStream::new(config, seed)?.collect())
}
