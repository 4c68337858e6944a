//! Generator parameters

use anomaly_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Shape of a synthetic stream
///
/// `value(i) = amplitude * sin(2*pi*i / period) + trend * i + noise`, with an
/// occasional spike of `+/- outlier_magnitude` added on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of samples to produce
    pub length: u64,
    /// Peak height of the seasonal wave
    pub amplitude: f64,
    /// Samples per seasonal cycle
    pub period: f64,
    /// Increase per sample
    pub trend: f64,
    /// Standard deviation of the Gaussian noise
    pub noise_std: f64,
    /// Chance that a sample gets a spike injected
    pub outlier_probability: f64,
    /// Size of an injected spike, applied with a random sign
    pub outlier_magnitude: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 700,
            amplitude: 10.0,
            period: 50.0,
            trend: 0.1,
            noise_std: 2.0,
            outlier_probability: 0.05,
            outlier_magnitude: 30.0,
        }
    }
}

impl GeneratorConfig {
    pub fn with_length(mut self, length: u64) -> Self {
        self.length = length;
        self
    }

    pub fn with_noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    pub fn with_outliers(mut self, probability: f64, magnitude: f64) -> Self {
        self.outlier_probability = probability;
        self.outlier_magnitude = magnitude;
        self
    }

    pub fn with_seasonality(mut self, amplitude: f64, period: f64) -> Self {
        self.amplitude = amplitude;
        self.period = period;
        self
    }

    pub fn with_trend(mut self, trend: f64) -> Self {
        self.trend = trend;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("amplitude", self.amplitude),
            ("trend", self.trend),
            ("outlier_magnitude", self.outlier_magnitude),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(Error::InvalidParameter(format!("{name} {value} must be finite")));
            }
        }
        if !(self.period > 0.0 && self.period.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "period {} must be positive and finite",
                self.period
            )));
        }
        if !(self.noise_std >= 0.0 && self.noise_std.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "noise_std {} must be non-negative and finite",
                self.noise_std
            )));
        }
        if !(0.0..=1.0).contains(&self.outlier_probability) {
            return Err(Error::InvalidParameter(format!(
                "outlier_probability {} must be in [0, 1]",
                self.outlier_probability
            )));
        }
        Ok(())
    }
}
