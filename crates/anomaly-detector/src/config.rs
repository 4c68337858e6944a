//! Detector configuration

use anomaly_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters for the stream detector, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// EMA smoothing factor in (0, 1]; higher reacts faster to the newest sample
    pub alpha: f64,
    /// Z-score cutoff (> 0); higher flags fewer, more severe anomalies
    pub threshold: f64,
    /// Rolling window capacity (>= 1); larger smooths statistics but adapts slower
    pub window_size: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            threshold: 3.0,
            window_size: 50,
        }
    }
}

impl DetectorConfig {
    /// Create a validated configuration
    pub fn new(alpha: f64, threshold: f64, window_size: usize) -> Result<Self> {
        let config = Self {
            alpha,
            threshold,
            window_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Check every parameter is in range
    pub fn validate(&self) -> Result<()> {
        if self.window_size < 1 {
            return Err(Error::empty_window());
        }
        // Written so NaN fails too
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "alpha {} must be in (0, 1]",
                self.alpha
            )));
        }
        if !(self.threshold > 0.0 && self.threshold.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "threshold {} must be positive and finite",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DetectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window_size, 50);
    }

    #[test]
    fn test_rejects_bad_window() {
        let err = DetectorConfig::new(0.5, 3.0, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_alpha_bounds() {
        assert!(DetectorConfig::new(1.0, 3.0, 10).is_ok());
        assert!(DetectorConfig::new(1e-9, 3.0, 10).is_ok());

        for alpha in [0.0, -0.1, 1.0001, f64::NAN, f64::INFINITY] {
            let err = DetectorConfig::new(alpha, 3.0, 10).unwrap_err();
            assert!(
                matches!(err, Error::InvalidConfig(ref msg) if msg.contains("alpha")),
                "alpha {alpha} should be rejected"
            );
        }
    }

    #[test]
    fn test_threshold_bounds() {
        for threshold in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(DetectorConfig::new(0.5, threshold, 10).is_err());
        }
        assert!(DetectorConfig::new(0.5, 0.01, 10).is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = DetectorConfig::default()
            .with_alpha(0.5)
            .with_threshold(2.5)
            .with_window_size(3);
        assert_eq!(config, DetectorConfig::new(0.5, 2.5, 3).unwrap());
    }

    #[test]
    fn test_json_round_trip_validates() {
        let json = r#"{ "alpha": 0.25, "threshold": 2.0, "window_size": 20 }"#;
        let config = DetectorConfig::from_json(json).unwrap();
        assert_eq!(config, DetectorConfig::new(0.25, 2.0, 20).unwrap());

        let reparsed = DetectorConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, config);

        let invalid = r#"{ "alpha": 2.0, "threshold": 2.0, "window_size": 20 }"#;
        assert!(matches!(DetectorConfig::from_json(invalid), Err(Error::InvalidConfig(_))));

        let malformed = r#"{ "alpha": "high" }"#;
        assert!(matches!(DetectorConfig::from_json(malformed), Err(Error::Serialization(_))));
    }
}
