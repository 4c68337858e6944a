//! Types shared by the window, detector and generator crates

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single observation in a stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Arrival position, strictly increasing and assigned by the caller
    pub index: u64,
    /// Observed value
    pub value: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(index: u64, value: f64) -> Self {
        Self { index, value }
    }
}

impl From<(u64, f64)> for Sample {
    fn from((index, value): (u64, f64)) -> Self {
        Self { index, value }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:.4})", self.index, self.value)
    }
}

/// Which rule flagged a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyKind {
    /// Rolling z-score exceeded the threshold
    ZScore,
    /// Value strayed too far from the exponential moving average
    EmaDeviation,
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyKind::ZScore => write!(f, "Z-Score"),
            AnomalyKind::EmaDeviation => write!(f, "EMA"),
        }
    }
}

/// A flag raised against one sample by one rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnomalyFlag {
    ZScore { index: u64, value: f64 },
    EmaDeviation { index: u64, value: f64 },
}

impl AnomalyFlag {
    pub fn kind(&self) -> AnomalyKind {
        match self {
            AnomalyFlag::ZScore { .. } => AnomalyKind::ZScore,
            AnomalyFlag::EmaDeviation { .. } => AnomalyKind::EmaDeviation,
        }
    }

    pub fn index(&self) -> u64 {
        match *self {
            AnomalyFlag::ZScore { index, .. } | AnomalyFlag::EmaDeviation { index, .. } => index,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            AnomalyFlag::ZScore { value, .. } | AnomalyFlag::EmaDeviation { value, .. } => value,
        }
    }
}

impl fmt::Display for AnomalyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} anomaly at index {}: value {:.4}",
            self.kind(),
            self.index(),
            self.value()
        )
    }
}

/// Outcome of ingesting one sample
///
/// Statistics are taken after the sample entered the rolling window and the
/// moving average absorbed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub index: u64,
    pub value: f64,
    /// Exponential moving average including this sample
    pub ema: f64,
    /// Population mean of the rolling window
    pub rolling_mean: f64,
    /// Population standard deviation of the rolling window
    pub rolling_std: f64,
    /// Z-score of the value against the window, 0 when the window has no variance
    pub z_score: f64,
    /// Allowed distance from the moving average
    pub ema_threshold: f64,
    /// Flags raised for this sample, z-score rule first
    pub flags: Vec<AnomalyFlag>,
}

impl DetectionResult {
    /// Check if any rule fired
    pub fn is_anomaly(&self) -> bool {
        !self.flags.is_empty()
    }

    /// Check if a particular rule fired
    pub fn has_flag(&self, kind: AnomalyKind) -> bool {
        self.flags.iter().any(|flag| flag.kind() == kind)
    }

    /// The sample this result was produced for
    pub fn sample(&self) -> Sample {
        Sample::new(self.index, self.value)
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] value={:.4} ema={:.4} mean={:.4} std={:.4} z={:.3}",
            self.index, self.value, self.ema, self.rolling_mean, self.rolling_std, self.z_score
        )?;
        if !self.flags.is_empty() {
            let kinds: Vec<String> = self.flags.iter().map(|flag| flag.kind().to_string()).collect();
            write!(f, " flags=[{}]", kinds.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(flags: Vec<AnomalyFlag>) -> DetectionResult {
        DetectionResult {
            index: 5,
            value: 42.0,
            ema: 40.0,
            rolling_mean: 39.0,
            rolling_std: 1.5,
            z_score: 2.0,
            ema_threshold: 3.0,
            flags,
        }
    }

    #[test]
    fn test_flag_accessors() {
        let flag = AnomalyFlag::EmaDeviation { index: 9, value: -3.5 };
        assert_eq!(flag.kind(), AnomalyKind::EmaDeviation);
        assert_eq!(flag.index(), 9);
        assert_eq!(flag.value(), -3.5);
        assert_eq!(flag.to_string(), "EMA anomaly at index 9: value -3.5000");
    }

    #[test]
    fn test_result_flags() {
        let quiet = result_with(vec![]);
        assert!(!quiet.is_anomaly());
        assert!(!quiet.has_flag(AnomalyKind::ZScore));

        let both = result_with(vec![
            AnomalyFlag::ZScore { index: 5, value: 42.0 },
            AnomalyFlag::EmaDeviation { index: 5, value: 42.0 },
        ]);
        assert!(both.is_anomaly());
        assert!(both.has_flag(AnomalyKind::ZScore));
        assert!(both.has_flag(AnomalyKind::EmaDeviation));
        assert_eq!(both.sample(), Sample::new(5, 42.0));
        assert!(both.to_string().ends_with("flags=[Z-Score, EMA]"));
    }

    #[test]
    fn test_sample_from_tuple() {
        let sample: Sample = (3, 1.25).into();
        assert_eq!(sample, Sample::new(3, 1.25));
        assert_eq!(sample.to_string(), "(3, 1.2500)");
    }
}
