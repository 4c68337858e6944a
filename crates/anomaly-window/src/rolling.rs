//! Fixed-capacity rolling window
//!
//! The window keeps the most recent `capacity` values in arrival order and
//! evicts the oldest first. Statistics are recomputed from the buffer on
//! every call using the two-pass population formula:
//!
//! ```text
//! mean   = sum(x) / n
//! stddev = sqrt(sum((x - mean)^2) / n)
//! ```
//!
//! No running sums are carried between pushes. A window holding identical
//! values is detected during the summing pass and reports that value as its
//! mean with a standard deviation of exactly zero.
//!
//! Values near `f64::MAX` can overflow the sum or the squared deviations even
//! though mean and stddev are representable. In that case both passes are
//! redone on values divided by a power of two close to the largest magnitude,
//! and the results are scaled back.

use anomaly_core::{Error, Result};
use std::collections::VecDeque;

/// Population statistics of a window snapshot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowStats {
    pub mean: f64,
    pub stddev: f64,
    /// Number of values the statistics were computed over
    pub len: usize,
}

impl WindowStats {
    /// Population variance (`stddev` squared)
    pub fn variance(&self) -> f64 {
        self.stddev * self.stddev
    }

    /// Whether every value in the window was identical (or the window was empty)
    pub fn is_degenerate(&self) -> bool {
        self.stddev == 0.0
    }
}

/// First-in first-out buffer of the most recent values
#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow {
    buffer: VecDeque<f64>,
    capacity: usize,
}

impl RollingWindow {
    /// Create an empty window holding at most `capacity` values
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::empty_window());
        }
        Ok(Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append a value, evicting the oldest one when the window is full
    pub fn push(&mut self, value: f64) {
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    /// Population mean and standard deviation of the current contents
    ///
    /// Returns `(0.0, 0.0)` for an empty window.
    pub fn mean_and_stddev(&self) -> (f64, f64) {
        let stats = self.stats();
        (stats.mean, stats.stddev)
    }

    /// Same as [`mean_and_stddev`](Self::mean_and_stddev), with the count attached
    pub fn stats(&self) -> WindowStats {
        let len = self.buffer.len();
        if len == 0 {
            return WindowStats::default();
        }

        let (sum, min, max) = self.buffer.iter().fold(
            (0.0_f64, f64::INFINITY, f64::NEG_INFINITY),
            |(sum, min, max), &x| (sum + x, min.min(x), max.max(x)),
        );
        if min == max {
            // Identical values: report the value itself so rounding in the sum
            // cannot leak a spurious nonzero deviation.
            return WindowStats {
                mean: min,
                stddev: 0.0,
                len,
            };
        }

        let n = len as f64;
        let mean = sum / n;
        let squared_deviations = self.squared_deviations(mean, 1.0);
        if mean.is_finite() && squared_deviations.is_finite() {
            return WindowStats {
                mean,
                stddev: (squared_deviations / n).sqrt(),
                len,
            };
        }

        // Power of two, so dividing by it is exact
        let max_abs = min.abs().max(max.abs());
        let scale = 2.0_f64.powi(max_abs.log2().floor() as i32);
        let scaled_mean = self.buffer.iter().map(|&x| x / scale).sum::<f64>() / n;
        let scaled_deviations = self.squared_deviations(scaled_mean, scale);

        WindowStats {
            mean: scaled_mean * scale,
            stddev: (scaled_deviations / n).sqrt() * scale,
            len,
        }
    }

    /// `sum((x / scale - mean)^2)`, with `mean` already divided by `scale`
    fn squared_deviations(&self, mean: f64, scale: f64) -> f64 {
        self.buffer
            .iter()
            .map(|&x| {
                let d = x / scale - mean;
                d * d
            })
            .sum()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the next push will evict a value
    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Values from oldest to newest
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.buffer.iter().copied()
    }

    /// Most recently pushed value
    pub fn latest(&self) -> Option<f64> {
        self.buffer.back().copied()
    }

    /// Drop all values, keeping the capacity
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
