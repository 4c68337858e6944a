//! Exponential moving average accumulator
//!
//! `S_t = alpha * x_t + (1 - alpha) * S_{t-1}`, seeded with the first
//! observation itself rather than blended against an arbitrary prior.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ema {
    alpha: f64,
    value: Option<f64>,
}

impl Ema {
    /// `alpha` is expected to lie in (0, 1]; the detector config checks this
    pub fn new(alpha: f64) -> Self {
        Self { alpha, value: None }
    }

    /// The average after absorbing `sample`, without absorbing it
    pub fn peek(&self, sample: f64) -> f64 {
        match self.value {
            None => sample,
            Some(prev) => self.alpha * sample + (1.0 - self.alpha) * prev,
        }
    }

    pub fn update(&mut self, sample: f64) -> f64 {
        let next = self.peek(sample);
        self.value = Some(next);
        next
    }

    /// Current average, `None` before the first sample
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }

    pub fn reset(&mut self) {
        self.value = None;
    }
}
