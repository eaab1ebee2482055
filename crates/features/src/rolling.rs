//! Rolling mean with a running sum

use std::collections::VecDeque;

/// Fixed-size rolling mean.
///
/// Keeps a running sum so each push is O(1); the mean of the window is never
/// recomputed from scratch.
#[derive(Debug, Clone)]
pub struct RollingMean {
    /// Values in the window
    values: VecDeque<f64>,
    /// Window size
    window_size: usize,
    /// Running sum of the finite values for O(1) mean updates
    sum: f64,
    /// NaN/Inf values in the window; these never enter `sum`
    non_finite: usize,
}

impl RollingMean {
    /// Create a new rolling mean over `window_size` values
    pub fn new(window_size: usize) -> Self {
        let window_size = window_size.max(1);
        Self {
            values: VecDeque::with_capacity(window_size),
            window_size,
            sum: 0.0,
            non_finite: 0,
        }
    }

    /// Add a value, evicting the oldest once the window is full
    #[inline]
    pub fn push(&mut self, value: f64) {
        if self.values.len() >= self.window_size {
            if let Some(removed) = self.values.pop_front() {
                self.remove(removed);
            }
        }
        self.values.push_back(value);
        if value.is_finite() {
            self.sum += value;
        } else {
            self.non_finite += 1;
        }
    }

    fn remove(&mut self, value: f64) {
        if value.is_finite() {
            self.sum -= value;
        } else {
            self.non_finite -= 1;
        }
    }

    /// Mean of the values currently in the window
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        if self.non_finite > 0 {
            // NaN/Inf must not outlive their stay in the window
            let total: f64 = self.values.iter().sum();
            return Some(total / self.values.len() as f64);
        }
        Some(self.sum / self.values.len() as f64)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if window is full
    #[inline]
    pub fn is_full(&self) -> bool {
        self.values.len() >= self.window_size
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.sum = 0.0;
        self.non_finite = 0;
    }
}

/// Mean of the `window` values preceding each position.
///
/// Element `i` of the result is the mean of `values[i .. i + window]`, which
/// is the trailing average *before* `values[i + window]`. The result has
/// `values.len() - window + 1` elements (empty if `values` is too short).
pub fn trailing_means(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }

    let mut rolling = RollingMean::new(window);
    let mut means = Vec::with_capacity(values.len() - window + 1);
    for &value in values {
        rolling.push(value);
        if rolling.is_full() {
            if let Some(mean) = rolling.mean() {
                means.push(mean);
            }
        }
    }
    means
}
