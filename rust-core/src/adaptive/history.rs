//! Fixed-capacity sample history for adaptive filtering
//!
//! Ring buffer holding the most recent L input samples. Reads always come out
//! newest first, so index i of the window is the sample that is i steps old and
//! lines up with tap i of a weight vector.

use crate::error::ConfigError;

/// Rotating delay line with O(1) insertion and no allocations after construction
#[derive(Debug, Clone)]
pub struct SampleHistory {
    /// Ring buffer storage, zero-initialized
    buffer: Vec<f64>,

    /// Slot that the next insertion overwrites (always the oldest sample)
    cursor: usize,
}

impl SampleHistory {
    /// Create a zero-filled history
    ///
    /// # Arguments
    /// * `capacity` - Number of samples kept (L), must be at least 1
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::EmptyFilter);
        }

        Ok(Self {
            buffer: vec![0.0; capacity],
            cursor: 0,
        })
    }

    /// Record `value` as the newest sample, evicting the oldest
    #[inline]
    pub fn insert(&mut self, value: f64) {
        self.buffer[self.cursor] = value;
        self.cursor += 1;
        if self.cursor == self.buffer.len() {
            self.cursor = 0;
        }
    }

    /// Iterate over the window from newest (index 0) to oldest (index L-1)
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let (older, newer) = self.buffer.split_at(self.cursor);
        // Newest sample sits just before the cursor
        older.iter().rev().chain(newer.iter().rev()).copied()
    }

    /// Copy of the current window, newest first
    pub fn as_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Squared L2 norm of the window
    ///
    /// Plain left-to-right accumulation in window order, no pairwise or
    /// compensated summation.
    #[inline]
    pub fn squared_norm(&self) -> f64 {
        let mut energy = 0.0;
        for x in self.iter() {
            energy += x * x;
        }
        energy
    }

    /// Inner product of `weights` with the window: y = Σ w[i] * x[n-i]
    ///
    /// Only the first `min(weights.len(), capacity)` taps contribute.
    #[inline]
    pub fn dot(&self, weights: &[f64]) -> f64 {
        let mut output = 0.0;
        for (w, x) in weights.iter().zip(self.iter()) {
            output += w * x;
        }
        output
    }

    /// Zero every sample and rewind the write position
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.cursor = 0;
    }

    /// Number of samples held (L)
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }
}
