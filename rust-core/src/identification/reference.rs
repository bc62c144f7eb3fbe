//! Fixed "ground truth" FIR filter
//!
//! The unknown system an adaptive engine is asked to identify. Uses the same
//! sample history and inner product as the engine, so a converged engine
//! reproduces its output with identical rounding.

use crate::adaptive::SampleHistory;
use crate::error::ConfigError;
use super::signal::UniformSource;

/// Time-invariant FIR filter with a zero-initialized delay line
#[derive(Debug, Clone)]
pub struct ReferenceFilter {
    /// Filter coefficients h[k] for k = 0..L-1
    coefficients: Vec<f64>,

    history: SampleHistory,
}

impl ReferenceFilter {
    /// Create a reference filter from explicit coefficients
    pub fn new(coefficients: Vec<f64>) -> Result<Self, ConfigError> {
        let history = SampleHistory::new(coefficients.len())?;
        Ok(Self {
            coefficients,
            history,
        })
    }

    /// Create a reference filter with `taps` coefficients drawn from `source`
    pub fn random(taps: usize, source: &mut UniformSource) -> Result<Self, ConfigError> {
        if taps == 0 {
            return Err(ConfigError::EmptyFilter);
        }
        Self::new(source.take_vec(taps))
    }

    /// Filter a single sample: y[n] = Σ h[k] * x[n-k]
    #[inline]
    pub fn process_sample(&mut self, input: f64) -> f64 {
        self.history.insert(input);
        self.history.dot(&self.coefficients)
    }

    /// Filter a block of samples
    pub fn process_block(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| self.process_sample(x)).collect()
    }

    /// Clear the delay line
    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of taps
    pub fn length(&self) -> usize {
        self.coefficients.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_moving_average() {
        let mut filter = ReferenceFilter::new(vec![1.0 / 3.0; 3]).unwrap();

        // Impulse of height 3 spreads over three outputs
        let outputs = filter.process_block(&[3.0, 0.0, 0.0, 0.0]);
        assert!((outputs[0] - 1.0).abs() < 1e-10);
        assert!((outputs[1] - 1.0).abs() < 1e-10);
        assert!((outputs[2] - 1.0).abs() < 1e-10);
        assert!(outputs[3].abs() < 1e-10);
    }

    #[test]
    fn test_reference_wraparound() {
        // Taps on the newest and the 3-samples-old input
        let mut filter = ReferenceFilter::new(vec![1.0, 0.0, 0.0, 1.0]).unwrap();
        filter.process_block(&[1.0, 2.0, 3.0, 4.0]);

        let output = filter.process_sample(5.0);
        assert!((output - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_reference_reset() {
        let mut filter = ReferenceFilter::new(vec![1.0, 1.0]).unwrap();
        filter.process_sample(1.0);
        filter.process_sample(2.0);
        filter.reset();

        let output = filter.process_sample(1.0);
        assert!((output - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_reference_random_coefficients() {
        let mut source = UniformSource::new(3, -1.0, 1.0).unwrap();
        let filter = ReferenceFilter::random(16, &mut source).unwrap();
        assert_eq!(filter.length(), 16);
        assert!(filter.coefficients().iter().all(|h| (-1.0..=1.0).contains(h)));

        assert_eq!(
            ReferenceFilter::random(0, &mut source).unwrap_err(),
            ConfigError::EmptyFilter
        );
    }
}
