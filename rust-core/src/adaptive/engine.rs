//! Normalized least-mean-square adaptive FIR engine
//!
//! Couples FIR filtering with the NLMS coefficient update, one sample at a time:
//!
//! ```text
//! y[n]  = Σ w[i] * x[n-i]
//! e[n]  = d[n] - y[n]
//! w[i] += μ / (ε + ||x||²) * e[n] * x[n-i]
//! ```

use super::history::SampleHistory;
use crate::error::ConfigError;

/// Adaptation parameters
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Nominal adaptation rate μ (must be positive)
    pub step_size: f64,

    /// Constant ε added to the energy term (must be non-negative)
    pub regularization: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_size: 0.3,
            regularization: AdaptiveFilterEngine::DEFAULT_REGULARIZATION,
        }
    }
}

/// Adaptive FIR filter trained with NLMS
///
/// Owns its weight vector and sample history; both keep the length given at
/// construction for the lifetime of the engine. Per-sample calls never
/// allocate and never fail.
#[derive(Debug, Clone)]
pub struct AdaptiveFilterEngine {
    /// Current coefficient estimate, tap 0 pairs with the newest sample
    weights: Vec<f64>,

    /// Most recent inputs, same length as `weights`
    history: SampleHistory,

    step_size: f64,

    regularization: f64,

    /// Error used by the most recent adaptation
    last_error: f64,
}

impl AdaptiveFilterEngine {
    /// Negligible next to typical signal energy, large enough to keep the
    /// normalized step bounded on silence
    pub const DEFAULT_REGULARIZATION: f64 = 1e-10;

    /// Create an engine from initial coefficients
    ///
    /// # Arguments
    /// * `initial_weights` - Starting coefficients, length sets the tap count L
    /// * `step_size` - Adaptation rate μ, positive and finite
    /// * `regularization` - ε, non-negative and finite
    pub fn new(
        initial_weights: Vec<f64>,
        step_size: f64,
        regularization: f64,
    ) -> Result<Self, ConfigError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::InvalidStepSize(step_size));
        }
        if !regularization.is_finite() || regularization < 0.0 {
            return Err(ConfigError::InvalidRegularization(regularization));
        }

        let history = SampleHistory::new(initial_weights.len())?;

        log::debug!(
            "NLMS engine: taps={}, step_size={}, regularization={:e}",
            initial_weights.len(),
            step_size,
            regularization
        );

        Ok(Self {
            weights: initial_weights,
            history,
            step_size,
            regularization,
            last_error: 0.0,
        })
    }

    /// Create an engine from initial coefficients and a config
    pub fn with_config(
        initial_weights: Vec<f64>,
        config: &EngineConfig,
    ) -> Result<Self, ConfigError> {
        Self::new(initial_weights, config.step_size, config.regularization)
    }

    /// Create an engine with `length` zero coefficients
    pub fn zeroed(length: usize, config: &EngineConfig) -> Result<Self, ConfigError> {
        Self::with_config(vec![0.0; length], config)
    }

    /// Filter then adapt
    ///
    /// Inserts `input`, computes the output with the current weights, sets the
    /// error to `desired - output` and adapts on the window that includes `input`.
    ///
    /// # Returns
    /// Filter output y[n], computed before this sample's adaptation
    #[inline]
    pub fn run(&mut self, input: f64, desired: f64) -> f64 {
        self.history.insert(input);
        let output = self.history.dot(&self.weights);
        self.last_error = desired - output;
        self.adapt();
        output
    }

    /// Adapt then filter, with an externally supplied error
    ///
    /// The update uses the window *before* `input` is inserted. The output is
    /// computed afterwards from the updated weights and the new window.
    ///
    /// # Returns
    /// Filter output for the new window
    #[inline]
    pub fn run_error_in(&mut self, input: f64, error: f64) -> f64 {
        self.last_error = error;
        self.adapt();
        self.history.insert(input);
        self.history.dot(&self.weights)
    }

    /// Run `run` over paired input/desired samples
    ///
    /// Samples past the end of the shorter slice are ignored.
    pub fn run_block(&mut self, input: &[f64], desired: &[f64]) -> Vec<f64> {
        input
            .iter()
            .zip(desired.iter())
            .map(|(&x, &d)| self.run(x, d))
            .collect()
    }

    /// Step μ / (ε + ||x||²) the next update would apply to the current window
    ///
    /// A zero or non-finite result (ε + ||x||² == 0, or overflow on a
    /// subnormal denominator) is reported as 0: the update is skipped.
    #[inline]
    pub fn normalized_step(&self) -> f64 {
        let energy = self.history.squared_norm();
        let step = self.step_size / (self.regularization + energy);
        if step.is_finite() {
            step
        } else {
            0.0
        }
    }

    /// NLMS coefficient update using `last_error` and the current window
    ///
    /// Skipped when the step is degenerate or when step * error overflows.
    fn adapt(&mut self) {
        let step = self.normalized_step();
        let scale = step * self.last_error;
        if step == 0.0 || !scale.is_finite() {
            log::trace!("NLMS update skipped: degenerate window energy");
            return;
        }

        for (w, x) in self.weights.iter_mut().zip(self.history.iter()) {
            *w += scale * x;
        }
    }

    /// Zero coefficients, history and error (no reallocation)
    pub fn reset(&mut self) {
        self.weights.fill(0.0);
        self.history.clear();
        self.last_error = 0.0;
    }

    /// Current coefficient estimate
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Error used by the most recent adaptation
    pub fn last_error(&self) -> f64 {
        self.last_error
    }

    /// Number of taps (L)
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false, an engine has at least one tap
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn regularization(&self) -> f64 {
        self.regularization
    }

    /// Read access to the sample window
    pub fn history(&self) -> &SampleHistory {
        &self.history
    }
}
