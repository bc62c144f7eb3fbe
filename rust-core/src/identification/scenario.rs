//! System identification run
//!
//! Drives an NLMS engine with seeded uniform noise filtered through a random
//! reference filter, tracking misalignment and squared error in dB for every
//! iteration, and checks the final values against pass thresholds.

use crate::adaptive::{AdaptiveFilterEngine, EngineConfig};
use crate::error::ConfigError;
use super::metrics::{misalignment, to_db, DB_FLOOR};
use super::reference::ReferenceFilter;
use super::signal::UniformSource;

/// Scenario parameters
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Taps in both the reference and the adaptive filter
    pub taps: usize,

    /// Adaptive filter step size μ
    pub step_size: f64,

    /// Adaptive filter regularization ε
    pub regularization: f64,

    /// Number of samples to process
    pub iterations: usize,

    /// Seed for target coefficients and input samples
    pub seed: u64,

    /// Input interval lower bound, also bounds the target coefficients
    pub input_low: f64,

    /// Input interval upper bound, also bounds the target coefficients
    pub input_high: f64,

    /// Final misalignment must be below this (dB)
    pub misalignment_threshold_db: f64,

    /// Final squared error must be below this (dB)
    pub squared_error_threshold_db: f64,

    /// Floor added before converting to dB
    pub db_floor: f64,

    /// Log progress every N iterations (0 disables)
    pub log_interval: usize,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            taps: 30,
            step_size: 0.3,
            regularization: 1e-10,
            iterations: 5000,
            seed: 824,
            input_low: -1.0,
            input_high: 1.0,
            misalignment_threshold_db: -290.0,
            squared_error_threshold_db: -290.0,
            db_floor: DB_FLOOR,
            log_interval: 500,
        }
    }
}

/// Metrics after one processed sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationMetrics {
    /// 1-based iteration number
    pub iteration: usize,

    /// 10*log10(floor + ||w* - w||² / ||w*||²)
    pub misalignment_db: f64,

    /// 10*log10(floor + e²)
    pub squared_error_db: f64,
}

/// Outcome of a scenario run
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Per-iteration metrics, in order
    pub trace: Vec<IterationMetrics>,

    /// Coefficients of the reference filter
    pub target_weights: Vec<f64>,

    /// Adaptive filter coefficients after the last iteration
    pub estimated_weights: Vec<f64>,

    pub misalignment_passed: bool,

    pub squared_error_passed: bool,
}

impl ScenarioReport {
    /// Metrics of the last iteration
    pub fn final_metrics(&self) -> Option<&IterationMetrics> {
        self.trace.last()
    }

    /// Both thresholds met
    pub fn passed(&self) -> bool {
        self.misalignment_passed && self.squared_error_passed
    }
}

/// Reference filter, adaptive engine and input source wired together
pub struct Scenario {
    config: ScenarioConfig,
    source: UniformSource,
    reference: ReferenceFilter,
    engine: AdaptiveFilterEngine,
}

impl Scenario {
    /// Build a scenario
    ///
    /// Target coefficients are drawn first, then inputs, all from one source
    /// seeded with `config.seed`. Both share `[input_low, input_high]`.
    pub fn new(config: ScenarioConfig) -> Result<Self, ConfigError> {
        if config.iterations == 0 {
            return Err(ConfigError::NoIterations);
        }

        let engine_config = EngineConfig {
            step_size: config.step_size,
            regularization: config.regularization,
        };
        let engine = AdaptiveFilterEngine::zeroed(config.taps, &engine_config)?;

        let mut source = UniformSource::new(config.seed, config.input_low, config.input_high)?;
        let reference = ReferenceFilter::random(config.taps, &mut source)?;

        Ok(Self {
            config,
            source,
            reference,
            engine,
        })
    }

    /// Process every iteration and evaluate the thresholds
    pub fn run(mut self) -> ScenarioReport {
        let floor = self.config.db_floor;
        let mut trace = Vec::with_capacity(self.config.iterations);

        for i in 0..self.config.iterations {
            let input = self.source.next_sample();
            let desired = self.reference.process_sample(input);
            self.engine.run(input, desired);

            let error = self.engine.last_error();
            let metrics = IterationMetrics {
                iteration: i + 1,
                misalignment_db: to_db(
                    misalignment(self.reference.coefficients(), self.engine.weights()),
                    floor,
                ),
                squared_error_db: to_db(error * error, floor),
            };

            if self.config.log_interval > 0 && metrics.iteration % self.config.log_interval == 0 {
                log::debug!(
                    "iteration {}: misalignment {:.2} dB, squared error {:.2} dB",
                    metrics.iteration,
                    metrics.misalignment_db,
                    metrics.squared_error_db
                );
            }

            trace.push(metrics);
        }

        // iterations > 0 is checked at construction
        let last = trace[trace.len() - 1];
        let misalignment_passed = last.misalignment_db < self.config.misalignment_threshold_db;
        let squared_error_passed = last.squared_error_db < self.config.squared_error_threshold_db;

        if misalignment_passed && squared_error_passed {
            log::info!(
                "PASS: misalignment {:.2} dB < {:.0} dB, squared error {:.2} dB < {:.0} dB",
                last.misalignment_db,
                self.config.misalignment_threshold_db,
                last.squared_error_db,
                self.config.squared_error_threshold_db
            );
        } else {
            log::warn!(
                "FAIL: misalignment {:.2} dB (threshold {:.0} dB), squared error {:.2} dB (threshold {:.0} dB)",
                last.misalignment_db,
                self.config.misalignment_threshold_db,
                last.squared_error_db,
                self.config.squared_error_threshold_db
            );
        }

        ScenarioReport {
            trace,
            target_weights: self.reference.coefficients().to_vec(),
            estimated_weights: self.engine.weights().to_vec(),
            misalignment_passed,
            squared_error_passed,
        }
    }
}

/// Build and run a scenario in one call
pub fn run_scenario(config: &ScenarioConfig) -> Result<ScenarioReport, ConfigError> {
    Ok(Scenario::new(config.clone())?.run())
}
