//! Python bindings for the NLMS engine

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::adaptive::{AdaptiveFilterEngine, EngineConfig};
use crate::error::ConfigError;

fn config_err(e: ConfigError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

/// NLMS adaptive filter exposed to Python
#[pyclass(name = "AdaptiveFilter")]
pub struct PyAdaptiveFilter {
    engine: AdaptiveFilterEngine,
}

#[pymethods]
impl PyAdaptiveFilter {
    /// Create a new adaptive filter
    ///
    /// Args:
    ///     weights: Initial coefficients as numpy array (length sets tap count)
    ///     step_size: Adaptation rate mu (> 0)
    ///     regularization: Constant added to the energy term (>= 0)
    #[new]
    #[pyo3(signature = (weights, step_size, regularization = 1e-10))]
    fn new(weights: PyReadonlyArray1<f64>, step_size: f64, regularization: f64) -> PyResult<Self> {
        let weights: Vec<f64> = weights.as_array().iter().copied().collect();
        let engine = AdaptiveFilterEngine::new(weights, step_size, regularization)
            .map_err(config_err)?;

        Ok(Self { engine })
    }

    /// Create an adaptive filter with all-zero coefficients
    ///
    /// Args:
    ///     length: Number of taps
    ///     step_size: Adaptation rate mu (> 0)
    ///     regularization: Constant added to the energy term (>= 0)
    #[staticmethod]
    #[pyo3(signature = (length, step_size, regularization = 1e-10))]
    fn zeros(length: usize, step_size: f64, regularization: f64) -> PyResult<Self> {
        let config = EngineConfig {
            step_size,
            regularization,
        };
        let engine = AdaptiveFilterEngine::zeroed(length, &config).map_err(config_err)?;

        Ok(Self { engine })
    }

    /// Filter one sample, then adapt toward `desired`
    ///
    /// Returns:
    ///     Filter output computed before adaptation
    fn run(&mut self, input: f64, desired: f64) -> f64 {
        self.engine.run(input, desired)
    }

    /// Adapt with an external error, then filter one sample
    ///
    /// Returns:
    ///     Filter output computed with the updated weights
    fn run_error_in(&mut self, input: f64, error: f64) -> f64 {
        self.engine.run_error_in(input, error)
    }

    /// Run a block of paired input/desired samples
    ///
    /// Args:
    ///     input_signal: Input samples as numpy array
    ///     desired_signal: Desired samples as numpy array
    ///
    /// Returns:
    ///     Filter outputs as numpy array
    fn run_block<'py>(
        &mut self,
        py: Python<'py>,
        input_signal: PyReadonlyArray1<f64>,
        desired_signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let input: Vec<f64> = input_signal.as_array().iter().copied().collect();
        let desired: Vec<f64> = desired_signal.as_array().iter().copied().collect();
        if input.len() != desired.len() {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "input and desired lengths differ ({} vs {})",
                input.len(),
                desired.len()
            )));
        }

        let output = self.engine.run_block(&input, &desired);
        Ok(PyArray1::from_vec(py, output))
    }

    /// Zero coefficients, history and error
    fn reset(&mut self) {
        self.engine.reset();
    }

    /// Get current coefficients
    fn get_weights<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_vec(py, self.engine.weights().to_vec()))
    }

    /// Error used by the most recent adaptation
    fn last_error(&self) -> f64 {
        self.engine.last_error()
    }

    /// Get number of taps
    fn length(&self) -> usize {
        self.engine.len()
    }
}
