//! Python bindings for the system identification harness

use pyo3::prelude::*;
use numpy::PyArray1;
use crate::identification::{run_scenario, ScenarioConfig};

/// Run a seeded system identification scenario
///
/// Returns:
///     Tuple of (misalignment_db, squared_error_db, passed), with one array
///     entry per iteration
#[pyfunction]
#[pyo3(signature = (taps = 30, step_size = 0.3, regularization = 1e-10, iterations = 5000, seed = 824))]
pub fn run_identification<'py>(
    py: Python<'py>,
    taps: usize,
    step_size: f64,
    regularization: f64,
    iterations: usize,
    seed: u64,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>, bool)> {
    let config = ScenarioConfig {
        taps,
        step_size,
        regularization,
        iterations,
        seed,
        ..ScenarioConfig::default()
    };
    let report = run_scenario(&config)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

    let misalignment_db: Vec<f64> = report.trace.iter().map(|m| m.misalignment_db).collect();
    let squared_error_db: Vec<f64> = report.trace.iter().map(|m| m.squared_error_db).collect();

    Ok((
        PyArray1::from_vec(py, misalignment_db),
        PyArray1::from_vec(py, squared_error_db),
        report.passed(),
    ))
}
