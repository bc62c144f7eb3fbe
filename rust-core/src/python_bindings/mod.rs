//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod engine_bindings;
mod identification_bindings;

/// Python module definition
#[pymodule]
fn adaptive_fir(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<engine_bindings::PyAdaptiveFilter>()?;
    m.add_function(wrap_pyfunction!(identification_bindings::run_identification, m)?)?;

    Ok(())
}
