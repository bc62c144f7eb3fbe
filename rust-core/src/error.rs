//! Construction-time errors
//!
//! Per-sample processing never fails; everything that can go wrong is caught
//! when an engine, history or harness component is built.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Filter length must be at least 1 tap")]
    EmptyFilter,

    #[error("Step size must be a positive finite value (got {0})")]
    InvalidStepSize(f64),

    #[error("Regularization must be a non-negative finite value (got {0})")]
    InvalidRegularization(f64),

    #[error("Signal range must satisfy low < high with finite bounds (got [{low}, {high}])")]
    InvalidSignalRange { low: f64, high: f64 },

    #[error("Scenario must run for at least one iteration")]
    NoIterations,
}
