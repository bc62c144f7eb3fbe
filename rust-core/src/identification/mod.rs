//! System identification harness
//!
//! Trains an adaptive engine against a fixed random reference filter and
//! measures how closely it converges.

pub mod signal;
pub mod reference;
pub mod metrics;
pub mod scenario;

pub use signal::UniformSource;
pub use reference::ReferenceFilter;
pub use metrics::{misalignment, squared_error, to_db, DB_FLOOR};
pub use scenario::{run_scenario, IterationMetrics, Scenario, ScenarioConfig, ScenarioReport};
