//! Adaptive FIR - NLMS System Identification Core
//! 
//! Normalized least-mean-square adaptive filter with a seeded identification
//! harness and optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod adaptive;
pub mod identification;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::ConfigError;
pub use adaptive::{AdaptiveFilterEngine, EngineConfig, SampleHistory};
pub use identification::{run_scenario, ScenarioConfig, ScenarioReport};
