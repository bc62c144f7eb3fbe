//! Adaptive FIR filtering with the normalized least-mean-square update

pub mod history;
pub mod engine;

pub use history::SampleHistory;
pub use engine::{AdaptiveFilterEngine, EngineConfig};
