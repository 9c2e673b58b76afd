//! Simulation utilities around the issue core.
//!
//! Provides the execution-unit model that closes the completion loop and the
//! top-level simulator coupling it to the core.

/// Fixed-latency execution-unit model.
pub mod executor;

/// Top-level simulator.
pub mod simulator;

pub use executor::FixedLatencyExecutor;
pub use simulator::Simulator;
