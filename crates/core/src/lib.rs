//! Out-of-order issue core simulator library.
//!
//! This crate implements the cycle-accurate instruction-issue core of an
//! out-of-order pipeline with the following:
//! 1. **Rename:** A register alias table with batch allocation, same-step
//!    read-after-write bypass, and same-step write suppression.
//! 2. **Wakeup:** A producer/consumer dependency matrix with batched insert
//!    and completion-broadcast clear.
//! 3. **Select:** A lowest-index-first multi-bit priority selector bounded by
//!    the issue width.
//! 4. **Simulation:** A step-machine orchestrator, a configurable-latency
//!    execution model, configuration, and statistics collection.
//!
//! The decoder, functional units, and commit logic are external
//! collaborators: batches and completion broadcasts cross the crate boundary
//! as plain values through [`IssueCore::step`].

/// Common types (register ids, bit sets, errors).
pub mod common;
/// Core configuration (defaults, validation).
pub mod config;
/// Issue core (rename, wakeup, select, orchestration).
pub mod core;
/// Simulation harness (execution model, simulator).
pub mod sim;
/// Activity statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main issue core type; construct with `IssueCore::new` and drive with `step`.
pub use crate::core::IssueCore;
/// Top-level simulator coupling the core to the bundled execution model.
pub use crate::sim::Simulator;
