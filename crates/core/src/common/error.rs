//! Error definitions for the issue core.
//!
//! The steady-state algorithm is deterministic and total given valid inputs,
//! so every error here is raised at construction or on malformed input:
//! 1. **Configuration:** Rejected parameter combinations at build time.
//! 2. **Out of Range:** Register ids outside the configured id spaces.
//! 3. **Exhaustion:** Physical register allocation wrapping onto a live id.

use thiserror::Error;

use super::reg::PhysReg;

/// Errors surfaced by the issue core.
///
/// None of these are retryable: each indicates either an invalid construction
/// parameter or an input the configured core cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The configuration is internally inconsistent or cannot index the
    /// sentinel plus at least one real physical register.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A register id in the input is outside its configured id space.
    #[error("register id {reg} outside [0, {limit})")]
    OutOfRange {
        /// The offending raw register id.
        reg: usize,
        /// The exclusive upper bound of the id space.
        limit: usize,
    },

    /// The allocation counter wrapped onto a physical register that is still
    /// in flight. Committing the allocation would alias two live instructions
    /// onto one id, so the batch is rejected instead.
    #[error("physical register pool exhausted: {0} is still in flight")]
    Exhaustion(PhysReg),
}
