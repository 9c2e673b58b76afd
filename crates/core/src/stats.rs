//! Simulation statistics collection and reporting.
//!
//! This module tracks per-step activity counters for the issue core:
//! 1. **Throughput:** Steps, renamed operations, and issued entries.
//! 2. **Rename behavior:** Allocations, operand bypasses, and suppressed RAT writes.
//! 3. **Wakeup behavior:** Matrix inserts, completion broadcasts, and
//!    starved/saturated step counts.

/// Activity counters for the issue core.
///
/// All counters accumulate monotonically from construction; derived-metric
/// methods report rates over the run so far.
#[derive(Clone, Debug, Default)]
pub struct CoreStats {
    /// Total steps executed.
    pub steps: u64,
    /// Valid decoded operations accepted by the renamer.
    pub uops_renamed: u64,
    /// Physical registers allocated.
    pub pregs_allocated: u64,
    /// Source operands overridden by a same-step earlier writer.
    pub operand_bypasses: u64,
    /// Rename table updates committed.
    pub rat_writes: u64,
    /// Rename table updates suppressed by a later same-step writer.
    pub rat_writes_suppressed: u64,
    /// Dependency rows inserted into the matrix.
    pub rows_inserted: u64,
    /// Completion broadcasts applied.
    pub completions: u64,
    /// Entries selected for issue.
    pub uops_issued: u64,
    /// Steps in which no entry was eligible for issue.
    pub starved_steps: u64,
    /// Steps in which more entries were eligible than issue slots.
    pub saturated_steps: u64,
}

impl CoreStats {
    /// Creates a zeroed statistics block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Average entries issued per step, or 0.0 before the first step.
    pub fn issue_rate(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.uops_issued as f64 / self.steps as f64
        }
    }

    /// Fraction of committed RAT writes among all destination allocations.
    pub fn rat_write_rate(&self) -> f64 {
        if self.pregs_allocated == 0 {
            0.0
        } else {
            self.rat_writes as f64 / self.pregs_allocated as f64
        }
    }
}
