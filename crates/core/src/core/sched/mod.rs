//! Wakeup scheduler: dependency matrix, waiting set, and selector.
//!
//! The scheduler takes the renamer's output, holds each entry until every
//! producer it depends on has broadcast completion, and selects a bounded
//! number of ready entries per step. It is organized as:
//! 1. **Matrix:** Outstanding-producer bits per entry.
//! 2. **Waiting Set:** Entries inserted but not yet selected.
//! 3. **Selector:** Lowest-index-first multi-select over the eligible set.

use tracing::debug;

use crate::common::{BitSet, PhysReg};
use crate::config::Config;
use crate::core::uop::RenamedOp;
use crate::stats::CoreStats;

/// The dependency matrix implementation.
pub mod matrix;

/// The priority selector implementation.
pub mod select;

pub use matrix::DependencyMatrix;
pub use select::{IssueSlot, Selector};

/// One step's wakeup and select state, advanced exactly once per step.
///
/// Selection at step `t` observes the state committed at step `t - 1`: an
/// entry inserted this step is never selected this step, even when its row is
/// trivially clear. That bounds each step's work to "update" or "select",
/// never both chained.
#[derive(Debug)]
pub struct Scheduler {
    matrix: DependencyMatrix,
    waiting: BitSet,
    selector: Selector,
    issue_width: usize,
}

impl Scheduler {
    /// Creates a scheduler for the given core geometry.
    pub fn new(config: &Config) -> Self {
        Self {
            matrix: DependencyMatrix::new(config.phys_regs),
            waiting: BitSet::new(config.phys_regs),
            selector: Selector::new(config.issue_width),
            issue_width: config.issue_width,
        }
    }

    /// Returns true if `r` has been inserted but not yet selected.
    #[inline]
    pub fn is_waiting(&self, r: PhysReg) -> bool {
        self.waiting.contains(r.index())
    }

    /// Returns true if row `r` has no outstanding producer bits.
    #[inline]
    pub fn is_clear(&self, r: PhysReg) -> bool {
        self.matrix.is_clear(r)
    }

    /// Number of entries inserted but not yet selected.
    #[inline]
    pub fn waiting_count(&self) -> usize {
        self.waiting.count_ones()
    }

    /// Advances the scheduler by one step.
    ///
    /// Derive phase: the eligible set (`clear ∧ waiting`) and the selection
    /// come from the previous step's committed state. Commit phase: this
    /// step's inserts, the completion clear, and the waiting-set update land
    /// together at the step boundary.
    pub fn step(
        &mut self,
        renamed: &[RenamedOp],
        completions: &BitSet,
        stats: &mut CoreStats,
    ) -> Vec<IssueSlot> {
        let mut eligible = BitSet::new(self.matrix.size());
        for r in self.waiting.ones() {
            if self.matrix.is_clear(PhysReg(r)) {
                eligible.set(r);
            }
        }
        let candidates = eligible.count_ones();
        let slots = self.selector.select(&eligible);

        let mut inserted = BitSet::new(self.matrix.size());
        for op in renamed.iter().filter(|op| op.valid && !op.dest.is_none()) {
            self.matrix.insert_row(op.dest, op.srca, op.srcb);
            inserted.set(op.dest.index());
            stats.rows_inserted += 1;
        }
        self.matrix.clear_columns(completions);

        let mut selected = BitSet::new(self.matrix.size());
        for slot in slots.iter().filter(|slot| slot.valid) {
            selected.set(slot.reg.index());
            stats.uops_issued += 1;
            debug!("issued {}", slot.reg);
        }
        self.waiting.subtract(&selected);
        self.waiting.union_with(&inserted);

        stats.completions += completions.count_ones() as u64;
        if candidates == 0 {
            stats.starved_steps += 1;
        } else if candidates > self.issue_width {
            stats.saturated_steps += 1;
        }

        slots
    }
}
