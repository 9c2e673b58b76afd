//! Producer/consumer dependency matrix for wakeup.
//!
//! One bit-row per physical register id: row `r`'s set bits are the producers
//! `r` still waits on. The representation turns "did any of my sources
//! complete" into a word-wide mask per step, and lets any number of
//! simultaneous completions retire against any number of new dependents in a
//! single step:
//! 1. **Insert:** One slot per decode lane adds a row built from the lane's
//!    two source operands.
//! 2. **Clear:** A hot bit-vector of completed producers is removed from every
//!    row at once.
//! 3. **Query:** `is_clear(r)` reports whether row `r` has no outstanding bits.

use crate::common::{BitSet, PhysReg};

/// The wakeup matrix: rows are consumers, columns are producers.
///
/// Row 0 is not a real row; the sentinel is hardwired clear. Within any row,
/// bit 0 and the row's own bit are structurally excluded.
#[derive(Debug)]
pub struct DependencyMatrix {
    rows: Vec<BitSet>,
    size: usize,
}

impl DependencyMatrix {
    /// Creates an all-clear matrix over `size` physical register ids.
    pub fn new(size: usize) -> Self {
        Self {
            rows: (0..size).map(|_| BitSet::new(size)).collect(),
            size,
        }
    }

    /// Returns the number of ids the matrix covers.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if row `r` has no outstanding producer bits.
    /// The sentinel always reports clear.
    #[inline]
    pub fn is_clear(&self, r: PhysReg) -> bool {
        r.is_none() || self.rows[r.index()].is_empty()
    }

    /// Adds the dependencies of one insert lane to row `row`.
    ///
    /// Sentinel operands and self-dependencies never enter the row. Inserting
    /// into the same row twice is a plain OR, so lane order does not matter.
    /// Sentinel rows are ignored.
    pub fn insert_row(&mut self, row: PhysReg, cola: PhysReg, colb: PhysReg) {
        if row.is_none() {
            return;
        }
        let bits = &mut self.rows[row.index()];
        for col in [cola, colb] {
            if !col.is_none() && col != row {
                bits.set(col.index());
            }
        }
    }

    /// Removes every producer in `completed` from every row.
    ///
    /// Runs after the step's inserts, so a dependency inserted and completed
    /// in the same step ends up cleared. Clearing an absent bit is a no-op.
    pub fn clear_columns(&mut self, completed: &BitSet) {
        if completed.is_empty() {
            return;
        }
        for row in &mut self.rows {
            row.subtract(completed);
        }
    }
}
