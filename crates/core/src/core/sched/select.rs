//! Multi-bit priority selector.
//!
//! Picks up to `issue_width` entries from an eligibility vector per step,
//! lowest index first. The hardware analogue is a chain of find-first-set
//! stages, each masking its pick out of the vector before the next stage; in
//! software that is iterated lowest-set-bit extraction on a working copy.

use crate::common::{BitSet, PhysReg};

/// One selector output slot.
///
/// Unused slots report the sentinel id with `valid == false`. Index 0 can
/// never be a valid pick because no real eligibility vector sets bit 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IssueSlot {
    /// The selected physical register id.
    pub reg: PhysReg,
    /// Whether this slot carries a selection.
    pub valid: bool,
}

/// Order-preserving multi-select over an eligibility vector.
#[derive(Debug)]
pub struct Selector {
    issue_width: usize,
}

impl Selector {
    /// Creates a selector with `issue_width` output slots.
    pub fn new(issue_width: usize) -> Self {
        Self { issue_width }
    }

    /// Extracts the lowest-indexed eligible entries, one per output slot.
    ///
    /// Always returns exactly `issue_width` slots; when fewer entries are
    /// eligible the remaining slots are invalid. No index appears twice.
    pub fn select(&self, eligible: &BitSet) -> Vec<IssueSlot> {
        let mut work = eligible.clone();
        (0..self.issue_width)
            .map(|_| {
                work.pop_lowest().map_or_else(IssueSlot::default, |idx| IssueSlot {
                    reg: PhysReg(idx),
                    valid: true,
                })
            })
            .collect()
    }
}
