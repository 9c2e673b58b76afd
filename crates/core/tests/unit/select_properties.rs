//! Selector Properties.
//!
//! Property-based coverage of the multi-bit priority selector: for any
//! eligibility vector and issue width, the valid outputs are exactly the
//! lowest set indices in ascending order, each picked once, with invalid
//! padding beyond the candidate count.

use proptest::prelude::*;

use wakesim_core::common::{BitSet, PhysReg};
use wakesim_core::core::sched::Selector;

proptest! {
    #[test]
    fn selects_lowest_indices_ascending(
        bits in proptest::collection::btree_set(1usize..128, 0..=32),
        width in 1usize..=8,
    ) {
        let mut eligible = BitSet::new(128);
        for &b in &bits {
            eligible.set(b);
        }

        let slots = Selector::new(width).select(&eligible);
        prop_assert_eq!(slots.len(), width);

        // Valid slots: the `width` lowest candidates, ascending. The btree
        // set iterates in ascending order, so it is the reference ordering.
        let expected: Vec<usize> = bits.iter().copied().take(width).collect();
        let picked: Vec<usize> = slots
            .iter()
            .filter(|slot| slot.valid)
            .map(|slot| slot.reg.index())
            .collect();
        prop_assert_eq!(&picked, &expected);

        // Padding slots report the sentinel and no validity.
        for slot in &slots[picked.len()..] {
            prop_assert!(!slot.valid);
            prop_assert_eq!(slot.reg, PhysReg::NONE);
        }
    }

    #[test]
    fn never_selects_more_than_candidates(
        bits in proptest::collection::btree_set(1usize..64, 0..=16),
        width in 1usize..=8,
    ) {
        let mut eligible = BitSet::new(64);
        for &b in &bits {
            eligible.set(b);
        }
        let slots = Selector::new(width).select(&eligible);
        let valid = slots.iter().filter(|slot| slot.valid).count();
        prop_assert_eq!(valid, bits.len().min(width));
    }
}
