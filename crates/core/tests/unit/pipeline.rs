//! End-to-End Step Sequences.
//!
//! Drives the assembled simulator (rename, wakeup, select, fixed-latency
//! completion) through multi-step programs and checks the cycle-by-cycle
//! timing of allocation, bypass, wakeup, and issue.

use pretty_assertions::assert_eq;
use rstest::rstest;

use wakesim_core::Config;
use wakesim_core::common::{CoreError, PhysReg};

use crate::common::{TestContext, issued_regs, op, write_only};

fn small(phys_regs: usize, width: usize, latency: usize) -> TestContext {
    TestContext::with_config(Config {
        arch_regs: 8,
        phys_regs,
        decode_width: width,
        issue_width: width,
        completion_latency: latency,
    })
}

#[test]
fn test_two_op_dependency_timeline() {
    let mut ctx = small(8, 2, 1);

    // Step 0: both operations rename; the dependent one picks up the fresh id.
    let out = ctx.step(&[write_only(1), op(2, 1, 1)]);
    assert_eq!(out.renamed[0].dest, PhysReg(1));
    assert_eq!(out.renamed[1].dest, PhysReg(2));
    assert_eq!(out.renamed[1].srca, PhysReg(1));
    assert!(issued_regs(&out).is_empty());

    // Step 1: the independent entry issues after its insertion lag.
    assert_eq!(ctx.step_empty(), vec![PhysReg(1)]);

    // Step 2: the completion broadcast for 1 lands; 2 is not yet selectable.
    assert_eq!(ctx.step_empty(), vec![]);
    assert!(!ctx.sim.core.is_in_flight(PhysReg(1)));

    // Step 3: 2's row cleared at the previous boundary, so it issues now.
    assert_eq!(ctx.step_empty(), vec![PhysReg(2)]);
}

#[test]
fn test_dependency_chain_issues_in_program_order() {
    let mut ctx = small(16, 2, 1);
    let _ = ctx.step(&[write_only(1), op(2, 1, 0)]);
    let out = ctx.step(&[op(3, 2, 0)]);

    let mut issued = issued_regs(&out);
    issued.extend(ctx.sim.drain(32).unwrap());
    assert_eq!(issued, vec![PhysReg(1), PhysReg(2), PhysReg(3)]);
}

#[test]
fn test_independent_entries_fill_issue_slots() {
    let mut ctx = small(16, 2, 1);
    let _ = ctx.step(&[write_only(1), write_only(2)]);
    let out = ctx.step(&[write_only(3), write_only(4)]);
    assert_eq!(issued_regs(&out), vec![PhysReg(1), PhysReg(2)]);
    assert_eq!(ctx.step_empty(), vec![PhysReg(3), PhysReg(4)]);
}

#[test]
fn test_rename_visible_to_next_step() {
    let mut ctx = small(16, 2, 1);
    let _ = ctx.step(&[write_only(3)]);
    assert_eq!(ctx.mapping(3), PhysReg(1));

    // A later read of a3 sees the committed mapping, not the sentinel.
    let out = ctx.step(&[op(4, 3, 0)]);
    assert_eq!(out.renamed[0].srca, PhysReg(1));
}

#[test]
fn test_write_suppression_end_to_end() {
    let mut ctx = small(16, 2, 1);
    // Both lanes write a3; only the second allocation owns the table entry.
    let _ = ctx.step(&[write_only(3), write_only(3)]);
    assert_eq!(ctx.mapping(3), PhysReg(2));

    let out = ctx.step(&[op(4, 3, 0)]);
    assert_eq!(out.renamed[0].srca, PhysReg(2));
}

#[test]
fn test_allocation_wraps_after_completion() {
    let mut ctx = small(4, 1, 1);
    let mut dests = Vec::new();
    for _ in 0..5 {
        let out = ctx.step(&[write_only(1)]);
        dests.push(out.renamed[0].dest);
        let _ = ctx.sim.drain(8).unwrap();
    }
    // Three real ids, no reclamation: the counter cycles 1, 2, 3, 1, 2.
    let expected: Vec<_> = [1, 2, 3, 1, 2].iter().map(|&r| PhysReg(r)).collect();
    assert_eq!(dests, expected);
}

#[test]
fn test_exhaustion_without_completions() {
    // Drive the core directly with no completion broadcasts: the id pool
    // never drains, so the fourth allocation wraps onto a live id.
    let mut ctx = small(4, 1, 1);
    for _ in 0..3 {
        let _ = ctx.sim.core.step(&[write_only(1)], &[]).unwrap();
    }
    let err = ctx.sim.core.step(&[write_only(1)], &[]).unwrap_err();
    assert_eq!(err, CoreError::Exhaustion(PhysReg(1)));
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
fn test_completion_latency_defers_wakeup(#[case] latency: usize) {
    let mut ctx = small(16, 2, latency);
    let _ = ctx.step(&[write_only(1), op(2, 1, 0)]);
    assert_eq!(ctx.step_empty(), vec![PhysReg(1)]);

    // The dependent entry waits out the broadcast latency plus its own
    // insertion-to-selection lag.
    for _ in 0..latency {
        assert_eq!(ctx.step_empty(), vec![]);
    }
    assert_eq!(ctx.step_empty(), vec![PhysReg(2)]);
}

#[test]
fn test_stats_over_a_run() {
    let mut ctx = small(16, 2, 1);
    let _ = ctx.step(&[write_only(1), op(2, 1, 1)]);
    let _ = ctx.sim.drain(16).unwrap();

    let stats = ctx.sim.core.stats();
    assert_eq!(stats.uops_renamed, 2);
    assert_eq!(stats.pregs_allocated, 2);
    assert_eq!(stats.uops_issued, 2);
    assert_eq!(stats.operand_bypasses, 2);
    assert!(stats.steps >= 4);
}
