//! Fixed-latency execution-unit model.
//!
//! The core treats completion broadcasts as an external input. This model is
//! the simplest collaborator that produces them: every issued id completes a
//! fixed number of steps after issue, in issue order. The latency is
//! configurable; at the default of one step, issued entries loop straight
//! back as the next step's clear input.

use std::collections::VecDeque;

use crate::common::{CoreError, PhysReg};
use crate::core::sched::IssueSlot;

/// Replays issued ids as completion broadcasts after a fixed delay.
#[derive(Debug)]
pub struct FixedLatencyExecutor {
    /// One entry per in-flight step, oldest first.
    pending: VecDeque<Vec<PhysReg>>,
    latency: usize,
}

impl FixedLatencyExecutor {
    /// Creates an executor with the given completion latency in steps.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Configuration`] for latency 0: a completion
    /// cannot precede the selection that produces it.
    pub fn new(latency: usize) -> Result<Self, CoreError> {
        if latency == 0 {
            return Err(CoreError::Configuration(
                "completion latency must be at least one step".into(),
            ));
        }
        Ok(Self {
            pending: VecDeque::with_capacity(latency + 1),
            latency,
        })
    }

    /// The configured latency in steps.
    pub fn latency(&self) -> usize {
        self.latency
    }

    /// Ids whose completion broadcast is due this step.
    pub fn due(&self) -> Vec<PhysReg> {
        if self.pending.len() >= self.latency {
            self.pending.front().cloned().unwrap_or_default()
        } else {
            Vec::new()
        }
    }

    /// Retires the due broadcast and records this step's issued set.
    pub fn advance(&mut self, issued: &[IssueSlot]) {
        if self.pending.len() >= self.latency {
            let _ = self.pending.pop_front();
        }
        self.pending.push_back(
            issued
                .iter()
                .filter(|slot| slot.valid)
                .map(|slot| slot.reg)
                .collect(),
        );
    }

    /// Total ids issued but not yet broadcast.
    pub fn outstanding(&self) -> usize {
        self.pending.iter().map(Vec::len).sum()
    }
}
