//! Simulator: owns the issue core and the execution model side-by-side.
//!
//! Each step closes the loop the core leaves open: completions due from the
//! executor feed the core's clear input, and the core's selected entries feed
//! the executor. A step either commits everywhere or (on a rejected input)
//! nowhere.

use crate::common::{CoreError, PhysReg};
use crate::config::Config;
use crate::core::issue::{IssueCore, StepOutput};
use crate::core::uop::DecodedOp;
use crate::sim::executor::FixedLatencyExecutor;

/// Top-level simulator: issue core plus completion-latency model.
#[derive(Debug)]
pub struct Simulator {
    /// The issue core under simulation.
    pub core: IssueCore,
    /// The execution-unit model producing completion broadcasts.
    pub executor: FixedLatencyExecutor,
}

impl Simulator {
    /// Creates a simulator from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Configuration`] if the configuration fails
    /// validation or specifies a zero completion latency.
    pub fn new(config: Config) -> Result<Self, CoreError> {
        let executor = FixedLatencyExecutor::new(config.completion_latency)?;
        Ok(Self {
            core: IssueCore::new(config)?,
            executor,
        })
    }

    /// Advances the simulation by one step with the given decode batch.
    ///
    /// # Errors
    ///
    /// Propagates any [`CoreError`] from the core; the executor state is left
    /// untouched when the step is rejected.
    pub fn step(&mut self, batch: &[DecodedOp]) -> Result<StepOutput, CoreError> {
        let completions = self.executor.due();
        let out = self.core.step(batch, &completions)?;
        self.executor.advance(&out.issued);
        Ok(out)
    }

    /// Steps with empty decode batches until nothing is waiting and no
    /// broadcast is outstanding, up to `max_steps`. Returns every id issued
    /// while draining, in issue order. Entries whose producers never complete
    /// stay waiting and stop the drain only at the step bound.
    ///
    /// # Errors
    ///
    /// Propagates any [`CoreError`] raised while draining.
    pub fn drain(&mut self, max_steps: usize) -> Result<Vec<PhysReg>, CoreError> {
        let mut issued = Vec::new();
        for _ in 0..max_steps {
            if self.core.waiting_count() == 0 && self.executor.outstanding() == 0 {
                break;
            }
            let out = self.step(&[])?;
            issued.extend(
                out.issued
                    .iter()
                    .filter(|slot| slot.valid)
                    .map(|slot| slot.reg),
            );
        }
        Ok(issued)
    }
}
