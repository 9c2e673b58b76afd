//! The issue core: rename and wakeup state behind a single step entry point.
//!
//! All mutable state (rename table, dependency matrix, waiting set, in-flight
//! set) lives here and advances exactly once per call to [`IssueCore::step`].
//! Callers supply a decode batch and the step's completion broadcast; they get
//! back the renamed batch and the selected entries.

use crate::common::{BitSet, CoreError, PhysReg};
use crate::config::Config;
use crate::core::rename::{RenameTable, Renamer};
use crate::core::sched::{IssueSlot, Scheduler};
use crate::core::uop::{DecodedOp, RenamedOp};
use crate::stats::CoreStats;

/// Everything one step produces.
#[derive(Clone, Debug)]
pub struct StepOutput {
    /// The decode batch after renaming, one entry per input lane.
    pub renamed: Vec<RenamedOp>,
    /// The selected entries, one per issue slot; invalid slots are padding.
    pub issued: Vec<IssueSlot>,
}

/// The instruction-issue core of an out-of-order pipeline.
///
/// A synchronous step machine: every derived value in a step comes from the
/// state committed at the previous step, and all updates commit together at
/// the step boundary. The decoder, execution units, and commit logic are
/// external collaborators wired up through [`IssueCore::step`]'s inputs and
/// outputs.
#[derive(Debug)]
pub struct IssueCore {
    config: Config,
    renamer: Renamer,
    scheduler: Scheduler,
    /// Ids allocated and not yet completion-broadcast. Allocation onto one of
    /// these would alias two live instructions.
    in_flight: BitSet,
    stats: CoreStats,
}

impl IssueCore {
    /// Builds a core from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Configuration`] if the configuration is rejected
    /// by [`Config::validate`].
    pub fn new(config: Config) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            renamer: Renamer::new(&config),
            scheduler: Scheduler::new(&config),
            in_flight: BitSet::new(config.phys_regs),
            stats: CoreStats::new(),
            config,
        })
    }

    /// The configuration this core was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read access to the rename table.
    pub fn rat(&self) -> &RenameTable {
        self.renamer.rat()
    }

    /// Accumulated activity counters.
    pub fn stats(&self) -> &CoreStats {
        &self.stats
    }

    /// Returns true if `r` was allocated and has not yet broadcast completion.
    pub fn is_in_flight(&self, r: PhysReg) -> bool {
        self.in_flight.contains(r.index())
    }

    /// Returns true if `r` has been inserted but not yet selected.
    pub fn is_waiting(&self, r: PhysReg) -> bool {
        self.scheduler.is_waiting(r)
    }

    /// Number of entries inserted but not yet selected.
    pub fn waiting_count(&self) -> usize {
        self.scheduler.waiting_count()
    }

    /// Returns true if `r`'s dependency row is clear.
    pub fn is_clear(&self, r: PhysReg) -> bool {
        self.scheduler.is_clear(r)
    }

    /// Advances the core by one step.
    ///
    /// `batch` is the decoder's output for this step, at most `decode_width`
    /// lanes. `completions` is the execution units' broadcast for this step,
    /// at most `issue_width` producer ids; sentinel ids are ignored. The
    /// exhaustion check runs against the in-flight set committed at the
    /// previous boundary, so a completion cannot rescue an allocation landing
    /// in the same step.
    ///
    /// # Errors
    ///
    /// [`CoreError::Configuration`] if `batch` or `completions` exceed their
    /// lane widths, [`CoreError::OutOfRange`] for ids outside the configured
    /// spaces, and [`CoreError::Exhaustion`] if allocation wraps onto a live
    /// id. On error no state is modified.
    pub fn step(
        &mut self,
        batch: &[DecodedOp],
        completions: &[PhysReg],
    ) -> Result<StepOutput, CoreError> {
        if completions.len() > self.config.issue_width {
            return Err(CoreError::Configuration(format!(
                "{} completion lanes exceed issue width {}",
                completions.len(),
                self.config.issue_width
            )));
        }
        let mut clear = BitSet::new(self.config.phys_regs);
        for &r in completions {
            if r.index() >= self.config.phys_regs {
                return Err(CoreError::OutOfRange {
                    reg: r.index(),
                    limit: self.config.phys_regs,
                });
            }
            if !r.is_none() {
                clear.set(r.index());
            }
        }

        let renamed = self
            .renamer
            .rename_batch(batch, &self.in_flight, &mut self.stats)?;
        let issued = self.scheduler.step(&renamed, &clear, &mut self.stats);

        for op in renamed.iter().filter(|op| op.valid && !op.dest.is_none()) {
            self.in_flight.set(op.dest.index());
        }
        self.in_flight.subtract(&clear);
        self.stats.steps += 1;

        Ok(StepOutput { renamed, issued })
    }
}
