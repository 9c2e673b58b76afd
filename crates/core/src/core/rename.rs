//! Register renamer: architectural ids to physical ids, one batch per step.
//!
//! The renamer eliminates false dependencies across a decode batch:
//! 1. **Allocation:** A running counter hands consecutive physical ids to every
//!    valid lane with a destination, in program order.
//! 2. **Same-step bypass:** A source that names an architectural register
//!    written earlier in the same batch takes the writer's fresh physical id
//!    instead of the stale table entry; the closest preceding writer wins.
//! 3. **Write suppression:** When several lanes write the same architectural
//!    register, only the last one updates the rename table.
//!
//! All outputs are derived from the table state committed at the previous
//! step; the table and counter mutate only after the whole batch validates.

use tracing::trace;

use crate::common::{ArchReg, BitSet, CoreError, PhysReg};
use crate::config::Config;
use crate::core::uop::{DecodedOp, RenamedOp};
use crate::stats::CoreStats;

/// Register Alias Table: maps each architectural register to the physical
/// register holding its most recent definition.
///
/// Initially every architectural register maps to the sentinel [`PhysReg::NONE`],
/// i.e. "the architectural value, always ready".
#[derive(Debug)]
pub struct RenameTable {
    map: Vec<PhysReg>,
}

impl RenameTable {
    /// Creates a table for `arch_regs` entries, all mapped to the sentinel.
    fn new(arch_regs: usize) -> Self {
        Self {
            map: vec![PhysReg::NONE; arch_regs],
        }
    }

    /// Returns the current mapping for `reg`.
    #[inline]
    pub fn read(&self, reg: ArchReg) -> PhysReg {
        self.map[reg.index()]
    }

    /// Points `reg` at `preg`. Only the renamer's commit phase may do this.
    fn write(&mut self, reg: ArchReg, preg: PhysReg) {
        self.map[reg.index()] = preg;
    }
}

/// The rename stage: owns the alias table and the allocation counter.
#[derive(Debug)]
pub struct Renamer {
    rat: RenameTable,
    /// Next physical id to hand out. Never the sentinel.
    next_free: usize,
    arch_regs: usize,
    phys_regs: usize,
    decode_width: usize,
}

impl Renamer {
    /// Creates a renamer for the given core geometry.
    pub fn new(config: &Config) -> Self {
        Self {
            rat: RenameTable::new(config.arch_regs),
            next_free: 1,
            arch_regs: config.arch_regs,
            phys_regs: config.phys_regs,
            decode_width: config.decode_width,
        }
    }

    /// Read access to the alias table, for inspection and tests.
    pub fn rat(&self) -> &RenameTable {
        &self.rat
    }

    /// Renames one batch and commits the table updates.
    ///
    /// `live` marks physical ids that are still in flight; allocating one of
    /// them would alias two instructions, so the batch is rejected instead.
    /// On any error the table and counter are left untouched.
    ///
    /// # Errors
    ///
    /// [`CoreError::Configuration`] if the batch is wider than the decode
    /// width, [`CoreError::OutOfRange`] if a valid lane names an architectural
    /// id outside the configured space, and [`CoreError::Exhaustion`] if the
    /// allocation counter wraps onto a live id.
    pub fn rename_batch(
        &mut self,
        batch: &[DecodedOp],
        live: &BitSet,
        stats: &mut CoreStats,
    ) -> Result<Vec<RenamedOp>, CoreError> {
        if batch.len() > self.decode_width {
            return Err(CoreError::Configuration(format!(
                "batch of {} lanes exceeds decode width {}",
                batch.len(),
                self.decode_width
            )));
        }
        for op in batch.iter().filter(|op| op.valid) {
            for reg in [Some(op.srca), Some(op.srcb), op.dest].into_iter().flatten() {
                if reg.index() >= self.arch_regs {
                    return Err(CoreError::OutOfRange {
                        reg: reg.index(),
                        limit: self.arch_regs,
                    });
                }
            }
        }

        // Allocation pass: consecutive ids in program order, wrapping past the
        // sentinel. Ids already in flight (or handed out twice within this
        // same batch) reject the whole batch before anything commits.
        let mut allocated = vec![PhysReg::NONE; batch.len()];
        let mut batch_allocs = BitSet::new(self.phys_regs);
        let mut cursor = self.next_free;
        for (lane, op) in batch.iter().enumerate() {
            if !op.valid || op.dest.is_none() {
                continue;
            }
            if live.contains(cursor) || batch_allocs.contains(cursor) {
                return Err(CoreError::Exhaustion(PhysReg(cursor)));
            }
            batch_allocs.set(cursor);
            allocated[lane] = PhysReg(cursor);
            cursor = if cursor + 1 == self.phys_regs { 1 } else { cursor + 1 };
        }

        // Source lookup with the same-step bypass chain. Scanning writers in
        // lane order and letting later matches overwrite earlier ones makes
        // the closest preceding writer win.
        let mut renamed = vec![RenamedOp::default(); batch.len()];
        for (lane, op) in batch.iter().enumerate() {
            if !op.valid {
                continue;
            }
            let mut srca = self.rat.read(op.srca);
            let mut srcb = self.rat.read(op.srcb);
            let mut bypassed = [false; 2];
            for (writer, alloc) in batch.iter().zip(&allocated).take(lane) {
                if alloc.is_none() {
                    continue;
                }
                if writer.dest == Some(op.srca) {
                    srca = *alloc;
                    bypassed[0] = true;
                }
                if writer.dest == Some(op.srcb) {
                    srcb = *alloc;
                    bypassed[1] = true;
                }
            }
            stats.uops_renamed += 1;
            stats.operand_bypasses += u64::from(bypassed[0]) + u64::from(bypassed[1]);
            renamed[lane] = RenamedOp {
                valid: true,
                srca,
                srcb,
                dest: allocated[lane],
            };
            trace!(
                lane,
                "renamed {} <- {} {} as {} <- {} {}",
                op.dest.map_or_else(|| "-".into(), |d| d.to_string()),
                op.srca,
                op.srcb,
                allocated[lane],
                srca,
                srcb,
            );
        }

        // Commit: the last writer of each architectural register owns the
        // table entry; earlier same-step writers are suppressed.
        let mut written = BitSet::new(self.arch_regs);
        for (lane, op) in batch.iter().enumerate().rev() {
            if allocated[lane].is_none() {
                continue;
            }
            if let Some(dest) = op.dest {
                if written.contains(dest.index()) {
                    stats.rat_writes_suppressed += 1;
                } else {
                    written.set(dest.index());
                    self.rat.write(dest, allocated[lane]);
                    stats.rat_writes += 1;
                }
            }
        }
        self.next_free = cursor;
        stats.pregs_allocated += batch_allocs.count_ones() as u64;

        Ok(renamed)
    }
}
