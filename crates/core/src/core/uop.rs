//! Operation records carried between the decode boundary and the wakeup stage.
//!
//! This module defines the per-lane payloads exchanged across the core:
//! 1. **Decoded Operations:** Architectural-id operations supplied by the decoder.
//! 2. **Renamed Operations:** The same operations after physical id assignment.
//!
//! A batch is an ordered slice of up to `decode_width` entries; slice order is
//! program order within the step.

use crate::common::{ArchReg, PhysReg};

/// One decode lane's operation, in architectural register ids.
///
/// Invalid lanes (`valid == false`) are bubbles: their register fields are
/// ignored and they neither allocate nor update any state.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodedOp {
    /// Whether this lane carries an operation this step.
    pub valid: bool,
    /// First source operand.
    pub srca: ArchReg,
    /// Second source operand.
    pub srcb: ArchReg,
    /// Destination register, if the operation writes one.
    pub dest: Option<ArchReg>,
}

impl DecodedOp {
    /// A three-operand operation: `dest <- srca op srcb`.
    pub fn new(dest: ArchReg, srca: ArchReg, srcb: ArchReg) -> Self {
        Self {
            valid: true,
            srca,
            srcb,
            dest: Some(dest),
        }
    }

    /// An empty lane.
    pub fn bubble() -> Self {
        Self::default()
    }
}

/// One decode lane's operation after renaming, in physical register ids.
///
/// Produced combinationally from a [`DecodedOp`] batch; the destination is
/// [`PhysReg::NONE`] when the operation writes no register.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenamedOp {
    /// Whether this lane carries an operation this step.
    pub valid: bool,
    /// Renamed first source operand.
    pub srca: PhysReg,
    /// Renamed second source operand.
    pub srcb: PhysReg,
    /// Freshly allocated destination, or the sentinel for no destination.
    pub dest: PhysReg,
}
