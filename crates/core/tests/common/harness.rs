use wakesim_core::common::{ArchReg, PhysReg};
use wakesim_core::core::StepOutput;
use wakesim_core::core::uop::DecodedOp;
use wakesim_core::{Config, Simulator};

/// A three-operand operation: `dest <- srca op srcb`.
pub fn op(dest: usize, srca: usize, srcb: usize) -> DecodedOp {
    DecodedOp::new(ArchReg(dest), ArchReg(srca), ArchReg(srcb))
}

/// An operation with a destination and no register sources.
pub fn write_only(dest: usize) -> DecodedOp {
    op(dest, 0, 0)
}

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// A small default geometry: 8 architectural, 16 physical registers,
    /// 2-wide decode and issue, one-step completion latency.
    pub fn new() -> Self {
        Self::with_config(Config {
            arch_regs: 8,
            phys_regs: 16,
            decode_width: 2,
            issue_width: 2,
            completion_latency: 1,
        })
    }

    pub fn with_config(config: Config) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        Self {
            sim: Simulator::new(config).unwrap(),
        }
    }

    /// Advances one step with the given batch.
    pub fn step(&mut self, batch: &[DecodedOp]) -> StepOutput {
        self.sim.step(batch).unwrap()
    }

    /// Advances one step with an empty batch, returning the issued ids.
    pub fn step_empty(&mut self) -> Vec<PhysReg> {
        issued_regs(&self.step(&[]))
    }

    /// The physical register currently mapped to `reg`.
    pub fn mapping(&self, reg: usize) -> PhysReg {
        self.sim.core.rat().read(ArchReg(reg))
    }
}

/// The valid selections of a step, in slot order.
pub fn issued_regs(out: &StepOutput) -> Vec<PhysReg> {
    out.issued
        .iter()
        .filter(|slot| slot.valid)
        .map(|slot| slot.reg)
        .collect()
}
