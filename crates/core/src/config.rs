//! Configuration system for the issue core.
//!
//! This module defines the construction-time parameters of the core. It provides:
//! 1. **Defaults:** The baseline geometry of the modeled machine.
//! 2. **Structure:** A single `Config` carrying register counts and lane widths.
//! 3. **Validation:** Consistency checks applied before any state is built.
//!
//! Configuration is supplied via JSON (use `serde_json`) or `Config::default()`.

use serde::Deserialize;

use crate::common::CoreError;

/// Default configuration constants for the issue core.
///
/// These values define the baseline machine geometry when not explicitly
/// overridden.
mod defaults {
    /// Number of program-visible architectural registers.
    pub const ARCH_REGS: usize = 32;

    /// Number of physical (renaming) registers, including the id-0 sentinel.
    ///
    /// Power-of-two sizing keeps id arithmetic cheap but is not required.
    pub const PHYS_REGS: usize = 64;

    /// Decode width: operations accepted from the decoder per step.
    pub const DECODE_WIDTH: usize = 4;

    /// Issue width: ready entries selected for dispatch per step.
    pub const ISSUE_WIDTH: usize = 4;

    /// Steps between an entry issuing and its completion broadcast, as
    /// modeled by the bundled fixed-latency executor.
    pub const COMPLETION_LATENCY: usize = 1;
}

/// Issue core configuration, fixed at construction and immutable thereafter.
///
/// # Example
///
/// ```
/// use wakesim_core::config::Config;
///
/// let json = r#"{
///     "arch_regs": 32,
///     "phys_regs": 128,
///     "decode_width": 2,
///     "issue_width": 2
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// config.validate().unwrap();
/// assert_eq!(config.phys_regs, 128);
/// assert_eq!(config.completion_latency, 1);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Architectural register count (the decoder's id space).
    #[serde(default = "Config::default_arch_regs")]
    pub arch_regs: usize,

    /// Physical register count, including the id-0 sentinel.
    #[serde(default = "Config::default_phys_regs")]
    pub phys_regs: usize,

    /// Decoded operations accepted per step.
    #[serde(default = "Config::default_decode_width")]
    pub decode_width: usize,

    /// Ready entries selected per step; also bounds completion lanes.
    #[serde(default = "Config::default_issue_width")]
    pub issue_width: usize,

    /// Execution latency, in steps, applied by the bundled executor model.
    /// The core itself takes completions as an external input and does not
    /// assume any particular latency.
    #[serde(default = "Config::default_completion_latency")]
    pub completion_latency: usize,
}

impl Config {
    /// Returns the default architectural register count.
    fn default_arch_regs() -> usize {
        defaults::ARCH_REGS
    }

    /// Returns the default physical register count.
    fn default_phys_regs() -> usize {
        defaults::PHYS_REGS
    }

    /// Returns the default decode width.
    fn default_decode_width() -> usize {
        defaults::DECODE_WIDTH
    }

    /// Returns the default issue width.
    fn default_issue_width() -> usize {
        defaults::ISSUE_WIDTH
    }

    /// Returns the default completion latency.
    fn default_completion_latency() -> usize {
        defaults::COMPLETION_LATENCY
    }

    /// Checks the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Configuration`] if any register count or lane
    /// width is zero, or if `phys_regs` cannot hold the sentinel plus at
    /// least one real register.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.arch_regs == 0 {
            return Err(CoreError::Configuration("arch_regs must be nonzero".into()));
        }
        if self.decode_width == 0 {
            return Err(CoreError::Configuration(
                "decode_width must be nonzero".into(),
            ));
        }
        if self.issue_width == 0 {
            return Err(CoreError::Configuration(
                "issue_width must be nonzero".into(),
            ));
        }
        if self.phys_regs < 2 {
            return Err(CoreError::Configuration(format!(
                "phys_regs = {} cannot hold the sentinel plus a real register",
                self.phys_regs
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arch_regs: defaults::ARCH_REGS,
            phys_regs: defaults::PHYS_REGS,
            decode_width: defaults::DECODE_WIDTH,
            issue_width: defaults::ISSUE_WIDTH,
            completion_latency: defaults::COMPLETION_LATENCY,
        }
    }
}
