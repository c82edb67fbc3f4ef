//! # CPU Configuration
//!
//! Policy knobs that change how the core treats conditions the real chip never
//! reports: where execution starts after reset, what happens on a byte with no
//! dispatch-table entry, and whether the stack pointer may wrap inside page 1.

/// Where the program counter points after reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetVector {
    /// PC is set to 0xFFFC itself; the program starts at the vector address.
    #[default]
    Fixed,

    /// PC is loaded from the little-endian word stored at 0xFFFC/0xFFFD,
    /// as the silicon does.
    Indirect,
}

/// How `execute` reacts to an opcode with no dispatch-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownOpcodePolicy {
    /// Log a warning, charge the fetch cycle, and keep running.
    #[default]
    Skip,

    /// Stop the run and return `ExecutionError::UnknownOpcode`.
    Halt,
}

/// Configuration for a `CPU` instance.
///
/// # Examples
///
/// ```
/// use cycle6502::{CpuConfig, ResetVector, UnknownOpcodePolicy};
///
/// let config = CpuConfig::default()
///     .with_reset_vector(ResetVector::Indirect)
///     .with_stack_checks(true);
///
/// assert_eq!(config.unknown_opcodes, UnknownOpcodePolicy::Skip);
/// assert!(config.stack_checks);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuConfig {
    /// Reset-vector handling.
    pub reset_vector: ResetVector,

    /// Unknown-opcode handling inside `execute`.
    pub unknown_opcodes: UnknownOpcodePolicy,

    /// Report stack pointer wraparound as an error instead of wrapping.
    pub stack_checks: bool,
}

impl CpuConfig {
    /// Hardware-faithful reset, halting on unknown opcodes, checked stack.
    pub fn strict() -> Self {
        Self {
            reset_vector: ResetVector::Indirect,
            unknown_opcodes: UnknownOpcodePolicy::Halt,
            stack_checks: true,
        }
    }

    pub fn with_reset_vector(mut self, reset_vector: ResetVector) -> Self {
        self.reset_vector = reset_vector;
        self
    }

    pub fn with_unknown_opcodes(mut self, policy: UnknownOpcodePolicy) -> Self {
        self.unknown_opcodes = policy;
        self
    }

    pub fn with_stack_checks(mut self, enabled: bool) -> Self {
        self.stack_checks = enabled;
        self
    }
}
