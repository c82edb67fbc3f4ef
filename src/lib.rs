//! # Cycle-Counted 6502 CPU Core
//!
//! A software model of the NMOS 6502 that charges every micro-step (opcode
//! fetch, operand fetch, bus read, bus write, index addition, internal
//! operation) against a cycle budget, so instruction timing falls out of the
//! same code that produces the instruction's effect.
//!
//! ## Quick Start
//!
//! ```rust
//! use cycle6502::{FlatMemory, MemoryBus, CPU};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//! cpu.reset();
//!
//! // JSR $AA42 at the reset address, LDA #$05 in the subroutine
//! cpu.memory_mut().write(0xFFFC, 0x20);
//! cpu.memory_mut().write(0xFFFD, 0x42);
//! cpu.memory_mut().write(0xFFFE, 0xAA);
//! cpu.memory_mut().write(0xAA42, 0xA9);
//! cpu.memory_mut().write(0xAA43, 0x05);
//!
//! let consumed = cpu.execute(8).unwrap();
//! assert_eq!(consumed, 8);
//! assert_eq!(cpu.a(), 0x05);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - processor state, micro-steps and the execute loop
//! - `memory` - `MemoryBus` trait and the flat 64KB implementation
//! - `addressing` - addressing modes and operand resolution
//! - `opcodes` - the opcode dispatch table
//! - `config` - reset and error-handling policy

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod memory;
pub mod opcodes;

// Operation effects, dispatched from the opcode table
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use addressing::AddressingMode;
pub use config::{CpuConfig, ResetVector, UnknownOpcodePolicy};
pub use cpu::{RunState, CPU};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{decode, Instruction, Operation, DISPATCH_TABLE};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte has no entry in the dispatch table.
    ///
    /// Contains the opcode byte value for debugging purposes.
    UnknownOpcode(u8),

    /// A push would carry the stack pointer past the top of page 1.
    ///
    /// Only reported when stack checks are enabled.
    StackOverflow { sp: u8 },

    /// A pull would borrow the stack pointer below the bottom of page 1.
    ///
    /// Only reported when stack checks are enabled.
    StackUnderflow { sp: u8 },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnknownOpcode(opcode) => {
                write!(f, "Unhandled instruction: opcode 0x{:02X}", opcode)
            }
            ExecutionError::StackOverflow { sp } => {
                write!(f, "Stack overflow: push with SP=0x{:02X} would leave page 1", sp)
            }
            ExecutionError::StackUnderflow { sp } => {
                write!(f, "Stack underflow: pull with SP=0x{:02X} would leave page 1", sp)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
