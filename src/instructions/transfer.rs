//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer

use crate::cpu::Register;
use crate::{MemoryBus, CPU};

/// Copies `from` into `to` and updates Z and N from the copied value.
pub(crate) fn execute_transfer<M: MemoryBus>(cpu: &mut CPU<M>, from: Register, to: Register) {
    let value = cpu.register(from);
    cpu.load_register(to, value);
}

/// TSX sets Z and N like any other transfer.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let sp = cpu.sp;
    cpu.load_register(Register::X, sp);
}

/// TXS is the one transfer that leaves the flags alone.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}
