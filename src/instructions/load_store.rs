//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA, LDX, LDY: Load a register, setting Z and N
//! - STA, STX, STY: Store a register, no flags affected
//!
//! Every addressing mode of a load goes through the same Z/N rule, so equal
//! operand values give equal flags no matter how they were addressed.

use crate::addressing::Operand;
use crate::cpu::Register;
use crate::{MemoryBus, CPU};

/// Loads the operand into `register` and updates Z and N.
pub(crate) fn execute_load<M: MemoryBus>(cpu: &mut CPU<M>, register: Register, operand: Operand) {
    let value = cpu.load_operand(operand);
    cpu.load_register(register, value);
}

/// Stores `register` at the effective address.
///
/// Indexed stores were already charged their fix-up cycle during operand
/// resolution, page cross or not.
pub(crate) fn execute_store<M: MemoryBus>(cpu: &mut CPU<M>, register: Register, operand: Operand) {
    let value = cpu.register(register);
    cpu.store_operand(operand, value);
}
