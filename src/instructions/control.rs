//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JSR: Jump to Subroutine (6 cycles)
//! - RTS: Return from Subroutine (6 cycles)
//! - JMP: Jump, absolute (3 cycles) or indirect (5 cycles)
//!
//! JSR pushes the address of its own last byte (PC - 1 once the operand is
//! fetched); RTS pulls it and adds one. The indirect JMP page-wrap quirk is
//! handled by the Indirect addressing mode, not here.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

fn jump_target(operand: Operand) -> u16 {
    match operand {
        Operand::Address(addr) => addr,
        _ => unreachable!("jump without address operand: {:?}", operand),
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Cycle timing: opcode 1 + target fetch 2 + internal 1 + return address
/// push 2 = 6. No flags affected.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let target = jump_target(operand);
    cpu.tick();
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Cycle timing: opcode 1 + dummy read 1 + SP adjust 1 + pull 2 + PC
/// increment 1 = 6. No flags affected.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    let return_address = cpu.pull_word();
    cpu.tick();
    cpu.pc = return_address.wrapping_add(1);
}

/// Executes the JMP instruction. No flags affected.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.pc = jump_target(operand);
}
