//! # Increment and Decrement Instructions
//!
//! - INC, DEC: read-modify-write on memory (5-7 cycles)
//! - INX, INY, DEX, DEY: index registers (2 cycles)
//!
//! All wrap at 8 bits and set Z and N from the result. Carry is unaffected.

use crate::addressing::Operand;
use crate::cpu::Register;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.modify_operand(operand, |cpu, value| {
        let result = value.wrapping_add(1);
        cpu.update_zero_negative(result);
        result
    });
}

pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.modify_operand(operand, |cpu, value| {
        let result = value.wrapping_sub(1);
        cpu.update_zero_negative(result);
        result
    });
}

pub(crate) fn execute_increment<M: MemoryBus>(cpu: &mut CPU<M>, register: Register) {
    let value = cpu.register(register).wrapping_add(1);
    cpu.load_register(register, value);
}

pub(crate) fn execute_decrement<M: MemoryBus>(cpu: &mut CPU<M>, register: Register) {
    let value = cpu.register(register).wrapping_sub(1);
    cpu.load_register(register, value);
}
