//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR on the accumulator (2 cycles) or memory
//! (read-modify-write, 5-7 cycles). The bit shifted out lands in carry;
//! Z and N follow the result.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.modify_operand(operand, |cpu, value| {
        let result = value << 1;
        cpu.flag_c = (value & 0x80) != 0;
        cpu.update_zero_negative(result);
        result
    });
}

pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.modify_operand(operand, |cpu, value| {
        let result = value >> 1;
        cpu.flag_c = (value & 0x01) != 0;
        cpu.update_zero_negative(result);
        result
    });
}

/// Rotate left through carry: old carry enters bit 0.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.modify_operand(operand, |cpu, value| {
        let carry_in = if cpu.flag_c { 0x01 } else { 0x00 };
        let result = (value << 1) | carry_in;
        cpu.flag_c = (value & 0x80) != 0;
        cpu.update_zero_negative(result);
        result
    });
}

/// Rotate right through carry: old carry enters bit 7.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.modify_operand(operand, |cpu, value| {
        let carry_in = if cpu.flag_c { 0x80 } else { 0x00 };
        let result = (value >> 1) | carry_in;
        cpu.flag_c = (value & 0x01) != 0;
        cpu.update_zero_negative(result);
        result
    });
}
