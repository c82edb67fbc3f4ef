//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Compare a register with memory
//! - BIT: Test bits in memory against the accumulator
//!
//! Arithmetic is binary only. The D flag is stored but never consulted.

use crate::addressing::Operand;
use crate::cpu::Register;
use crate::{MemoryBus, CPU};

/// Adds `value` and the carry into the accumulator.
///
/// Carry is the unsigned carry out of bit 7. Overflow is set when both
/// inputs share a sign and the result's sign differs:
/// V = (A ^ result) & (M ^ result) & 0x80.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = if cpu.flag_c { 1 } else { 0 };

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;
    let overflow = ((a ^ result) & (value ^ result) & 0x80) != 0;

    cpu.update_carry_overflow(result16 > 0xFF, overflow);
    cpu.load_register(Register::A, result);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Page-crossed indexed reads already paid their extra cycle when the
/// operand was resolved.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.load_operand(operand);
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A - M - (1 - C) is A + !M + C in two's complement, so SBC is ADC of the
/// inverted operand. Carry set afterwards means no borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.load_operand(operand);
    add_with_carry(cpu, !value);
}

pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.load_operand(operand);
    let result = cpu.a & value;
    cpu.load_register(Register::A, result);
}

pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.load_operand(operand);
    let result = cpu.a | value;
    cpu.load_register(Register::A, result);
}

pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.load_operand(operand);
    let result = cpu.a ^ value;
    cpu.load_register(Register::A, result);
}

/// Executes CMP, CPX or CPY.
///
/// C = register >= M (unsigned), Z and N from register - M. The register
/// itself is not changed.
pub(crate) fn execute_compare<M: MemoryBus>(
    cpu: &mut CPU<M>,
    register: Register,
    operand: Operand,
) {
    let value = cpu.load_operand(operand);
    let lhs = cpu.register(register);

    cpu.flag_c = lhs >= value;
    cpu.update_zero_negative(lhs.wrapping_sub(value));
}

/// Executes the BIT instruction.
///
/// Z from A & M; N and V are copied straight from bits 7 and 6 of M.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.load_operand(operand);

    cpu.flag_z = (cpu.a & value) == 0;
    cpu.flag_n = (value & 0x80) != 0;
    cpu.flag_v = (value & 0x40) != 0;
}
