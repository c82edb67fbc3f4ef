//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The stack lives at 0x0100-0x01FF. SP is an 8-bit offset naming the next
//! free slot: a push writes at 0x0100 | SP then advances SP, a pull retreats
//! SP then reads. Every push or pull moves SP by exactly the number of bytes
//! transferred, wrapping within page 1.

use crate::opcodes::Operation;
use crate::cpu::Register;
use crate::{ExecutionError, MemoryBus, CPU};

/// Bits 4 (B) and 5 are set in every status byte the CPU pushes.
const PUSHED_STATUS_BITS: u8 = 0b00110000;

/// Checks that `operation` can move SP without wrapping.
///
/// Runs before operand resolution so a refused instruction has no effect
/// beyond its opcode fetch. Always passes when stack checks are off.
pub(crate) fn check_stack<M: MemoryBus>(
    cpu: &CPU<M>,
    operation: Operation,
) -> Result<(), ExecutionError> {
    match operation {
        Operation::Pha | Operation::Php => cpu.ensure_stack_room(1),
        Operation::Jsr => cpu.ensure_stack_room(2),
        Operation::Pla | Operation::Plp => cpu.ensure_stack_data(1),
        Operation::Rts => cpu.ensure_stack_data(2),
        _ => Ok(()),
    }
}

/// PHA: 3 cycles. Flags affected: none.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let a = cpu.a;
    cpu.push_byte(a);
}

/// PHP: 3 cycles. Pushes the status byte with B and bit 5 set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.status() | PUSHED_STATUS_BITS;
    cpu.push_byte(status);
}

/// PLA: 4 cycles, one of them spent adjusting SP. Sets Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    let value = cpu.pull_byte();
    cpu.load_register(Register::A, value);
}

/// PLP: 4 cycles. B and bit 5 of the pulled byte are ignored.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    let status = cpu.pull_byte();
    cpu.set_status(status);
}
