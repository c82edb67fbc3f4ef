//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS all share one effect: test a flag,
//! and if it has the wanted value, add the signed offset to the PC.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use super::flags::Flag;
use crate::addressing::{page_crossed, Operand};
use crate::{MemoryBus, CPU};

/// Branches when `flag` equals `expected`.
///
/// The offset is relative to the address of the next instruction, which is
/// what PC holds once the operand has been fetched. No flags are affected.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    flag: Flag,
    expected: bool,
    operand: Operand,
) {
    let Operand::Relative(offset) = operand else {
        unreachable!("branch without relative operand: {:?}", operand);
    };

    if flag.get(cpu) != expected {
        return;
    }

    cpu.tick();
    let target = cpu.pc.wrapping_add_signed(offset as i16);
    if page_crossed(cpu.pc, target) {
        cpu.tick();
    }
    cpu.pc = target;
}
