//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! The `Flag` selector is also what the branch instructions test.

use crate::{MemoryBus, CPU};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flag {
    Carry,
    Zero,
    InterruptDisable,
    Decimal,
    Overflow,
    Negative,
}

impl Flag {
    pub(crate) fn get<M: MemoryBus>(self, cpu: &CPU<M>) -> bool {
        match self {
            Flag::Carry => cpu.flag_c,
            Flag::Zero => cpu.flag_z,
            Flag::InterruptDisable => cpu.flag_i,
            Flag::Decimal => cpu.flag_d,
            Flag::Overflow => cpu.flag_v,
            Flag::Negative => cpu.flag_n,
        }
    }

    fn set<M: MemoryBus>(self, cpu: &mut CPU<M>, value: bool) {
        match self {
            Flag::Carry => cpu.flag_c = value,
            Flag::Zero => cpu.flag_z = value,
            Flag::InterruptDisable => cpu.flag_i = value,
            Flag::Decimal => cpu.flag_d = value,
            Flag::Overflow => cpu.flag_v = value,
            Flag::Negative => cpu.flag_n = value,
        }
    }
}

/// Sets or clears a single status flag. All other flags are unchanged.
pub(crate) fn execute_flag<M: MemoryBus>(cpu: &mut CPU<M>, flag: Flag, value: bool) {
    flag.set(cpu, value);
}
