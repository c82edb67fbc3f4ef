//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolvers
//! that turn a mode into an operand. Resolvers are keyed only by mode, never by
//! opcode, so every instruction sharing a mode shares its fetch pattern and
//! cycle cost.
//!
//! ## Cycle Charges
//!
//! | Mode | Charges beyond the opcode fetch |
//! |------|---------------------------------|
//! | Implicit, Accumulator | 1 internal cycle |
//! | Immediate, Relative, ZeroPage | 1 operand fetch |
//! | ZeroPageX/Y | 1 fetch + 1 index addition |
//! | Absolute | 2 fetches |
//! | AbsoluteX/Y | 2 fetches + 1 on page cross (always for writes) |
//! | Indirect | 2 fetches + 2 pointer reads |
//! | IndirectX | 1 fetch + 1 index addition + 2 pointer reads |
//! | IndirectY | 1 fetch + 2 pointer reads + 1 on page cross (always for writes) |
//!
//! The read or write of the effective address itself is charged by the
//! instruction when it touches the operand.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within page 0.
    ///
    /// Example: LDA $80,X with X=0xFF reads 0x007F, never 0x017F
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within page 0.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// If the pointer's low byte is 0xFF, the high byte is fetched from the
    /// start of the same page: JMP ($10FF) reads $10FF and $1000.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// A resolved operand, ready for an instruction to consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    Implied,
    Accumulator,
    Immediate(u8),
    Relative(i8),
    Address(u16),
}

/// How an instruction will use its effective address.
///
/// Indexed modes only pay the page-cross cycle on reads; writes and
/// read-modify-write always pay it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Read,
    Write,
}

/// True when `a` and `b` lie in different 256-byte pages.
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the operand for `mode`, consuming operand bytes from the
    /// instruction stream and charging the mode's cycles.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode, access: Access) -> Operand {
        match mode {
            AddressingMode::Implicit => {
                // Dummy read of the following byte
                self.tick();
                Operand::Implied
            }
            AddressingMode::Accumulator => {
                self.tick();
                Operand::Accumulator
            }
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte()),
            AddressingMode::Relative => Operand::Relative(self.fetch_byte() as i8),
            AddressingMode::ZeroPage => Operand::Address(self.fetch_byte() as u16),
            AddressingMode::ZeroPageX => {
                let x = self.x;
                Operand::Address(self.zero_page_indexed(x))
            }
            AddressingMode::ZeroPageY => {
                let y = self.y;
                Operand::Address(self.zero_page_indexed(y))
            }
            AddressingMode::Absolute => Operand::Address(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                let x = self.x;
                Operand::Address(self.indexed(base, x, access))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                let y = self.y;
                Operand::Address(self.indexed(base, y, access))
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word();
                let lo = self.read_byte(pointer) as u16;
                // High byte never leaves the pointer's page
                let hi_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let hi = self.read_byte(hi_addr) as u16;
                Operand::Address((hi << 8) | lo)
            }
            AddressingMode::IndirectX => {
                let x = self.x;
                let pointer = self.zero_page_indexed(x) as u8;
                Operand::Address(self.read_zero_page_word(pointer))
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch_byte();
                let base = self.read_zero_page_word(pointer);
                let y = self.y;
                Operand::Address(self.indexed(base, y, access))
            }
        }
    }

    /// Reads the operand value, charging one cycle if it lives in memory.
    pub(crate) fn load_operand(&mut self, operand: Operand) -> u8 {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Address(addr) => self.read_byte(addr),
            Operand::Accumulator => self.a,
            Operand::Implied | Operand::Relative(_) => {
                unreachable!("operand {:?} carries no value", operand)
            }
        }
    }

    /// Writes `value` to the operand's effective address, charging one cycle.
    pub(crate) fn store_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Address(addr) => self.write_byte(addr, value),
            Operand::Accumulator => self.a = value,
            _ => unreachable!("operand {:?} is not writable", operand),
        }
    }

    /// Read-modify-write on the accumulator or a memory cell.
    ///
    /// Memory targets cost read + internal modify cycle + write. Returns the
    /// value written back.
    pub(crate) fn modify_operand<F>(&mut self, operand: Operand, f: F) -> u8
    where
        F: FnOnce(&mut Self, u8) -> u8,
    {
        match operand {
            Operand::Accumulator => {
                let a = self.a;
                let result = f(self, a);
                self.a = result;
                result
            }
            Operand::Address(addr) => {
                let value = self.read_byte(addr);
                self.tick();
                let result = f(self, value);
                self.write_byte(addr, result);
                result
            }
            _ => unreachable!("operand {:?} cannot be modified", operand),
        }
    }

    /// Fetches a zero-page base and adds `index`, discarding the carry.
    fn zero_page_indexed(&mut self, index: u8) -> u16 {
        let base = self.fetch_byte();
        self.tick();
        base.wrapping_add(index) as u16
    }

    /// Adds `index` to a 16-bit base, charging the fix-up cycle when the
    /// high byte changes or when the access is a write.
    fn indexed(&mut self, base: u16, index: u8, access: Access) -> u16 {
        let addr = base.wrapping_add(index as u16);
        if access == Access::Write || page_crossed(base, addr) {
            self.tick();
        }
        addr
    }

    /// Reads a pointer from zero page; the high byte wraps to 0x00 after 0xFF.
    fn read_zero_page_word(&mut self, pointer: u8) -> u16 {
        let lo = self.read_byte(pointer as u16) as u16;
        let hi = self.read_byte(pointer.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
        assert_eq!(AddressingMode::Immediate.operand_bytes(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    }

    #[test]
    fn test_page_crossed() {
        assert!(!page_crossed(0x12FE, 0x12FF));
        assert!(page_crossed(0x12FF, 0x1300));
        assert!(page_crossed(0xFFFF, 0x0000));
    }
}
