//! # Opcode Dispatch Table
//!
//! A 256-entry table mapping each opcode byte to an `Instruction`: the
//! operation to perform and the addressing mode that resolves its operand.
//! Adding an opcode is one more row in `ENTRIES`; the resolvers and operation
//! effects are shared by every row that names them.
//!
//! The table covers the documented NMOS instruction set except BRK and RTI.
//! Those two, and the undocumented opcodes, have no entry and decode to
//! `None`.

use crate::addressing::{Access, AddressingMode};

/// The effect half of an instruction, independent of addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Operation {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
        }
    }

    /// Stores and read-modify-write operations always pay the indexed
    /// fix-up cycle; everything else only pays it on a page cross.
    pub(crate) const fn access(self) -> Access {
        match self {
            Operation::Sta
            | Operation::Stx
            | Operation::Sty
            | Operation::Asl
            | Operation::Lsr
            | Operation::Rol
            | Operation::Ror
            | Operation::Inc
            | Operation::Dec => Access::Write,
            _ => Access::Read,
        }
    }
}

/// One dispatch-table entry.
///
/// # Examples
///
/// ```
/// use cycle6502::{decode, AddressingMode, Operation};
///
/// let lda_imm = decode(0xA9).unwrap();
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
///
/// assert!(decode(0x02).is_none()); // undocumented
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// What the instruction does.
    pub operation: Operation,

    /// How its operand is located.
    pub mode: AddressingMode,

    /// Documented cycle cost without page-cross or branch-taken penalties.
    ///
    /// Informational: the execute loop charges cycles per micro-step, and
    /// the micro-steps are expected to add up to this figure.
    pub base_cycles: u8,
}

impl Instruction {
    pub const fn mnemonic(&self) -> &'static str {
        self.operation.mnemonic()
    }

    /// Opcode plus operand bytes.
    pub const fn size_bytes(&self) -> u8 {
        1 + self.mode.operand_bytes()
    }
}

const fn ins(operation: Operation, mode: AddressingMode, base_cycles: u8) -> Instruction {
    Instruction {
        operation,
        mode,
        base_cycles,
    }
}

use AddressingMode::{
    Absolute as Abs, AbsoluteX as AbsX, AbsoluteY as AbsY, Accumulator as Acc, Immediate as Imm,
    Implicit as Imp, Indirect as Ind, IndirectX as IndX, IndirectY as IndY, Relative as Rel,
    ZeroPage as Zp, ZeroPageX as ZpX, ZeroPageY as ZpY,
};
use Operation::*;

#[rustfmt::skip]
const ENTRIES: [(u8, Instruction); 149] = [
    // Load / store
    (0xA9, ins(Lda, Imm, 2)), (0xA5, ins(Lda, Zp, 3)), (0xB5, ins(Lda, ZpX, 4)), (0xAD, ins(Lda, Abs, 4)),
    (0xBD, ins(Lda, AbsX, 4)), (0xB9, ins(Lda, AbsY, 4)), (0xA1, ins(Lda, IndX, 6)), (0xB1, ins(Lda, IndY, 5)),
    (0xA2, ins(Ldx, Imm, 2)), (0xA6, ins(Ldx, Zp, 3)), (0xB6, ins(Ldx, ZpY, 4)), (0xAE, ins(Ldx, Abs, 4)),
    (0xBE, ins(Ldx, AbsY, 4)),
    (0xA0, ins(Ldy, Imm, 2)), (0xA4, ins(Ldy, Zp, 3)), (0xB4, ins(Ldy, ZpX, 4)), (0xAC, ins(Ldy, Abs, 4)),
    (0xBC, ins(Ldy, AbsX, 4)),
    (0x85, ins(Sta, Zp, 3)), (0x95, ins(Sta, ZpX, 4)), (0x8D, ins(Sta, Abs, 4)), (0x9D, ins(Sta, AbsX, 5)),
    (0x99, ins(Sta, AbsY, 5)), (0x81, ins(Sta, IndX, 6)), (0x91, ins(Sta, IndY, 6)),
    (0x86, ins(Stx, Zp, 3)), (0x96, ins(Stx, ZpY, 4)), (0x8E, ins(Stx, Abs, 4)),
    (0x84, ins(Sty, Zp, 3)), (0x94, ins(Sty, ZpX, 4)), (0x8C, ins(Sty, Abs, 4)),

    // Register transfers
    (0xAA, ins(Tax, Imp, 2)), (0xA8, ins(Tay, Imp, 2)), (0x8A, ins(Txa, Imp, 2)), (0x98, ins(Tya, Imp, 2)),
    (0xBA, ins(Tsx, Imp, 2)), (0x9A, ins(Txs, Imp, 2)),

    // Stack
    (0x48, ins(Pha, Imp, 3)), (0x08, ins(Php, Imp, 3)), (0x68, ins(Pla, Imp, 4)), (0x28, ins(Plp, Imp, 4)),

    // Control flow
    (0x20, ins(Jsr, Abs, 6)), (0x60, ins(Rts, Imp, 6)), (0x4C, ins(Jmp, Abs, 3)), (0x6C, ins(Jmp, Ind, 5)),
    (0xEA, ins(Nop, Imp, 2)),

    // Branches
    (0x90, ins(Bcc, Rel, 2)), (0xB0, ins(Bcs, Rel, 2)), (0xF0, ins(Beq, Rel, 2)), (0xD0, ins(Bne, Rel, 2)),
    (0x30, ins(Bmi, Rel, 2)), (0x10, ins(Bpl, Rel, 2)), (0x50, ins(Bvc, Rel, 2)), (0x70, ins(Bvs, Rel, 2)),

    // Arithmetic and logic
    (0x69, ins(Adc, Imm, 2)), (0x65, ins(Adc, Zp, 3)), (0x75, ins(Adc, ZpX, 4)), (0x6D, ins(Adc, Abs, 4)),
    (0x7D, ins(Adc, AbsX, 4)), (0x79, ins(Adc, AbsY, 4)), (0x61, ins(Adc, IndX, 6)), (0x71, ins(Adc, IndY, 5)),
    (0xE9, ins(Sbc, Imm, 2)), (0xE5, ins(Sbc, Zp, 3)), (0xF5, ins(Sbc, ZpX, 4)), (0xED, ins(Sbc, Abs, 4)),
    (0xFD, ins(Sbc, AbsX, 4)), (0xF9, ins(Sbc, AbsY, 4)), (0xE1, ins(Sbc, IndX, 6)), (0xF1, ins(Sbc, IndY, 5)),
    (0x29, ins(And, Imm, 2)), (0x25, ins(And, Zp, 3)), (0x35, ins(And, ZpX, 4)), (0x2D, ins(And, Abs, 4)),
    (0x3D, ins(And, AbsX, 4)), (0x39, ins(And, AbsY, 4)), (0x21, ins(And, IndX, 6)), (0x31, ins(And, IndY, 5)),
    (0x09, ins(Ora, Imm, 2)), (0x05, ins(Ora, Zp, 3)), (0x15, ins(Ora, ZpX, 4)), (0x0D, ins(Ora, Abs, 4)),
    (0x1D, ins(Ora, AbsX, 4)), (0x19, ins(Ora, AbsY, 4)), (0x01, ins(Ora, IndX, 6)), (0x11, ins(Ora, IndY, 5)),
    (0x49, ins(Eor, Imm, 2)), (0x45, ins(Eor, Zp, 3)), (0x55, ins(Eor, ZpX, 4)), (0x4D, ins(Eor, Abs, 4)),
    (0x5D, ins(Eor, AbsX, 4)), (0x59, ins(Eor, AbsY, 4)), (0x41, ins(Eor, IndX, 6)), (0x51, ins(Eor, IndY, 5)),
    (0xC9, ins(Cmp, Imm, 2)), (0xC5, ins(Cmp, Zp, 3)), (0xD5, ins(Cmp, ZpX, 4)), (0xCD, ins(Cmp, Abs, 4)),
    (0xDD, ins(Cmp, AbsX, 4)), (0xD9, ins(Cmp, AbsY, 4)), (0xC1, ins(Cmp, IndX, 6)), (0xD1, ins(Cmp, IndY, 5)),
    (0xE0, ins(Cpx, Imm, 2)), (0xE4, ins(Cpx, Zp, 3)), (0xEC, ins(Cpx, Abs, 4)),
    (0xC0, ins(Cpy, Imm, 2)), (0xC4, ins(Cpy, Zp, 3)), (0xCC, ins(Cpy, Abs, 4)),
    (0x24, ins(Bit, Zp, 3)), (0x2C, ins(Bit, Abs, 4)),

    // Shifts and rotates
    (0x0A, ins(Asl, Acc, 2)), (0x06, ins(Asl, Zp, 5)), (0x16, ins(Asl, ZpX, 6)), (0x0E, ins(Asl, Abs, 6)),
    (0x1E, ins(Asl, AbsX, 7)),
    (0x4A, ins(Lsr, Acc, 2)), (0x46, ins(Lsr, Zp, 5)), (0x56, ins(Lsr, ZpX, 6)), (0x4E, ins(Lsr, Abs, 6)),
    (0x5E, ins(Lsr, AbsX, 7)),
    (0x2A, ins(Rol, Acc, 2)), (0x26, ins(Rol, Zp, 5)), (0x36, ins(Rol, ZpX, 6)), (0x2E, ins(Rol, Abs, 6)),
    (0x3E, ins(Rol, AbsX, 7)),
    (0x6A, ins(Ror, Acc, 2)), (0x66, ins(Ror, Zp, 5)), (0x76, ins(Ror, ZpX, 6)), (0x6E, ins(Ror, Abs, 6)),
    (0x7E, ins(Ror, AbsX, 7)),

    // Increment / decrement
    (0xE6, ins(Inc, Zp, 5)), (0xF6, ins(Inc, ZpX, 6)), (0xEE, ins(Inc, Abs, 6)), (0xFE, ins(Inc, AbsX, 7)),
    (0xC6, ins(Dec, Zp, 5)), (0xD6, ins(Dec, ZpX, 6)), (0xCE, ins(Dec, Abs, 6)), (0xDE, ins(Dec, AbsX, 7)),
    (0xE8, ins(Inx, Imp, 2)), (0xC8, ins(Iny, Imp, 2)), (0xCA, ins(Dex, Imp, 2)), (0x88, ins(Dey, Imp, 2)),

    // Status flags
    (0x18, ins(Clc, Imp, 2)), (0x38, ins(Sec, Imp, 2)), (0x58, ins(Cli, Imp, 2)), (0x78, ins(Sei, Imp, 2)),
    (0xD8, ins(Cld, Imp, 2)), (0xF8, ins(Sed, Imp, 2)), (0xB8, ins(Clv, Imp, 2)),
];

const fn build_table() -> [Option<Instruction>; 256] {
    let mut table: [Option<Instruction>; 256] = [None; 256];
    let mut i = 0;
    while i < ENTRIES.len() {
        let (opcode, instruction) = ENTRIES[i];
        table[opcode as usize] = Some(instruction);
        i += 1;
    }
    table
}

/// Complete 256-entry dispatch table indexed by opcode byte value.
///
/// `None` marks an opcode with no implementation; the CPU reports it as
/// `ExecutionError::UnknownOpcode`.
pub static DISPATCH_TABLE: [Option<Instruction>; 256] = build_table();

/// Looks up the instruction for an opcode byte.
pub fn decode(opcode: u8) -> Option<&'static Instruction> {
    DISPATCH_TABLE[opcode as usize].as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_entries() {
        let populated = DISPATCH_TABLE.iter().filter(|e| e.is_some()).count();
        assert_eq!(populated, ENTRIES.len());
    }

    #[test]
    fn test_interrupt_opcodes_absent() {
        assert!(decode(0x00).is_none()); // BRK
        assert!(decode(0x40).is_none()); // RTI
    }

    #[test]
    fn test_stores_and_rmw_always_index() {
        assert_eq!(Operation::Sta.access(), Access::Write);
        assert_eq!(Operation::Inc.access(), Access::Write);
        assert_eq!(Operation::Lda.access(), Access::Read);
        assert_eq!(Operation::Cmp.access(), Access::Read);
    }
}
