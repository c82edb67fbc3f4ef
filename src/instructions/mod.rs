//! # 6502 Instruction Implementations
//!
//! Operation effects, organized by category. The dispatcher resolves the
//! operand once through the instruction's addressing mode and hands it to the
//! effect, so no effect knows which opcode or mode invoked it.
//!
//! ## Categories
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, NOP
//! - **stack**: PHA, PHP, PLA, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::cpu::Register;
use crate::opcodes::{Instruction, Operation};
use crate::{ExecutionError, MemoryBus, CPU};
use flags::Flag;

/// Runs one decoded instruction: stack precondition, operand resolution,
/// then the operation's effect.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let operation = instruction.operation;

    stack::check_stack(cpu, operation)?;

    let operand = cpu.resolve_operand(instruction.mode, operation.access());

    match operation {
        Operation::Lda => load_store::execute_load(cpu, Register::A, operand),
        Operation::Ldx => load_store::execute_load(cpu, Register::X, operand),
        Operation::Ldy => load_store::execute_load(cpu, Register::Y, operand),
        Operation::Sta => load_store::execute_store(cpu, Register::A, operand),
        Operation::Stx => load_store::execute_store(cpu, Register::X, operand),
        Operation::Sty => load_store::execute_store(cpu, Register::Y, operand),

        Operation::Tax => transfer::execute_transfer(cpu, Register::A, Register::X),
        Operation::Tay => transfer::execute_transfer(cpu, Register::A, Register::Y),
        Operation::Txa => transfer::execute_transfer(cpu, Register::X, Register::A),
        Operation::Tya => transfer::execute_transfer(cpu, Register::Y, Register::A),
        Operation::Tsx => transfer::execute_tsx(cpu),
        Operation::Txs => transfer::execute_txs(cpu),

        Operation::Pha => stack::execute_pha(cpu),
        Operation::Php => stack::execute_php(cpu),
        Operation::Pla => stack::execute_pla(cpu),
        Operation::Plp => stack::execute_plp(cpu),

        Operation::Jsr => control::execute_jsr(cpu, operand),
        Operation::Rts => control::execute_rts(cpu),
        Operation::Jmp => control::execute_jmp(cpu, operand),
        Operation::Nop => {}

        Operation::Bcc => branches::execute_branch(cpu, Flag::Carry, false, operand),
        Operation::Bcs => branches::execute_branch(cpu, Flag::Carry, true, operand),
        Operation::Bne => branches::execute_branch(cpu, Flag::Zero, false, operand),
        Operation::Beq => branches::execute_branch(cpu, Flag::Zero, true, operand),
        Operation::Bpl => branches::execute_branch(cpu, Flag::Negative, false, operand),
        Operation::Bmi => branches::execute_branch(cpu, Flag::Negative, true, operand),
        Operation::Bvc => branches::execute_branch(cpu, Flag::Overflow, false, operand),
        Operation::Bvs => branches::execute_branch(cpu, Flag::Overflow, true, operand),

        Operation::Adc => alu::execute_adc(cpu, operand),
        Operation::Sbc => alu::execute_sbc(cpu, operand),
        Operation::And => alu::execute_and(cpu, operand),
        Operation::Ora => alu::execute_ora(cpu, operand),
        Operation::Eor => alu::execute_eor(cpu, operand),
        Operation::Cmp => alu::execute_compare(cpu, Register::A, operand),
        Operation::Cpx => alu::execute_compare(cpu, Register::X, operand),
        Operation::Cpy => alu::execute_compare(cpu, Register::Y, operand),
        Operation::Bit => alu::execute_bit(cpu, operand),

        Operation::Asl => shifts::execute_asl(cpu, operand),
        Operation::Lsr => shifts::execute_lsr(cpu, operand),
        Operation::Rol => shifts::execute_rol(cpu, operand),
        Operation::Ror => shifts::execute_ror(cpu, operand),

        Operation::Inc => inc_dec::execute_inc(cpu, operand),
        Operation::Dec => inc_dec::execute_dec(cpu, operand),
        Operation::Inx => inc_dec::execute_increment(cpu, Register::X),
        Operation::Iny => inc_dec::execute_increment(cpu, Register::Y),
        Operation::Dex => inc_dec::execute_decrement(cpu, Register::X),
        Operation::Dey => inc_dec::execute_decrement(cpu, Register::Y),

        Operation::Clc => flags::execute_flag(cpu, Flag::Carry, false),
        Operation::Sec => flags::execute_flag(cpu, Flag::Carry, true),
        Operation::Cli => flags::execute_flag(cpu, Flag::InterruptDisable, false),
        Operation::Sei => flags::execute_flag(cpu, Flag::InterruptDisable, true),
        Operation::Cld => flags::execute_flag(cpu, Flag::Decimal, false),
        Operation::Sed => flags::execute_flag(cpu, Flag::Decimal, true),
        Operation::Clv => flags::execute_flag(cpu, Flag::Overflow, false),
    }

    Ok(())
}
