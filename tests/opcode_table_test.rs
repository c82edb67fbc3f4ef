//! Dispatch table tests.
//!
//! Runs every table entry once and checks that the cycles charged by its
//! micro-steps add up to the documented base cost, and that PC advances by
//! the instruction's size for everything that does not redirect control.

use cycle6502::{
    decode, AddressingMode, CpuConfig, FlatMemory, MemoryBus, Operation, ResetVector,
    DISPATCH_TABLE, CPU,
};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let config = CpuConfig::default().with_reset_vector(ResetVector::Indirect);
    CPU::with_config(memory, config)
}

fn redirects_control(operation: Operation) -> bool {
    matches!(operation, Operation::Jmp | Operation::Jsr | Operation::Rts)
}

#[test]
fn test_table_size() {
    let implemented = DISPATCH_TABLE.iter().filter(|entry| entry.is_some()).count();
    assert_eq!(implemented, 149);
}

#[test]
fn test_micro_steps_sum_to_base_cycles() {
    for (opcode, entry) in DISPATCH_TABLE.iter().enumerate() {
        let Some(instruction) = entry else { continue };

        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, opcode as u8);

        // Zeroed operands, registers and pointers never cross a page.
        // Branches are forced to fall through.
        if instruction.mode == AddressingMode::Relative {
            let taken_if_clear = matches!(
                instruction.operation,
                Operation::Bcc | Operation::Bne | Operation::Bpl | Operation::Bvc
            );
            cpu.set_status(if taken_if_clear { 0xFF } else { 0x00 });
        }

        let cycles = cpu.step().unwrap_or_else(|e| {
            panic!("opcode 0x{:02X} failed: {}", opcode, e);
        });

        assert_eq!(
            cycles, instruction.base_cycles,
            "opcode 0x{:02X} ({} {:?})",
            opcode,
            instruction.mnemonic(),
            instruction.mode
        );

        if !redirects_control(instruction.operation) {
            assert_eq!(
                cpu.pc(),
                0x8000 + instruction.size_bytes() as u16,
                "opcode 0x{:02X} ({}) advanced PC wrongly",
                opcode,
                instruction.mnemonic()
            );
        }
    }
}

#[test]
fn test_shared_mode_shares_size() {
    for entry in DISPATCH_TABLE.iter().flatten() {
        assert_eq!(entry.size_bytes(), 1 + entry.mode.operand_bytes());
    }

    // Same mode, different operations
    let lda = decode(0xBD).unwrap();
    let cmp = decode(0xDD).unwrap();
    assert_eq!(lda.mode, cmp.mode);
    assert_eq!(lda.size_bytes(), cmp.size_bytes());
    assert_eq!(lda.base_cycles, cmp.base_cycles);
}

#[test]
fn test_mnemonics() {
    assert_eq!(decode(0x20).unwrap().mnemonic(), "JSR");
    assert_eq!(decode(0xA5).unwrap().mnemonic(), "LDA");
    assert_eq!(decode(0x45).unwrap().mnemonic(), "EOR");
}
