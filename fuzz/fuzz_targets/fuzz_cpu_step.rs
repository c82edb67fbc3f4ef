//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents, then
//! executes one instruction and checks its cycle and PC accounting.

#![no_main]

use arbitrary::Arbitrary;
use cycle6502::{decode, CpuConfig, ExecutionError, FlatMemory, MemoryBus, ResetVector, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV-BDIZC byte
    status: u8,
    stack_checks: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset vector points to 0x8000
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, &input.memory.instruction_bytes);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);

    let config = CpuConfig::default()
        .with_reset_vector(ResetVector::Indirect)
        .with_stack_checks(input.cpu_state.stack_checks);
    let mut cpu = CPU::with_config(memory, config);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let opcode = input.memory.instruction_bytes[0];
    match cpu.step() {
        Ok(cycles) => {
            let instruction = decode(opcode).expect("step succeeded on an unknown opcode");
            assert!(cycles >= instruction.base_cycles);
            assert!(cycles <= instruction.base_cycles + 2);
            assert_eq!(cpu.cycles(), cycles as u64);
        }
        Err(ExecutionError::UnknownOpcode(byte)) => {
            assert_eq!(byte, opcode);
            assert_eq!(cpu.cycles(), 1);
            assert_eq!(cpu.pc(), 0x8001);
        }
        Err(_) => {
            // Stack fault: only the opcode fetch happened
            assert!(input.cpu_state.stack_checks);
            assert_eq!(cpu.cycles(), 1);
            assert_eq!(cpu.pc(), 0x8000);
            assert_eq!(cpu.sp(), input.cpu_state.sp);
        }
    }
});
