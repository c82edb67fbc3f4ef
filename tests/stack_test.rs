//! Tests for PHA, PHP, PLA, PLP and the optional stack bounds checks.

use cycle6502::{CpuConfig, ExecutionError, FlatMemory, MemoryBus, ResetVector, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    setup_cpu_with(CpuConfig::default())
}

fn setup_cpu_with(config: CpuConfig) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::with_config(memory, config.with_reset_vector(ResetVector::Indirect))
}

fn checked_cpu() -> CPU<FlatMemory> {
    setup_cpu_with(CpuConfig::default().with_stack_checks(true))
}

#[test]
fn test_pha_writes_free_slot_and_advances() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.set_a(0x42);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.memory().read(0x0100), 0x42);
    assert_eq!(cpu.sp(), 0x01);
    assert_eq!(cpu.stack_address(), 0x0101);
}

#[test]
fn test_pla_round_trip_sets_flags() {
    let mut cpu = setup_cpu();

    // LDA #$80, PHA, LDA #$00, PLA
    cpu.memory_mut()
        .load(0x8000, &[0xA9, 0x80, 0x48, 0xA9, 0x00, 0x68]);

    assert_eq!(cpu.execute(11), Ok(11));
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.sp(), 0x00);
}

#[test]
fn test_php_pushes_break_and_bit5() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x08);
    cpu.set_flag_n(true);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.memory().read(0x0100), 0b10110001);
    // The register's own B flag is untouched
    assert!(!cpu.flag_b());
}

#[test]
fn test_plp_ignores_break_and_bit5() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x28);
    cpu.memory_mut().write(0x0100, 0xFF);
    cpu.set_sp(0x01);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.status(), 0b11101111);
    assert_eq!(cpu.sp(), 0x00);
}

#[test]
fn test_unchecked_stack_wraps_within_page_one() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x48, 0x48]);
    cpu.set_a(0x5A);
    cpu.set_sp(0xFF);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x01FF), 0x5A);
    assert_eq!(cpu.sp(), 0x00);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0100), 0x5A);
    assert_eq!(cpu.memory().read(0x0200), 0x00);
}

#[test]
fn test_checked_push_overflow() {
    let mut cpu = checked_cpu();
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.set_a(0x5A);
    cpu.set_sp(0xFF);

    assert_eq!(cpu.step(), Err(ExecutionError::StackOverflow { sp: 0xFF }));

    // Only the opcode fetch happened; PC stays on the faulting opcode
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.cycles(), 1);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.memory().read(0x01FF), 0x00);
}

#[test]
fn test_checked_pull_underflow() {
    let mut cpu = checked_cpu();
    cpu.memory_mut().write(0x8000, 0x68);

    assert_eq!(cpu.execute(10), Err(ExecutionError::StackUnderflow { sp: 0x00 }));
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_checked_jsr_needs_two_free_slots() {
    let mut cpu = checked_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]);
    cpu.set_sp(0xFE);

    assert_eq!(cpu.step(), Err(ExecutionError::StackOverflow { sp: 0xFE }));

    cpu.set_sp(0xFD);
    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_checked_rts_needs_two_bytes() {
    let mut cpu = checked_cpu();
    cpu.memory_mut().write(0x8000, 0x60);
    cpu.set_sp(0x01);

    assert_eq!(cpu.step(), Err(ExecutionError::StackUnderflow { sp: 0x01 }));
}

#[test]
fn test_checked_stack_fault_is_fatal_in_execute() {
    // Skip policy covers unknown opcodes only
    let mut cpu = checked_cpu();
    cpu.memory_mut().load(0x8000, &[0xEA, 0x68, 0xEA]);

    assert!(cpu.execute(50).is_err());
    assert_eq!(cpu.cycles(), 3);
}
