//! Tests for ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY and BIT.

use cycle6502::{CpuConfig, FlatMemory, MemoryBus, ResetVector, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let config = CpuConfig::default().with_reset_vector(ResetVector::Indirect);
    CPU::with_config(memory, config)
}

/// Runs one immediate-mode instruction against `a` with carry `c`.
fn run_immediate(opcode: u8, a: u8, value: u8, carry: bool) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[opcode, value]);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    assert_eq!(cpu.step(), Ok(2));
    cpu
}

// ========== ADC ==========

#[test]
fn test_adc_signed_overflow() {
    let cpu = run_immediate(0x69, 0x50, 0x50, false);

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_carry_out_and_zero() {
    let cpu = run_immediate(0x69, 0xFF, 0x01, false);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_carry_in() {
    let cpu = run_immediate(0x69, 0x10, 0x20, true);
    assert_eq!(cpu.a(), 0x31);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_ignores_decimal_flag() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x69, 0x01]);
    cpu.set_a(0x09);
    cpu.set_flag_d(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x0A);
}

#[test]
fn test_adc_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x79, 0xFF, 0x20]);
    cpu.memory_mut().write(0x2100, 0x02);
    cpu.set_a(0x01);
    cpu.set_y(0x01);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.a(), 0x03);
}

// ========== SBC ==========

#[test]
fn test_sbc_no_borrow() {
    let cpu = run_immediate(0xE9, 0x05, 0x03, true);
    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_borrow_without_overflow() {
    // 80 - (-16) = 96
    let cpu = run_immediate(0xE9, 0x50, 0xF0, true);
    assert_eq!(cpu.a(), 0x60);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_signed_overflow() {
    // 80 - (-80) = 160 does not fit
    let cpu = run_immediate(0xE9, 0x50, 0xB0, true);
    assert_eq!(cpu.a(), 0xA0);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_clear_carry_subtracts_one_more() {
    let cpu = run_immediate(0xE9, 0x05, 0x03, false);
    assert_eq!(cpu.a(), 0x01);
}

// ========== Logic ==========

#[test]
fn test_and_ora_eor() {
    let cpu = run_immediate(0x29, 0b1100_1100, 0b1010_1010, false);
    assert_eq!(cpu.a(), 0b1000_1000);
    assert!(cpu.flag_n());

    let cpu = run_immediate(0x09, 0b0000_1100, 0b0000_0011, false);
    assert_eq!(cpu.a(), 0b0000_1111);
    assert!(!cpu.flag_n());

    let cpu = run_immediate(0x49, 0x5A, 0x5A, false);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_logic_leaves_carry_and_overflow() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x29, 0x00]);
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
}

// ========== Compare ==========

#[test]
fn test_cmp_equal() {
    let cpu = run_immediate(0xC9, 0x40, 0x40, false);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x40);
}

#[test]
fn test_cmp_less() {
    let cpu = run_immediate(0xC9, 0x40, 0x41, true);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_cpx_cpy() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xE0, 0x10, 0xC0, 0x30]);
    cpu.set_x(0x20);
    cpu.set_y(0x20);

    cpu.step().unwrap();
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());

    cpu.step().unwrap();
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

// ========== BIT ==========

#[test]
fn test_bit_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x24, 0x10]);
    cpu.memory_mut().write(0x0010, 0xC0);
    cpu.set_a(0x01);

    assert_eq!(cpu.step(), Ok(3));
    assert!(cpu.flag_z());
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_bit_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x2C, 0x00, 0x30]);
    cpu.memory_mut().write(0x3000, 0x01);
    cpu.set_a(0x01);
    cpu.set_flag_v(true);

    assert_eq!(cpu.step(), Ok(4));
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}
