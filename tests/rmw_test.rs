//! Tests for the read-modify-write group: ASL, LSR, ROL, ROR, INC, DEC,
//! plus the register increments INX, INY, DEX, DEY.

use cycle6502::{CpuConfig, FlatMemory, MemoryBus, ResetVector, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let config = CpuConfig::default().with_reset_vector(ResetVector::Indirect);
    CPU::with_config(memory, config)
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x0A);
    cpu.set_a(0x81);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_lsr_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x46, 0x20]);
    cpu.memory_mut().write(0x0020, 0x01);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.memory().read(0x0020), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_rol_accumulator_carry_in() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x2A);
    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_ror_absolute_x_always_pays_index_cycle() {
    let mut cpu = setup_cpu();

    // ROR $3000,X with X=1, no page cross
    cpu.memory_mut().load(0x8000, &[0x7E, 0x00, 0x30]);
    cpu.memory_mut().write(0x3001, 0x02);
    cpu.set_x(0x01);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.memory().read(0x3001), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_asl_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x0E, 0x00, 0x30]);
    cpu.memory_mut().write(0x3000, 0x40);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.memory().read(0x3000), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_inc_zero_page_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xE6, 0x10]);
    cpu.memory_mut().write(0x0010, 0xFF);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_dec_absolute_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xCE, 0x00, 0x30]);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.memory().read(0x3000), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_inc_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xF6, 0xF0]);
    cpu.memory_mut().write(0x0000, 0x41);
    cpu.set_x(0x10);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.memory().read(0x0000), 0x42);
}

#[test]
fn test_register_increments() {
    let mut cpu = setup_cpu();

    // INX, INY, DEX, DEY
    cpu.memory_mut().load(0x8000, &[0xE8, 0xC8, 0xCA, 0x88]);
    cpu.set_x(0xFF);
    cpu.set_y(0x7F);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x7F);
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}
