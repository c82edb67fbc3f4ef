//! Hand-assembled program: JSR $AA42 -> JSR $AE15 -> LDA #$05.
//!
//! Run with: cargo run --example jsr_chain

use cycle6502::{FlatMemory, MemoryBus, CPU};

fn main() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset();

    let memory = cpu.memory_mut();
    memory.write(0xFFFC, 0x20); // JSR $AA42
    memory.write(0xFFFD, 0x42);
    memory.write(0xFFFE, 0xAA);
    memory.write(0xAA42, 0x20); // JSR $AE15
    memory.write(0xAA43, 0x15);
    memory.write(0xAA44, 0xAE);
    memory.write(0xAE15, 0xA9); // LDA #$05
    memory.write(0xAE16, 0x05);

    match cpu.execute(20) {
        Ok(consumed) => {
            println!("A = {}", cpu.a());
            println!("cycles consumed: {}", consumed);
            println!("PC = 0x{:04X}, SP = 0x{:02X}", cpu.pc(), cpu.sp());
        }
        Err(e) => eprintln!("Execution error: {}", e),
    }
}
