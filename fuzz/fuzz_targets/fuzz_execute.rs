//! Fuzz target for budgeted execution.
//!
//! Runs an arbitrary program image under an arbitrary cycle budget and checks
//! that the loop never stops short of the budget or overruns it by more than
//! one instruction.

#![no_main]

use arbitrary::Arbitrary;
use cycle6502::{FlatMemory, CPU};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    program: Vec<u8>,
    budget: u16,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFC, &input.program);

    let mut cpu = CPU::new(memory);
    let budget = input.budget as u32;

    // Default policy skips unknown opcodes and wraps the stack, so the run
    // cannot fail
    let consumed = cpu.execute(budget).expect("lenient run failed");

    assert!(consumed >= budget as u64);
    assert!(consumed <= budget as u64 + 6);
    assert_eq!(consumed, cpu.cycles());
});
