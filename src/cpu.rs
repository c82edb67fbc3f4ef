//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! Every micro-step charges the cycle counter as it happens: one cycle per
//! byte fetched, read or written, and one per internal operation. The
//! instruction's total cost is whatever its micro-steps add up to.
//!
//! - `step()`: Execute one instruction
//! - `execute()`: Execute until the cycle budget is exhausted
//!
//! The budget is only tested between instructions, so the last instruction
//! always completes and may overrun the budget by up to six cycles.
//!
//! ## Stack
//!
//! SP names the next free slot in page 1. Pushes write at 0x0100 | SP and
//! advance SP; pulls retreat SP and read. After reset SP is 0x00, so the
//! stack fills upward from 0x0100.

use crate::config::{CpuConfig, ResetVector, UnknownOpcodePolicy};
use crate::opcodes::decode;
use crate::{instructions, ExecutionError, MemoryBus};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Address of the reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Where the core is in its fetch-decode-execute cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Constructed or restarted, nothing executed yet.
    Idle,
    /// About to fetch (or fetching) an opcode.
    Fetching,
    /// Opcode fetched, looking it up in the dispatch table.
    Dispatching,
    /// Resolving the operand and applying the operation.
    Executing,
    /// `execute` has returned: budget exhausted or a fatal error.
    Halted,
}

/// General-purpose register selector for operations shared across A, X and Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Register {
    A,
    X,
    Y,
}

/// 6502 CPU state and execution context.
///
/// Owns its memory bus, so independent instances share nothing.
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, MemoryBus, RunState};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset();
///
/// assert_eq!(cpu.pc(), 0xFFFC);
/// assert_eq!(cpu.stack_address(), 0x0100);
/// assert_eq!(cpu.status() & 0b1101_1111, 0);
/// assert_eq!(cpu.state(), RunState::Idle);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives the next free stack slot)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Break flag
    pub(crate) flag_b: bool,

    /// Decimal mode flag (stored only; arithmetic is always binary)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed since the last restart
    pub(crate) cycles: u64,

    pub(crate) state: RunState,

    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU over `memory` with the default configuration.
    ///
    /// Registers are put in the post-reset state; memory is left as given,
    /// so a pre-loaded image survives. Use `reset()` for a full power-on
    /// that also clears memory.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU over `memory` with an explicit configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, CpuConfig, FlatMemory, MemoryBus, ResetVector};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let config = CpuConfig::default().with_reset_vector(ResetVector::Indirect);
    /// let cpu = CPU::with_config(mem, config);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            state: RunState::Idle,
            config,
            memory,
        };
        cpu.restart();
        cpu
    }

    /// Power-on reset: zero-fills memory, then restarts the registers.
    ///
    /// Afterwards PC = 0xFFFC (with `ResetVector::Fixed`), SP = 0x00 (stack
    /// address 0x0100), A = X = Y = 0 and every flag is clear.
    pub fn reset(&mut self) {
        self.memory.initialize();
        self.restart();
    }

    /// Register-only reset, as pulling the RESET line: memory is untouched.
    ///
    /// With `ResetVector::Indirect` the PC is loaded from 0xFFFC/0xFFFD, so
    /// load the program image first and then call this.
    pub fn restart(&mut self) {
        self.pc = match self.config.reset_vector {
            ResetVector::Fixed => RESET_VECTOR,
            ResetVector::Indirect => self.memory.read_word(RESET_VECTOR),
        };
        self.sp = 0x00;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.set_status(0);
        self.flag_b = false;
        self.cycles = 0;
        self.state = RunState::Idle;
        log::debug!("restart: PC=0x{:04X} ({:?} vector)", self.pc, self.config.reset_vector);
    }

    /// Executes one instruction and returns the cycles it consumed.
    ///
    /// Unknown opcodes cost the one fetch cycle, advance PC past the byte and
    /// change nothing else. A stack fault (with stack checks enabled) leaves
    /// PC on the faulting opcode.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus, ExecutionError};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0xA9); // LDA #$80
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0xFFFE, 0x02); // undocumented
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert!(cpu.flag_n());
    /// assert_eq!(cpu.step(), Err(ExecutionError::UnknownOpcode(0x02)));
    /// assert_eq!(cpu.cycles(), 3);
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        let start_pc = self.pc;
        let start_cycles = self.cycles;

        self.state = RunState::Fetching;
        let opcode = self.fetch_byte();

        self.state = RunState::Dispatching;
        let Some(instruction) = decode(opcode) else {
            self.state = RunState::Fetching;
            return Err(ExecutionError::UnknownOpcode(opcode));
        };

        self.state = RunState::Executing;
        log::trace!(
            "{:04X}  {} {:?}",
            start_pc,
            instruction.mnemonic(),
            instruction.mode
        );
        let result = instructions::execute(self, instruction);
        self.state = RunState::Fetching;

        if let Err(e) = result {
            self.pc = start_pc;
            return Err(e);
        }

        Ok((self.cycles - start_cycles) as u8)
    }

    /// Runs instructions until `cycle_budget` cycles have been consumed.
    ///
    /// The budget is checked only between instructions; the instruction that
    /// crosses it runs to completion. Returns the cycles actually consumed,
    /// which is at least the budget and at most budget + 6.
    ///
    /// Unknown opcodes are logged and skipped unless the configuration says
    /// `UnknownOpcodePolicy::Halt`. Stack faults always end the run.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x4C); // JMP $FFFC, 3 cycles per lap
    /// mem.write(0xFFFD, 0xFC);
    /// mem.write(0xFFFE, 0xFF);
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.execute(10).unwrap(), 12); // 4 laps, last one overruns
    /// ```
    pub fn execute(&mut self, cycle_budget: u32) -> Result<u64, ExecutionError> {
        let start = self.cycles;
        let budget = cycle_budget as u64;

        while self.cycles - start < budget {
            match self.step() {
                Ok(_) => {}
                Err(ExecutionError::UnknownOpcode(opcode))
                    if self.config.unknown_opcodes == UnknownOpcodePolicy::Skip =>
                {
                    log::warn!(
                        "Unhandled instruction: 0x{:02X} at 0x{:04X}",
                        opcode,
                        self.pc.wrapping_sub(1)
                    );
                }
                Err(e) => {
                    self.state = RunState::Halted;
                    log::debug!("execute halted: {}", e);
                    return Err(e);
                }
            }
        }

        self.state = RunState::Halted;
        let consumed = self.cycles - start;
        log::debug!("execute: budget={} consumed={}", budget, consumed);
        Ok(consumed)
    }

    // ========== Micro-steps ==========

    /// One internal cycle with no bus traffic the program can observe.
    pub(crate) fn tick(&mut self) {
        self.cycles += 1;
    }

    /// Reads the byte at PC and advances PC. 1 cycle.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        self.tick();
        value
    }

    /// Reads the little-endian word at PC and advances PC by two. 2 cycles.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a byte at a resolved address without touching PC. 1 cycle.
    pub(crate) fn read_byte(&mut self, addr: u16) -> u8 {
        self.tick();
        self.memory.read(addr)
    }

    /// Writes a byte at a resolved address. 1 cycle.
    pub(crate) fn write_byte(&mut self, addr: u16, value: u8) {
        self.tick();
        self.memory.write(addr, value);
    }

    /// Little-endian word read, one cycle per byte.
    pub(crate) fn read_word(&mut self, addr: u16) -> u16 {
        self.cycles += 2;
        self.memory.read_word(addr)
    }

    /// Little-endian word write, one cycle per byte.
    pub(crate) fn write_word(&mut self, addr: u16, value: u16) {
        self.cycles += 2;
        self.memory.write_word(addr, value);
    }

    // ========== Flag rules ==========

    /// Z and N from the value just written to a register or memory.
    pub(crate) fn update_zero_negative(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    /// C and V from an arithmetic result.
    pub(crate) fn update_carry_overflow(&mut self, carry: bool, overflow: bool) {
        self.flag_c = carry;
        self.flag_v = overflow;
    }

    pub(crate) fn register(&self, register: Register) -> u8 {
        match register {
            Register::A => self.a,
            Register::X => self.x,
            Register::Y => self.y,
        }
    }

    /// Writes a register and applies the Z/N rule to it.
    pub(crate) fn load_register(&mut self, register: Register, value: u8) {
        match register {
            Register::A => self.a = value,
            Register::X => self.x = value,
            Register::Y => self.y = value,
        }
        self.update_zero_negative(value);
    }

    // ========== Stack ==========

    /// Fails if pushing `bytes` would carry SP past 0xFF (checks enabled only).
    pub(crate) fn ensure_stack_room(&self, bytes: u8) -> Result<(), ExecutionError> {
        if self.config.stack_checks && self.sp as u16 + bytes as u16 > 0xFF {
            return Err(ExecutionError::StackOverflow { sp: self.sp });
        }
        Ok(())
    }

    /// Fails if pulling `bytes` would borrow SP below 0x00 (checks enabled only).
    pub(crate) fn ensure_stack_data(&self, bytes: u8) -> Result<(), ExecutionError> {
        if self.config.stack_checks && self.sp < bytes {
            return Err(ExecutionError::StackUnderflow { sp: self.sp });
        }
        Ok(())
    }

    /// Writes one byte at the free slot and advances SP. 1 cycle.
    pub(crate) fn push_byte(&mut self, value: u8) {
        let addr = self.stack_address();
        self.write_byte(addr, value);
        self.sp = self.sp.wrapping_add(1);
    }

    /// Retreats SP and reads the byte there. 1 cycle.
    pub(crate) fn pull_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_sub(1);
        let addr = self.stack_address();
        self.read_byte(addr)
    }

    /// Pushes a word, low byte first, advancing SP by two. 2 cycles.
    pub(crate) fn push_word(&mut self, value: u16) {
        if self.sp == 0xFF {
            // High byte wraps to the bottom of page 1
            self.push_byte((value & 0xFF) as u8);
            self.push_byte((value >> 8) as u8);
        } else {
            let addr = self.stack_address();
            self.write_word(addr, value);
            self.sp = self.sp.wrapping_add(2);
        }
    }

    /// Retreats SP by two and reads the word there. 2 cycles.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let hi = self.pull_byte() as u16;
        let lo = self.pull_byte() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the address of the next free stack slot (0x0100 | SP).
    pub fn stack_address(&self) -> u16 {
        STACK_BASE | self.sp as u16
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b00100000;

        if self.flag_n {
            status |= 0b10000000;
        }
        if self.flag_v {
            status |= 0b01000000;
        }
        if self.flag_b {
            status |= 0b00010000;
        }
        if self.flag_d {
            status |= 0b00001000;
        }
        if self.flag_i {
            status |= 0b00000100;
        }
        if self.flag_z {
            status |= 0b00000010;
        }
        if self.flag_c {
            status |= 0b00000001;
        }

        status
    }

    /// Total cycles consumed since the last restart.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to memory, for loading programs between runs.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands back its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Unpacks an NV-BDIZC byte into the flags. Bits 4 and 5 are ignored,
    /// as they are when the chip pulls a status byte off the stack.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & 0b10000000 != 0;
        self.flag_v = value & 0b01000000 != 0;
        self.flag_d = value & 0b00001000 != 0;
        self.flag_i = value & 0b00000100 != 0;
        self.flag_z = value & 0b00000010 != 0;
        self.flag_c = value & 0b00000001 != 0;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }
}
