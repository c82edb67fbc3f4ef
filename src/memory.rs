//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! backing store, plus `FlatMemory`, a plain 64KB array.
//!
//! ## Design Principles
//!
//! - No bus errors: the 16-bit address space is exactly the array size, so
//!   every access is in range by construction
//! - Word access is little-endian and wraps from 0xFFFF to 0x0000
//! - The bus itself is timeless; the CPU charges one cycle per byte moved

/// Memory bus trait for CPU to read/write bytes.
///
/// Only `read` and `write` are required. Word access and zero-fill are
/// provided in terms of them and may be overridden for speed.
///
/// # Examples
///
/// ```
/// use cycle6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write_word(0x1234, 0xBEEF);
/// assert_eq!(mem.read(0x1234), 0xEF); // low byte first
/// assert_eq!(mem.read(0x1235), 0xBE);
/// assert_eq!(mem.read_word(0x1234), 0xBEEF);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cycle6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    ///
    /// The second address wraps from 0xFFFF to 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian word as two byte transfers.
    ///
    /// The second address wraps from 0xFFFF to 0x0000.
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Zero-fills the whole address space. Idempotent.
    fn initialize(&mut self) {
        for addr in 0..=0xFFFFu16 {
            self.write(addr, 0x00);
        }
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) map to a single contiguous RAM array
/// initialized to 0x00.
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0xA9); // LDA #$2A at the reset address
/// memory.write(0xFFFD, 0x2A);
///
/// let mut cpu = CPU::new(memory);
/// cpu.step().unwrap();
/// assert_eq!(cpu.a(), 0x2A);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    ///
    /// This is the direct-poke program loader: raw opcode and operand bytes,
    /// no image format.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn initialize(&mut self) {
        self.data.fill(0);
    }
}
