//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for loading raw program bytes,
//! running against a cycle budget, and inspecting registers and memory.

use crate::{CpuConfig, ExecutionError, FlatMemory, MemoryBus, ResetVector, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(error: ExecutionError) -> Self {
        JsError {
            message: error.to_string(),
        }
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Creates a powered-on core with zeroed memory.
    ///
    /// `indirect_reset` selects loading PC from the reset vector instead of
    /// starting at 0xFFFC.
    #[wasm_bindgen(constructor)]
    pub fn new(indirect_reset: bool) -> Self {
        let reset_vector = if indirect_reset {
            ResetVector::Indirect
        } else {
            ResetVector::Fixed
        };
        let config = CpuConfig::default().with_reset_vector(reset_vector);
        let mut cpu = CPU::with_config(FlatMemory::new(), config);
        cpu.reset();
        Emulator6502 { cpu }
    }

    /// Zeroes memory and resets registers.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Resets registers only, re-reading the reset vector if configured.
    pub fn restart(&mut self) {
        self.cpu.restart();
    }

    /// Copies raw program bytes into memory starting at `addr`.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        self.cpu.memory_mut().load(addr, bytes);
    }

    pub fn peek(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    pub fn poke(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Runs for `budget` cycles and returns the cycles consumed.
    pub fn execute(&mut self, budget: u32) -> Result<u32, JsError> {
        let consumed = self.cpu.execute(budget)?;
        Ok(consumed as u32)
    }

    /// Executes one instruction and returns its cycle cost.
    pub fn step(&mut self) -> Result<u8, JsError> {
        Ok(self.cpu.step()?)
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    /// Packed NV-BDIZC status byte.
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Cycles since the last reset, as a JS number.
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64
    }

    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new(false)
    }
}
