//! WebAssembly bindings for the cycle-counted 6502 core.
//!
//! Compiled only with the `wasm` feature.

pub mod api;

pub use api::Emulator6502;
