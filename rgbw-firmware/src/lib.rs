// Library-Root: Hardware-Anbindung und Tasks
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von rgbw-core
pub use rgbw_core::{
    Channel, ChannelValues, Controller, ControllerConfig, Feedback, SaveOutcome, SelectionSet,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf.
// Die komplette Steuerungs-Logik liegt deshalb in rgbw-core und wird auf
// dem Host über die Traits (ButtonSource, SliderSource, PixelSink,
// StorageMedium) mit Mocks getestet (rgbw-tests).
//
// Hier bleibt nur die dünne Hardware-Schicht: Seesaw-Register, RMT und
// Flash. Diese wird auf der Hardware verifiziert.
