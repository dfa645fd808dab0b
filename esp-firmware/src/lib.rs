// Library-Root: Hardware-Anbindung und Tasks der Ziffern-Matrix
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{Button, Digit, DigitCounter, LedError, PixelSink, StatusLed};

/// Die aktuell angezeigte Ziffer
///
/// Einziger geteilter Zustand der Firmware: der GPIO-Interrupt schreibt,
/// die Render-Schleife in main() liest.
pub static DIGIT: DigitCounter = DigitCounter::new();
