//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::glyph::PIXEL_COUNT;
use crate::types::{Button, EdgeOutcome, TimerAction};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für die Datenleitung der LED-Matrix (WS2812)
///
/// Nimmt genau ein gepacktes Farbwort pro Aufruf entgegen, streng
/// sequentiell. Der Aufruf blockiert, bis die Hardware das Wort übernommen hat.
///
/// # Implementierungen
/// - **Production:** `FrameCollector<RmtMatrixSink>` (ESP32 RMT Peripheral)
/// - **Testing:** MockPixelSink (in-memory Mock)
pub trait PixelSink {
    /// Schreibt das nächste Farbwort
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn push(&mut self, word: u32) -> Result<(), LedError>;
}

/// Trait für Strip-Treiber, die einen ganzen Frame pro Aufruf senden
///
/// # Implementierungen
/// - **Production:** RmtMatrixSink (über `FrameCollector`)
pub trait FrameWriter {
    fn write_frame(&mut self, frame: &[RGB8; PIXEL_COUNT]) -> Result<(), LedError>;
}

/// Trait für die Status-LED (einfacher GPIO-Ausgang)
pub trait StatusLed {
    fn set(&mut self, on: bool);
}

/// Interrupt-Callback für fallende Flanken an den Tastern
pub trait ButtonEdgeHandler {
    /// `now_us` ist ein monotoner Zeitstempel in Mikrosekunden
    fn on_falling_edge(&mut self, button: Button, now_us: u64) -> EdgeOutcome;
}

/// Callback eines periodischen Timers
pub trait TimerTickHandler {
    fn on_tick(&mut self) -> TimerAction;
}
