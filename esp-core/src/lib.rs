//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits und Pure Functions für die Ziffern-Matrix:
//! Farbkodierung, Glyph-Tabelle, Taster-Debounce, Blinken und Rendern.

#![no_std]

pub mod blink;
pub mod color;
pub mod counter;
pub mod frame;
pub mod glyph;
pub mod input;
pub mod render;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use blink::{BLINK_PERIOD_MS, BlinkController};
pub use color::{BRIGHTNESS, encode_color, pack_grb, unpack_grb};
pub use counter::DigitCounter;
pub use frame::FrameCollector;
pub use glyph::{GLYPHS, Glyph, MATRIX_WIDTH, PIXEL_COUNT, glyph, mirrored, mirrored_index};
pub use input::{ButtonDebouncer, DEFAULT_DEBOUNCE_US, InputController};
pub use render::{FRAME_INTERVAL_MS, Frame, RenderLoop, frame_words, render_frame};
pub use traits::{
    ButtonEdgeHandler, FrameWriter, LedError, PixelSink, StatusLed, TimerTickHandler,
};
pub use types::{Button, DebounceState, Digit, EdgeOutcome, InvalidDigit, TimerAction};
