//! Render-Logik: Ziffer → 25 Farbwörter
//!
//! Ein Frame wird immer vollständig mit einer einzigen Ziffer gerendert.
//! Der Zähler wird pro Frame genau einmal gelesen, eine Änderung während des
//! Frames wird erst im nächsten Frame sichtbar.

use crate::color::encode_color;
use crate::counter::DigitCounter;
use crate::glyph::{PIXEL_COUNT, glyph, mirrored_index};
use crate::traits::{LedError, PixelSink};
use crate::types::Digit;

/// Pause zwischen zwei Frames in Millisekunden
pub const FRAME_INTERVAL_MS: u64 = 50;

/// Farbwort für Pixel `index` (logische Reihenfolge) einer Ziffer
///
/// Der Zellwert 0/1 geht gleich in alle drei Kanäle: weiß auf schwarz.
pub fn pixel_word(digit: Digit, index: usize) -> u32 {
    let cell = f32::from(glyph(digit)[mirrored_index(index)]);
    encode_color(cell, cell, cell)
}

/// Alle Farbwörter eines Frames in Ausgabe-Reihenfolge
pub fn frame_words(digit: Digit) -> [u32; PIXEL_COUNT] {
    core::array::from_fn(|index| pixel_word(digit, index))
}

/// Schiebt einen Frame Pixel für Pixel in die Senke
///
/// Bricht beim ersten fehlgeschlagenen Schreibvorgang ab.
pub fn render_frame<S: PixelSink>(sink: &mut S, digit: Digit) -> Result<(), LedError> {
    for index in 0..PIXEL_COUNT {
        sink.push(pixel_word(digit, index))?;
    }
    Ok(())
}

/// Ergebnis eines gerenderten Frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Die gerenderte Ziffer
    pub digit: Digit,
    /// `true` wenn sich die Ziffer gegenüber dem vorherigen Frame geändert hat
    pub changed: bool,
}

/// Eine Iteration der Render-Schleife pro `step()`
///
/// Das Warten zwischen den Frames (`FRAME_INTERVAL_MS`) übernimmt der
/// Aufrufer, damit Tests ohne echten Timer laufen.
pub struct RenderLoop<'a> {
    counter: &'a DigitCounter,
    last_rendered: Option<Digit>,
}

impl<'a> RenderLoop<'a> {
    pub const fn new(counter: &'a DigitCounter) -> Self {
        Self {
            counter,
            last_rendered: None,
        }
    }

    /// Liest den Zähler einmal und rendert genau einen Frame
    ///
    /// `Frame::changed` wird aus demselben Lesezugriff bestimmt wie die
    /// gerenderte Ziffer. Ein fehlgeschlagener Frame zählt nicht als gerendert.
    pub fn step<S: PixelSink>(&mut self, sink: &mut S) -> Result<Frame, LedError> {
        let digit = self.counter.get();
        render_frame(sink, digit)?;
        let changed = self.last_rendered.replace(digit) != Some(digit);
        Ok(Frame { digit, changed })
    }

    /// Ziffer des letzten vollständigen Frames
    pub fn last_rendered(&self) -> Option<Digit> {
        self.last_rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: u32 = 0x6666_6600;

    struct Collect {
        words: [u32; PIXEL_COUNT],
        len: usize,
    }

    impl PixelSink for Collect {
        fn push(&mut self, word: u32) -> Result<(), LedError> {
            let slot = self.words.get_mut(self.len).ok_or(LedError::WriteFailed)?;
            *slot = word;
            self.len += 1;
            Ok(())
        }
    }

    #[test]
    fn test_frame_words_are_mirrored() {
        let words = frame_words(Digit::new(1).unwrap());
        // Zeile 3 von "1" ist 0,0,1,1,0 → physikalisch 0,1,1,0,0
        assert_eq!(&words[15..20], &[0, WHITE, WHITE, 0, 0]);
    }

    #[test]
    fn test_render_frame_emits_25_words() {
        let mut sink = Collect {
            words: [u32::MAX; PIXEL_COUNT],
            len: 0,
        };
        render_frame(&mut sink, Digit::ZERO).unwrap();
        assert_eq!(sink.len, PIXEL_COUNT);
        assert_eq!(sink.words, frame_words(Digit::ZERO));
    }

    fn collect() -> Collect {
        Collect {
            words: [0; PIXEL_COUNT],
            len: 0,
        }
    }

    #[test]
    fn test_step_samples_counter() {
        let counter = DigitCounter::new();
        let mut render = RenderLoop::new(&counter);
        assert_eq!(render.last_rendered(), None);

        counter.increment();
        let frame = render.step(&mut collect()).unwrap();
        assert_eq!(frame.digit.value(), 1);
        assert!(frame.changed);
        assert_eq!(render.last_rendered().map(Digit::value), Some(1));

        let frame = render.step(&mut collect()).unwrap();
        assert_eq!(frame.digit.value(), 1);
        assert!(!frame.changed);
    }

    #[test]
    fn test_change_between_frames_reported_once() {
        let counter = DigitCounter::new();
        let mut render = RenderLoop::new(&counter);
        assert!(render.step(&mut collect()).unwrap().changed);

        // Tastendruck zwischen zwei Frames
        counter.increment();
        let frame = render.step(&mut collect()).unwrap();
        assert_eq!(frame.digit.value(), 1);
        assert!(frame.changed);

        assert!(!render.step(&mut collect()).unwrap().changed);
    }

    #[test]
    fn test_failed_frame_keeps_change_pending() {
        let counter = DigitCounter::new();
        let mut render = RenderLoop::new(&counter);
        render.step(&mut collect()).unwrap();

        counter.increment();
        let mut full = Collect {
            words: [0; PIXEL_COUNT],
            len: PIXEL_COUNT,
        };
        assert_eq!(render.step(&mut full), Err(LedError::WriteFailed));
        assert_eq!(render.last_rendered(), Some(Digit::ZERO));

        let frame = render.step(&mut collect()).unwrap();
        assert_eq!(frame.digit.value(), 1);
        assert!(frame.changed);
    }
}
