//! Frame-Sammler: Farbwörter → ganzer Strip
//!
//! Die Render-Logik schreibt ein Wort pro `push()`. Strip-Treiber wie
//! `esp-hal-smartled` senden dagegen immer alle LEDs auf einmal. Der
//! `FrameCollector` sitzt dazwischen und übergibt beim 25. Wort den ganzen
//! Frame an einen `FrameWriter`.

use rgb::RGB8;

use crate::color::unpack_grb;
use crate::glyph::PIXEL_COUNT;
use crate::traits::{FrameWriter, LedError, PixelSink};

/// `PixelSink`, der Wörter bis zum vollständigen Frame puffert
pub struct FrameCollector<W: FrameWriter> {
    writer: W,
    frame: [RGB8; PIXEL_COUNT],
    len: usize,
}

impl<W: FrameWriter> FrameCollector<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [RGB8::default(); PIXEL_COUNT],
            len: 0,
        }
    }

    /// Anzahl der Wörter im angefangenen Frame
    pub fn pending(&self) -> usize {
        self.len
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: FrameWriter> PixelSink for FrameCollector<W> {
    fn push(&mut self, word: u32) -> Result<(), LedError> {
        self.frame[self.len] = unpack_grb(word);
        self.len += 1;

        if self.len < PIXEL_COUNT {
            return Ok(());
        }

        // Nächstes Wort beginnt immer einen neuen Frame, auch nach Fehler
        self.len = 0;
        self.writer.write_frame(&self.frame)
    }
}
