//! Gemeinsamer Ziffern-Zähler
//!
//! Einziger geteilter Zustand: geschrieben aus dem GPIO-Interrupt,
//! gelesen von der Render-Schleife. Lesen ist ein einzelner atomarer Load,
//! Schreiben ein atomares Read-Modify-Write.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::types::{Button, Digit};

pub struct DigitCounter {
    value: AtomicU8,
}

impl DigitCounter {
    /// Startet bei 0, `const` damit der Zähler in einem `static` liegen kann
    pub const fn new() -> Self {
        Self {
            value: AtomicU8::new(Digit::ZERO.value()),
        }
    }

    /// Aktuelle Ziffer (ein atomarer Load)
    pub fn get(&self) -> Digit {
        Digit::new(self.value.load(Ordering::Acquire)).unwrap_or(Digit::ZERO)
    }

    /// Wendet einen Tastendruck an und liefert die neue Ziffer
    pub fn apply(&self, button: Button) -> Digit {
        let step = |raw: u8| Digit::new(raw).map(|digit| button.apply(digit).value());
        let previous = self
            .value
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, step)
            .unwrap_or_else(|current| current);
        Digit::new(previous).map_or(Digit::ZERO, |digit| button.apply(digit))
    }

    pub fn increment(&self) -> Digit {
        self.apply(Button::Increment)
    }

    pub fn decrement(&self) -> Digit {
        self.apply(Button::Decrement)
    }
}

impl Default for DigitCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(DigitCounter::new().get(), Digit::ZERO);
    }

    #[test]
    fn test_increment_wraps() {
        let counter = DigitCounter::new();
        for expected in 1..=9 {
            assert_eq!(counter.increment().value(), expected);
        }
        assert_eq!(counter.increment(), Digit::ZERO);
        assert_eq!(counter.get(), Digit::ZERO);
    }

    #[test]
    fn test_decrement_wraps() {
        let counter = DigitCounter::new();
        assert_eq!(counter.decrement().value(), 9);
        assert_eq!(counter.decrement().value(), 8);
        assert_eq!(counter.get().value(), 8);
    }
}
