//! Eingabe-Logik für die beiden Taster
//!
//! Jeder Taster hat einen eigenen Debouncer. Eine fallende Flanke wird nur
//! angenommen, wenn seit dem letzten angenommenen Druck *desselben* Tasters
//! mehr als die Schwelle vergangen ist. Verworfene Flanken gehen verloren.

use crate::counter::DigitCounter;
use crate::traits::ButtonEdgeHandler;
use crate::types::{Button, DebounceState, EdgeOutcome};

/// Mindestabstand zwischen zwei angenommenen Drücken (200 ms in µs)
pub const DEFAULT_DEBOUNCE_US: u64 = 200_000;

/// Debounce-Zustand eines Tasters
#[derive(Debug, Clone, Copy)]
pub struct ButtonDebouncer {
    last_accepted_us: Option<u64>,
    threshold_us: u64,
}

impl ButtonDebouncer {
    pub const fn new(threshold_us: u64) -> Self {
        Self {
            last_accepted_us: None,
            threshold_us,
        }
    }

    /// Prüft die Flanke und merkt sich bei Annahme den Zeitstempel
    pub fn accept(&mut self, now_us: u64) -> bool {
        match self.state(now_us) {
            DebounceState::Idle => {
                self.last_accepted_us = Some(now_us);
                true
            }
            DebounceState::Debounced { .. } => false,
        }
    }

    /// Idle sobald mehr als `threshold_us` seit dem letzten Druck vergangen sind
    pub fn state(&self, now_us: u64) -> DebounceState {
        match self.last_accepted_us {
            Some(since_us) if now_us.saturating_sub(since_us) <= self.threshold_us => {
                DebounceState::Debounced { since_us }
            }
            _ => DebounceState::Idle,
        }
    }

    pub const fn last_accepted_us(&self) -> Option<u64> {
        self.last_accepted_us
    }
}

/// Verarbeitet Tasten-Interrupts und schreibt in den gemeinsamen Zähler
///
/// # Beispiele
///
/// ```
/// # use esp_core::{Button, ButtonEdgeHandler, DigitCounter, EdgeOutcome, InputController};
/// let counter = DigitCounter::new();
/// let mut input = InputController::new(&counter, 200_000);
/// assert!(input.on_falling_edge(Button::Increment, 0).is_accepted());
/// // Prellen 1 ms später wird verworfen
/// assert_eq!(input.on_falling_edge(Button::Increment, 1_000), EdgeOutcome::Ignored);
/// assert_eq!(counter.get().value(), 1);
/// ```
pub struct InputController<'a> {
    counter: &'a DigitCounter,
    increment: ButtonDebouncer,
    decrement: ButtonDebouncer,
}

impl<'a> InputController<'a> {
    pub const fn new(counter: &'a DigitCounter, threshold_us: u64) -> Self {
        Self {
            counter,
            increment: ButtonDebouncer::new(threshold_us),
            decrement: ButtonDebouncer::new(threshold_us),
        }
    }

    pub fn debouncer(&self, button: Button) -> &ButtonDebouncer {
        match button {
            Button::Increment => &self.increment,
            Button::Decrement => &self.decrement,
        }
    }

    fn debouncer_mut(&mut self, button: Button) -> &mut ButtonDebouncer {
        match button {
            Button::Increment => &mut self.increment,
            Button::Decrement => &mut self.decrement,
        }
    }
}

impl ButtonEdgeHandler for InputController<'_> {
    fn on_falling_edge(&mut self, button: Button, now_us: u64) -> EdgeOutcome {
        if self.debouncer_mut(button).accept(now_us) {
            EdgeOutcome::Accepted(self.counter.apply(button))
        } else {
            EdgeOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: u64 = DEFAULT_DEBOUNCE_US;

    #[test]
    fn test_first_edge_accepted() {
        let mut debouncer = ButtonDebouncer::new(T);
        assert_eq!(debouncer.state(0), DebounceState::Idle);
        assert!(debouncer.accept(0));
        assert_eq!(debouncer.last_accepted_us(), Some(0));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut debouncer = ButtonDebouncer::new(T);
        assert!(debouncer.accept(1_000));
        assert!(!debouncer.accept(1_000 + T));
        assert!(debouncer.accept(1_000 + T + 1));
    }

    #[test]
    fn test_rejected_edge_does_not_extend_window() {
        let mut debouncer = ButtonDebouncer::new(T);
        assert!(debouncer.accept(0));
        assert!(!debouncer.accept(150_000));
        assert_eq!(debouncer.last_accepted_us(), Some(0));
        assert!(debouncer.accept(T + 1));
    }

    #[test]
    fn test_state_returns_to_idle() {
        let mut debouncer = ButtonDebouncer::new(T);
        debouncer.accept(10);
        assert_eq!(
            debouncer.state(10 + T),
            DebounceState::Debounced { since_us: 10 }
        );
        assert_eq!(debouncer.state(11 + T), DebounceState::Idle);
    }

    #[test]
    fn test_buttons_debounce_independently() {
        let counter = DigitCounter::new();
        let mut input = InputController::new(&counter, T);
        assert!(input.on_falling_edge(Button::Increment, 0).is_accepted());
        // B hat eigenen Zeitstempel, wird trotz A direkt davor angenommen
        assert!(input.on_falling_edge(Button::Decrement, 10).is_accepted());
        assert_eq!(counter.get().value(), 0);
        assert_eq!(input.debouncer(Button::Increment).last_accepted_us(), Some(0));
        assert_eq!(input.debouncer(Button::Decrement).last_accepted_us(), Some(10));
    }
}
