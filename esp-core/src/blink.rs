//! Blink-Logik für die Status-LED
//!
//! Unabhängig vom Zähler. Jeder Timer-Tick dreht den Zustand um und schreibt
//! ihn auf die LED.

use crate::traits::{StatusLed, TimerTickHandler};
use crate::types::TimerAction;

/// Blink-Periode in Millisekunden (5 Umschaltungen pro Sekunde)
pub const BLINK_PERIOD_MS: u64 = 200;

pub struct BlinkController<L: StatusLed> {
    led: L,
    on: bool,
}

impl<L: StatusLed> BlinkController<L> {
    /// LED startet aus, der erste Tick schaltet sie ein
    pub fn new(mut led: L) -> Self {
        led.set(false);
        Self { led, on: false }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn led(&self) -> &L {
        &self.led
    }
}

impl<L: StatusLed> TimerTickHandler for BlinkController<L> {
    fn on_tick(&mut self) -> TimerAction {
        self.on = !self.on;
        self.led.set(self.on);
        TimerAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pin(Option<bool>);

    impl StatusLed for Pin {
        fn set(&mut self, on: bool) {
            self.0 = Some(on);
        }
    }

    #[test]
    fn test_tick_toggles() {
        let mut blink = BlinkController::new(Pin(None));
        assert_eq!(blink.led().0, Some(false));

        assert_eq!(blink.on_tick(), TimerAction::Continue);
        assert!(blink.is_on());
        assert_eq!(blink.led().0, Some(true));

        blink.on_tick();
        assert!(!blink.is_on());
        assert_eq!(blink.led().0, Some(false));
    }
}
