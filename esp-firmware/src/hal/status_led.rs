// Status-LED an einem normalen GPIO-Ausgang

use esp_core::StatusLed;
use esp_hal::gpio::Output;

/// Newtype, weil `StatusLed` und `Output` beide aus fremden Crates kommen
pub struct GpioStatusLed<'a>(Output<'a>);

impl<'a> GpioStatusLed<'a> {
    pub fn new(pin: Output<'a>) -> Self {
        Self(pin)
    }
}

impl StatusLed for GpioStatusLed<'_> {
    fn set(&mut self, on: bool) {
        if on {
            self.0.set_high();
        } else {
            self.0.set_low();
        }
    }
}
