// Taster-Interrupt - fallende Flanken an Taster A/B
//
// Beide Taster teilen sich den GPIO-Interrupt des ESP32-C6. Der Handler läuft
// komplett in einer Critical Section, dadurch sind die beiden Taster
// gegeneinander serialisiert. Der Zähler selbst ist atomar, die
// Render-Schleife liest ihn ohne Lock.
use core::cell::RefCell;

use critical_section::Mutex;
use defmt::{info, trace};
use embassy_time::Instant;
use esp_core::{Button, ButtonEdgeHandler, DigitCounter, EdgeOutcome, InputController};
use esp_hal::gpio::{Event, Input, Io};
use esp_hal::handler;

struct ButtonInputs {
    increment: Input<'static>,
    decrement: Input<'static>,
    controller: InputController<'static>,
}

impl ButtonInputs {
    /// Bearbeitet alle anstehenden Flanken mit demselben Zeitstempel
    fn service(&mut self, now_us: u64) {
        let Self {
            increment,
            decrement,
            controller,
        } = self;

        for (button, input) in [
            (Button::Increment, increment),
            (Button::Decrement, decrement),
        ] {
            if !input.is_interrupt_set() {
                continue;
            }
            input.clear_interrupt();

            match controller.on_falling_edge(button, now_us) {
                EdgeOutcome::Accepted(digit) => info!("Button {}: digit -> {}", button, digit),
                EdgeOutcome::Ignored => trace!("Button {}: bounce ignored at {} us", button, now_us),
            }
        }
    }
}

static BUTTONS: Mutex<RefCell<Option<ButtonInputs>>> = Mutex::new(RefCell::new(None));

/// Richtet die Taster-Interrupts ein
///
/// # Parameter
/// - `io`: GPIO-Treiber, an dem der Interrupt-Handler registriert wird
/// - `increment`/`decrement`: Eingänge für Taster A und B (mit Pull-up konfiguriert)
/// - `counter`: Gemeinsamer Zähler, den die Render-Schleife liest
/// - `debounce_us`: Debounce-Schwelle in Mikrosekunden
pub fn install_button_interrupts(
    io: &mut Io<'_>,
    mut increment: Input<'static>,
    mut decrement: Input<'static>,
    counter: &'static DigitCounter,
    debounce_us: u64,
) {
    io.set_interrupt_handler(on_button_edge);

    critical_section::with(|cs| {
        increment.listen(Event::FallingEdge);
        decrement.listen(Event::FallingEdge);
        BUTTONS.borrow_ref_mut(cs).replace(ButtonInputs {
            increment,
            decrement,
            controller: InputController::new(counter, debounce_us),
        });
    });

    info!("Buttons armed (debounce {} us)", debounce_us);
}

#[handler]
fn on_button_edge() {
    let now_us = Instant::now().as_micros();

    critical_section::with(|cs| {
        if let Some(buttons) = BUTTONS.borrow_ref_mut(cs).as_mut() {
            buttons.service(now_us);
        }
    });
}
