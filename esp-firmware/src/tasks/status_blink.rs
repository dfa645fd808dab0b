// Status-Blink Task - schaltet die Status-LED periodisch um
use defmt::{debug, info};
use embassy_time::{Duration, Ticker};
use esp_core::{BlinkController, StatusLed, TimerAction, TimerTickHandler};
use esp_hal::gpio::Output;

use crate::config::STATUS_BLINK_INTERVAL_MS;
use crate::hal::GpioStatusLed;

/// Blink-Logik - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Ruft bei jedem Tick `on_tick()` auf. Der Controller liefert immer
/// `TimerAction::Continue`, die Schleife endet nie.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `L: StatusLed` ermöglicht:
/// - Real Hardware (GpioStatusLed) im Production-Code
/// - Mock Implementation (MockStatusLed) in Tests
pub async fn status_blink_logic<L: StatusLed>(led: L, interval: Duration) -> ! {
    let mut blink = BlinkController::new(led);
    let mut ticker = Ticker::every(interval);

    loop {
        ticker.next().await;
        match blink.on_tick() {
            TimerAction::Continue => debug!("Status LED: {}", blink.is_on()),
        }
    }
}

/// Status-Blink Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `led`: Ausgang der Status-LED
#[embassy_executor::task]
pub async fn status_blink_task(led: Output<'static>) {
    info!("Status LED blinking every {} ms", STATUS_BLINK_INTERVAL_MS);
    status_blink_logic(
        GpioStatusLed::new(led),
        Duration::from_millis(STATUS_BLINK_INTERVAL_MS),
    )
    .await
}
