// Render-Schleife - läuft im Haupt-Kontrollfluss (main), nicht als Task
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_core::{DigitCounter, PixelSink, RenderLoop};

use crate::config::FRAME_INTERVAL;

/// Rendert endlos die aktuelle Ziffer
///
/// Pro Iteration: Zähler einmal lesen, 25 Pixel schreiben, `FRAME_INTERVAL` ms
/// schlafen. Schreibfehler werden geloggt, der nächste Frame läuft normal.
pub async fn render_loop<S: PixelSink>(mut sink: S, counter: &DigitCounter) -> ! {
    let mut render = RenderLoop::new(counter);

    loop {
        match render.step(&mut sink) {
            Ok(frame) if frame.changed => info!("Showing digit {}", frame.digit),
            Ok(_) => {}
            Err(_e) => error!("Failed to write frame to LED matrix"),
        }

        // Async Delay: Interrupts und Blink-Task laufen weiter
        Timer::after(Duration::from_millis(FRAME_INTERVAL)).await;
    }
}
