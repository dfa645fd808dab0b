// Strip-Treiber für die WS2812 Matrix über das RMT Peripheral
//
// Der Adapter aus esp-hal-smartled überträgt immer einen ganzen Strip. Die
// Render-Logik liefert aber ein Wort pro Pixel, deshalb läuft der Treiber
// hinter esp_core::FrameCollector (siehe `MatrixSink`).

use esp_core::{FrameCollector, FrameWriter, LedError, PIXEL_COUNT};
use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

/// Buffer-Größe für die Matrix (LEDs * 3 Farben * 8 Bits + 1 Reset)
pub const MATRIX_BUFFER_SIZE: usize = PIXEL_COUNT * 24 + 1;

/// RMT-Buffer für die Matrix (erstellt mit `smart_led_buffer!(PIXEL_COUNT)`)
pub type MatrixBuffer = [PulseCode; MATRIX_BUFFER_SIZE];

/// `PixelSink` der Firmware: sammelt 25 Wörter, sendet dann per RMT
pub type MatrixSink<'a> = FrameCollector<RmtMatrixSink<'a>>;

/// Real Hardware Strip Writer
///
/// `write_frame()` blockiert, bis RMT den Frame gesendet hat.
pub struct RmtMatrixSink<'a> {
    led: SmartLedsAdapter<'a, MATRIX_BUFFER_SIZE>,
}

impl<'a> RmtMatrixSink<'a> {
    /// Erstellt einen neuen RmtMatrixSink
    ///
    /// # Parameter
    /// - `data_pin`: GPIO7 Peripheral für die Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten
    pub fn new(
        data_pin: esp_hal::peripherals::GPIO7<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut MatrixBuffer,
    ) -> Self {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .expect("Failed to configure RMT");

        let led = SmartLedsAdapter::new(rmt.channel0, data_pin, buffer);

        Self { led }
    }

    /// Verpackt den Treiber in den wortweisen `PixelSink`
    pub fn into_pixel_sink(self) -> MatrixSink<'a> {
        FrameCollector::new(self)
    }
}

impl FrameWriter for RmtMatrixSink<'_> {
    fn write_frame(&mut self, frame: &[RGB8; PIXEL_COUNT]) -> Result<(), LedError> {
        self.led
            .write(frame.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
