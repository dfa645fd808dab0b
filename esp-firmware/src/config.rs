// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Die Pin-Nummern dokumentieren die Verdrahtung. Die eigentliche Zuordnung
// passiert in main.rs über die typisierten Peripherals (GPIO5, GPIO6, ...).
#![allow(dead_code)]

use esp_core::{DEFAULT_DEBOUNCE_US, FRAME_INTERVAL_MS};

// ============================================================================
// LED-Matrix Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung der 5x5 WS2812 Matrix
pub const MATRIX_GPIO_PIN: u8 = 7;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Pause zwischen zwei Frames in Millisekunden
pub const FRAME_INTERVAL: u64 = FRAME_INTERVAL_MS;

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// Taster A (hochzählen), aktiv-low mit internem Pull-up
pub const BUTTON_A_GPIO_PIN: u8 = 5;

/// Taster B (runterzählen), aktiv-low mit internem Pull-up
pub const BUTTON_B_GPIO_PIN: u8 = 6;

/// Debounce-Schwelle in Mikrosekunden
/// Zeitbasis ist `embassy_time::Instant::as_micros()`
pub const BUTTON_DEBOUNCE_US: u64 = DEFAULT_DEBOUNCE_US;

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Status-LED
pub const STATUS_LED_GPIO_PIN: u8 = 15;

/// Blink-Intervall in Millisekunden (5x pro Sekunde umschalten)
pub const STATUS_BLINK_INTERVAL_MS: u64 = esp_core::BLINK_PERIOD_MS;
