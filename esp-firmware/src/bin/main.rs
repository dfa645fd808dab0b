// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Io, Level, Output, OutputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;
use esp_hal_smartled::smart_led_buffer;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_core::PIXEL_COUNT;
use esp_ziffer_matrix::DIGIT;
use esp_ziffer_matrix::config::{BUTTON_DEBOUNCE_US, RMT_CLOCK_MHZ};
use esp_ziffer_matrix::hal::{MatrixBuffer, RmtMatrixSink};
use esp_ziffer_matrix::tasks::{install_button_interrupts, render_loop, status_blink_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime, richtet die Taster ein
/// und spawnt den Blink-Task. Danach läuft die Render-Schleife direkt in main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    defmt::info!("Digit matrix starting, digit = {}", DIGIT.get());

    // Taster A/B: aktiv-low, interner Pull-up, Interrupt auf fallende Flanke
    let button_a = Input::new(peripherals.GPIO5, InputConfig::default().with_pull(Pull::Up));
    let button_b = Input::new(peripherals.GPIO6, InputConfig::default().with_pull(Pull::Up));
    let mut io = Io::new(peripherals.IO_MUX);
    install_button_interrupts(&mut io, button_a, button_b, &DIGIT, BUTTON_DEBOUNCE_US);

    // Status-LED blinkt unabhängig vom Zähler
    let status_led = Output::new(peripherals.GPIO15, Level::Low, OutputConfig::default());
    spawner
        .spawn(status_blink_task(status_led))
        .expect("Failed to spawn status blink task");

    // RMT-Buffer liegt statisch, 25 LEDs sind zu groß für den Stack
    static RMT_BUFFER: static_cell::StaticCell<MatrixBuffer> = static_cell::StaticCell::new();
    let rmt_buffer = RMT_BUFFER.init(smart_led_buffer!(PIXEL_COUNT));

    let sink = RmtMatrixSink::new(peripherals.GPIO7, peripherals.RMT, RMT_CLOCK_MHZ, rmt_buffer)
        .into_pixel_sink();

    // Render-Schleife: erster Frame sofort, danach alle FRAME_INTERVAL ms
    render_loop(sink, &DIGIT).await
}
