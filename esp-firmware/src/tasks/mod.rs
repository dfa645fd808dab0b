// Task-Modul: Nebenläufige Teile der Firmware
//
// - Taster: GPIO-Interrupt (fallende Flanke)
// - Status-LED: Embassy Task mit Ticker
// - Render-Schleife: async fn, wird direkt von main() aufgerufen

pub mod buttons;
pub mod render;
pub mod status_blink;

// Re-export für einfachen Import
pub use buttons::install_button_interrupts;
pub use render::render_loop;
pub use status_blink::{status_blink_logic, status_blink_task};
