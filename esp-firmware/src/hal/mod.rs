// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus esp-core für die echte Hardware:
// RMT für die WS2812 Matrix, GPIO für die Status-LED.

pub mod matrix_sink;
pub mod status_led;

pub use matrix_sink::{MATRIX_BUFFER_SIZE, MatrixBuffer, MatrixSink, RmtMatrixSink};
pub use status_led::GpioStatusLed;
