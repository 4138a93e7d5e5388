//! Compile-time firmware settings.
//!
//! Pins are taken by type in `main`; the numbers here document the board
//! wiring and show up in the startup banner.

use embassy_time::Duration;

/// Push button, active low with the internal pull-up enabled.
pub const BUTTON_GPIO: u8 = 15;

/// Status LED, active high.
pub const LED_GPIO: u8 = 2;

/// Period of the keep-alive task.
pub const KEEP_ALIVE_PERIOD: Duration = scan_trigger::idle::DEFAULT_KEEP_ALIVE_PERIOD;

/// Pause after switching the radio to station mode and after starting it.
pub const RADIO_SETTLE: Duration = Duration::from_millis(500);

/// Output wired to the button pin on the test bench. The on-target tests
/// drive real edges into the button interrupt through it.
pub const TEST_JUMPER_GPIO: u8 = 4;
