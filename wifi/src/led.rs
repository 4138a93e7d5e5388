//! Status LED.

use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};
use scan_trigger::Indicator;

/// The board LED toggled by every button reaction. Starts off.
pub struct StatusLed {
    pin: Output<'static>,
}

impl StatusLed {
    /// Configures `pin` as a push-pull output driven low.
    pub fn new(pin: impl OutputPin + 'static) -> Self {
        Self {
            pin: Output::new(pin, Level::Low, OutputConfig::default()),
        }
    }

    /// Whether the pin is currently driven high.
    pub fn is_lit(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl Indicator for StatusLed {
    fn set(&mut self, on: bool) {
        self.pin.set_level(Level::from(on));
    }
}
