//! Startup errors.
//!
//! Everything here is fatal: the firmware has no degraded mode without its
//! radio or its tasks, so `main` halts on the first one.

use core::fmt;

/// A step of startup wiring that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum StartupError {
    /// `esp_radio::init` failed
    RadioInit,
    /// The WiFi controller could not be created
    Controller,
    /// Station mode could not be selected
    Mode,
    /// The WiFi controller did not start
    Start,
    /// The button edge was already claimed by another task
    EdgeClaimed,
    /// An embassy task could not be spawned
    Spawn,
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            StartupError::RadioInit => "radio initialization",
            StartupError::Controller => "WiFi controller creation",
            StartupError::Mode => "WiFi station mode",
            StartupError::Start => "WiFi controller start",
            StartupError::EdgeClaimed => "button edge claim",
            StartupError::Spawn => "task spawn",
        };
        write!(f, "{step} failed")
    }
}

impl StartupError {
    /// Maps the cause of a failed step to `self`, printing both on the
    /// console first.
    pub fn reported<E: fmt::Display>(self) -> impl FnOnce(E) -> Self {
        move |cause| {
            esp_println::println!("{}: {}", self, cause);
            self
        }
    }
}
