//! Embassy tasks.

use scan_trigger::{ButtonReaction, EdgeAcquirer, Heartbeat, keep_alive};

use crate::config::KEEP_ALIVE_PERIOD;
use crate::led::StatusLed;
use crate::scanner::{ConsoleReport, RadioScanner};

/// Waits for button edges and reacts to each one: LED toggle, scan, print.
#[embassy_executor::task]
pub async fn button_task(edge: EdgeAcquirer<'static>, scanner: RadioScanner, led: StatusLed) {
    ButtonReaction::new(edge, scanner, led, ConsoleReport).run().await
}

/// Keep-alive unit sharing the executor with the button task.
#[embassy_executor::task]
pub async fn keep_alive_task(heartbeat: &'static Heartbeat) {
    keep_alive(heartbeat, KEEP_ALIVE_PERIOD).await
}
