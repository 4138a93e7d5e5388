//! Global static storage.
//!
//! Static cells give the radio objects the `'static` lifetime embassy tasks
//! need; the button edge and heartbeat are plain statics because interrupt
//! code has to reach them without being handed a reference.

use esp_radio::wifi::WifiController;
use scan_trigger::{EdgeSignal, Heartbeat};
use static_cell::StaticCell;

/// Static storage for WiFi controller.
pub static WIFI_CONTROLLER: StaticCell<WifiController<'static>> = StaticCell::new();

/// Static storage for radio initialization controller.
pub static RADIO_INIT: StaticCell<esp_radio::Controller<'static>> = StaticCell::new();

/// Released by the GPIO interrupt handler, acquired by the button task.
pub static BUTTON_EDGE: EdgeSignal = EdgeSignal::new();

/// Beaten by the keep-alive task.
pub static HEARTBEAT: Heartbeat = Heartbeat::new();
