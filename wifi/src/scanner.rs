//! WiFi driver functionality for ESP32.
//!
//! This module brings the radio up in station mode and adapts it to the
//! scan and report roles the button reaction expects.

use alloc::vec::Vec;

use embassy_time::Timer;
use esp_hal::peripherals::WIFI;
use esp_println::{print, println};
use esp_radio::wifi::{ScanConfig, WifiController, WifiError, WifiMode};
use scan_trigger::{AccessPointRecord, ScanOperation, ScanReport, ScanTable};

use crate::config::RADIO_SETTLE;
use crate::error::StartupError;
use crate::types::{RADIO_INIT, WIFI_CONTROLLER};

/// Access point scan backed by the ESP32 radio.
pub struct RadioScanner {
    controller: &'static mut WifiController<'static>,
}

impl RadioScanner {
    /// Wraps a started WiFi controller.
    pub fn new(controller: &'static mut WifiController<'static>) -> Self {
        Self { controller }
    }
}

impl ScanOperation for RadioScanner {
    type Error = WifiError;

    async fn run(&mut self) -> Result<Vec<AccessPointRecord>, WifiError> {
        let found = self
            .controller
            .scan_with_config_async(ScanConfig::default())
            .await?;

        Ok(found
            .iter()
            .map(|ap| AccessPointRecord::new(ap.channel, ap.signal_strength, ap.ssid.as_str()))
            .collect())
    }
}

/// Prints reactions and scan tables on the serial console.
pub struct ConsoleReport;

impl ScanReport for ConsoleReport {
    fn render(&mut self, records: &[AccessPointRecord]) {
        print!("{}", ScanTable::new(records));
    }

    fn pressed(&mut self) {
        println!("Button pressed!");
    }

    fn scan_failed(&mut self) {
        println!("WiFi scan failed, showing an empty table");
    }
}

/// Initializes the radio and starts the WiFi controller in station mode.
///
/// # Errors
///
/// Returns the [`StartupError`] of the first step that failed, after
/// printing its cause.
pub async fn start_radio(
    device: WIFI<'static>,
) -> Result<&'static mut WifiController<'static>, StartupError> {
    let radio = esp_radio::init()
        .map_err(StartupError::RadioInit.reported())?;
    let radio = RADIO_INIT.init(radio);
    println!("Radio initialized!");

    let (controller, _interfaces) = esp_radio::wifi::new(radio, device, Default::default())
        .map_err(StartupError::Controller.reported())?;
    let controller = WIFI_CONTROLLER.init(controller);
    println!("WiFi controller created!");

    // Station mode, otherwise scans fail intermittently
    controller
        .set_mode(WifiMode::Sta)
        .map_err(StartupError::Mode.reported())?;
    Timer::after(RADIO_SETTLE).await;

    controller
        .start_async()
        .await
        .map_err(StartupError::Start.reported())?;
    println!("WiFi controller started!");
    Timer::after(RADIO_SETTLE).await;

    Ok(controller)
}
