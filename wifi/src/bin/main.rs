#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use defmt::info;
use embassy_executor::Spawner;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::Io;
use esp_hal::peripherals::{GPIO2, GPIO15, IO_MUX, WIFI};
use esp_hal::timer::timg::TimerGroup;
use esp_println::println;
use panic_rtt_target as _;
use wifi::config::{BUTTON_GPIO, LED_GPIO};
use wifi::error::StartupError;
use wifi::led::StatusLed;
use wifi::scanner::{self, ConsoleReport, RadioScanner};
use wifi::tasks::{button_task, keep_alive_task};
use wifi::types::{BUTTON_EDGE, HEARTBEAT};
use wifi::{allocator, button};

esp_bootloader_esp_idf::esp_app_desc!();

#[allow(
    clippy::large_stack_frames,
    reason = "it's not unusual to allocate larger buffers etc. in main"
)]
#[esp_rtos::main]
async fn main(spawner: Spawner) {
    rtt_target::rtt_init_defmt!();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    allocator::init_heap();
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    println!("Embassy initialized!");

    let wired = wire_up(
        spawner,
        peripherals.WIFI,
        peripherals.IO_MUX,
        peripherals.GPIO15,
        peripherals.GPIO2,
    )
    .await;
    if let Err(e) = wired {
        panic!("startup failed: {}", e);
    }
}

async fn wire_up(
    spawner: Spawner,
    wifi: WIFI<'static>,
    io_mux: IO_MUX<'static>,
    button_pin: GPIO15<'static>,
    led_pin: GPIO2<'static>,
) -> Result<(), StartupError> {
    let controller = scanner::start_radio(wifi).await?;

    let mut radio = RadioScanner::new(controller);
    scan_trigger::scan_and_render(&mut radio, &mut ConsoleReport).await;

    println!("Button on GPIO{}, LED on GPIO{}", BUTTON_GPIO, LED_GPIO);
    let mut io = Io::new(io_mux);
    let button = button::input(button_pin);
    let led = StatusLed::new(led_pin);

    let edge = BUTTON_EDGE.acquirer().ok_or(StartupError::EdgeClaimed)?;
    spawner
        .spawn(button_task(edge, radio, led))
        .map_err(StartupError::Spawn.reported())?;

    button::arm(&mut io, button);
    info!("button interrupt armed");

    spawner
        .spawn(keep_alive_task(&HEARTBEAT))
        .map_err(StartupError::Spawn.reported())?;

    println!("Press the button to scan again.");
    Ok(())
}
