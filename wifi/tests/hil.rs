//! On-target tests. Run with `cargo test` and a board attached over probe-rs.
//!
//! The bench needs GPIO4 jumpered to the button pin (GPIO15) so the tests
//! can drive real edges into the button interrupt.

#![no_std]
#![no_main]

use panic_rtt_target as _;

esp_bootloader_esp_idf::esp_app_desc!();

#[cfg(test)]
#[embedded_test::tests(
    default_timeout = 20,
    executor = esp_rtos::embassy::Executor::new(),
    setup = rtt_target::rtt_init_defmt!()
)]
mod tests {
    use embassy_time::{Duration, Timer};
    use esp_hal::gpio::{Io, Level, Output, OutputConfig};
    use esp_hal::peripherals::{GPIO2, GPIO4, GPIO15, IO_MUX, WIFI};
    use esp_hal::timer::timg::TimerGroup;
    use scan_trigger::{Indicator, ScanOperation, Timeout};
    use wifi::config::{BUTTON_GPIO, TEST_JUMPER_GPIO};
    use wifi::led::StatusLed;
    use wifi::{allocator, button};
    use wifi::scanner::{self, RadioScanner};
    use wifi::types::{BUTTON_EDGE, HEARTBEAT};

    const SETTLE: Timeout = Timeout::After(Duration::from_millis(50));

    struct Context {
        wifi: WIFI<'static>,
        led: GPIO2<'static>,
        io_mux: IO_MUX<'static>,
        button: GPIO15<'static>,
        jumper: GPIO4<'static>,
    }

    #[init]
    fn init() -> Context {
        let peripherals = esp_hal::init(esp_hal::Config::default());
        allocator::init_heap();
        let timg0 = TimerGroup::new(peripherals.TIMG0);
        esp_rtos::start(timg0.timer0);

        Context {
            wifi: peripherals.WIFI,
            led: peripherals.GPIO2,
            io_mux: peripherals.IO_MUX,
            button: peripherals.GPIO15,
            jumper: peripherals.GPIO4,
        }
    }

    #[test]
    async fn status_led_follows_indicator(ctx: Context) {
        let mut led = StatusLed::new(ctx.led);
        assert!(!led.is_lit());

        led.set(true);
        assert!(led.is_lit());

        led.set(false);
        assert!(!led.is_lit());
    }

    #[test]
    async fn button_edge_coalesces_on_target(_ctx: Context) {
        let mut edge = BUTTON_EDGE.acquirer().unwrap();

        let idle = edge.acquire(Timeout::After(Duration::from_millis(20))).await;
        assert!(idle.is_err());

        BUTTON_EDGE.release();
        BUTTON_EDGE.release();
        assert!(edge.acquire(Timeout::Infinite).await.is_ok());
        assert!(!edge.try_acquire());
    }

    #[test]
    async fn button_interrupt_releases_one_edge_per_press(ctx: Context) {
        defmt::info!("GPIO{} drives GPIO{}", TEST_JUMPER_GPIO, BUTTON_GPIO);
        let mut jumper = Output::new(ctx.jumper, Level::High, OutputConfig::default());
        let mut io = Io::new(ctx.io_mux);
        button::arm(&mut io, button::input(ctx.button));
        let mut edge = BUTTON_EDGE.acquirer().unwrap();
        assert!(edge.acquire(SETTLE).await.is_err());

        // press
        jumper.set_low();
        assert!(edge.acquire(SETTLE).await.is_ok());
        assert!(edge.acquire(SETTLE).await.is_err());

        // release is a rising edge and wakes nobody
        jumper.set_high();
        assert!(edge.acquire(SETTLE).await.is_err());

        // bounce: two falling edges before the task runs
        jumper.set_low();
        Timer::after(Duration::from_micros(100)).await;
        jumper.set_high();
        Timer::after(Duration::from_micros(100)).await;
        jumper.set_low();
        assert!(edge.acquire(SETTLE).await.is_ok());
        assert!(edge.acquire(SETTLE).await.is_err());
    }

    #[test]
    async fn radio_scan_completes(ctx: Context) {
        let controller = scanner::start_radio(ctx.wifi).await.unwrap();
        let mut radio = RadioScanner::new(controller);

        let records = radio.run().await.unwrap();
        for record in &records {
            defmt::info!("{}", record);
        }
    }

    #[test]
    async fn keep_alive_task_beats(_ctx: Context) {
        let before = HEARTBEAT.beats();
        let beat = embassy_time::with_timeout(
            Duration::from_millis(2500),
            scan_trigger::keep_alive(&HEARTBEAT, Duration::from_millis(100)),
        )
        .await;
        assert!(beat.is_err());
        assert!(HEARTBEAT.beats() > before);
    }
}
