//! Background keep-alive task.

use core::sync::atomic::{AtomicU32, Ordering};

use embassy_time::{Duration, Timer};

/// Period used by the firmware's keep-alive task.
pub const DEFAULT_KEEP_ALIVE_PERIOD: Duration = Duration::from_secs(1);

/// Counts keep-alive periods; a stalled count means the executor is starved.
pub struct Heartbeat {
    beats: AtomicU32,
}

impl Heartbeat {
    /// A heartbeat that has not beaten yet.
    pub const fn new() -> Self {
        Self {
            beats: AtomicU32::new(0),
        }
    }

    /// Periods completed so far, wrapping on overflow.
    pub fn beats(&self) -> u32 {
        self.beats.load(Ordering::Relaxed)
    }

    fn beat(&self) -> u32 {
        self.beats.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self::new()
    }
}

/// Sleeps in `period` steps forever, beating `heartbeat` after each one.
pub async fn keep_alive(heartbeat: &Heartbeat, period: Duration) -> ! {
    loop {
        Timer::after(period).await;
        let beats = heartbeat.beat();
        trace!("keep-alive {}", beats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_time::with_timeout;

    #[test]
    fn heartbeat_starts_at_zero() {
        assert_eq!(Heartbeat::new().beats(), 0);
    }

    #[test]
    fn keep_alive_never_returns_and_keeps_beating() {
        let heartbeat = Heartbeat::new();
        let result = embassy_futures::block_on(with_timeout(
            Duration::from_millis(60),
            keep_alive(&heartbeat, Duration::from_millis(5)),
        ));
        assert!(result.is_err());
        assert!(heartbeat.beats() >= 2);
    }
}
