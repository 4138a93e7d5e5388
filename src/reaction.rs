//! Button reaction task.
//!
//! The reaction waits on the button [`EdgeAcquirer`] and, for every acquired
//! edge, flips the LED, drives the indicator, runs one scan and renders it.
//! It owns the LED state outright; nothing else writes it.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::edge::{AcquireTimeout, EdgeAcquirer, Timeout};
use crate::fmt::Debug2Format;
use crate::record::AccessPointRecord;

/// Last level commanded to the status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedState {
    on: bool,
}

impl LedState {
    /// LED off, the power-on level.
    pub const fn off() -> Self {
        Self { on: false }
    }

    /// Whether the LED is lit.
    pub fn is_on(self) -> bool {
        self.on
    }

    fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }
}

/// Physical output driven with the LED level.
pub trait Indicator {
    /// Sets the output. Assumed infallible at this layer.
    fn set(&mut self, on: bool);
}

/// Access point enumeration.
///
/// Only the reaction task calls this, one scan at a time.
#[allow(async_fn_in_trait)]
pub trait ScanOperation {
    /// Why a scan could not be completed.
    type Error: Debug;

    /// Runs one scan and returns the access points in the order found.
    async fn run(&mut self) -> Result<Vec<AccessPointRecord>, Self::Error>;
}

/// Sink for scan results. Implementations swallow their own faults.
pub trait ScanReport {
    /// Renders the records of one scan, possibly none.
    fn render(&mut self, records: &[AccessPointRecord]);

    /// Called once per reaction, before the LED changes.
    fn pressed(&mut self) {}

    /// Called when a scan fails, before the empty table is rendered.
    fn scan_failed(&mut self) {}
}

impl<T: Indicator + ?Sized> Indicator for &mut T {
    fn set(&mut self, on: bool) {
        (**self).set(on)
    }
}

impl<T: ScanOperation + ?Sized> ScanOperation for &mut T {
    type Error = T::Error;

    async fn run(&mut self) -> Result<Vec<AccessPointRecord>, Self::Error> {
        (**self).run().await
    }
}

impl<T: ScanReport + ?Sized> ScanReport for &mut T {
    fn render(&mut self, records: &[AccessPointRecord]) {
        (**self).render(records)
    }

    fn pressed(&mut self) {
        (**self).pressed()
    }

    fn scan_failed(&mut self) {
        (**self).scan_failed()
    }
}

/// What one reaction did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReactionOutcome {
    /// The scan succeeded and this many records were rendered.
    Rendered {
        /// Number of access points rendered.
        records: usize,
    },
    /// The scan failed; an empty table was rendered instead.
    ScanFailed,
}

/// Runs one scan and renders whatever it produced.
///
/// A failed scan is logged and rendered as an empty table. The button
/// reaction and the scan at boot both go through here.
pub async fn scan_and_render<S, R>(scanner: &mut S, report: &mut R) -> ReactionOutcome
where
    S: ScanOperation + ?Sized,
    R: ScanReport + ?Sized,
{
    match scanner.run().await {
        Ok(records) => {
            report.render(&records);
            ReactionOutcome::Rendered {
                records: records.len(),
            }
        }
        Err(err) => {
            warn!("scan failed: {}", Debug2Format(&err));
            report.scan_failed();
            report.render(&[]);
            ReactionOutcome::ScanFailed
        }
    }
}

/// The long-lived task that turns button edges into scans.
pub struct ButtonReaction<'a, S, I, R> {
    edge: EdgeAcquirer<'a>,
    scanner: S,
    indicator: I,
    report: R,
    led: LedState,
    reactions: u32,
}

impl<'a, S, I, R> ButtonReaction<'a, S, I, R>
where
    S: ScanOperation,
    I: Indicator,
    R: ScanReport,
{
    /// Builds the reaction with the LED assumed off.
    pub fn new(edge: EdgeAcquirer<'a>, scanner: S, indicator: I, report: R) -> Self {
        Self {
            edge,
            scanner,
            indicator,
            report,
            led: LedState::off(),
            reactions: 0,
        }
    }

    /// Read-only snapshot of the LED state.
    pub fn led(&self) -> LedState {
        self.led
    }

    /// Completed reactions since start, wrapping on overflow.
    pub fn reactions(&self) -> u32 {
        self.reactions
    }

    /// Performs one reaction without waiting for an edge.
    pub async fn react(&mut self) -> ReactionOutcome {
        self.report.pressed();

        let level = self.led.toggle();
        self.indicator.set(level);
        debug!("led -> {}", level);

        let outcome = scan_and_render(&mut self.scanner, &mut self.report).await;

        self.reactions = self.reactions.wrapping_add(1);
        outcome
    }

    /// Waits for one edge, then reacts to it.
    pub async fn step(&mut self, timeout: Timeout) -> Result<ReactionOutcome, AcquireTimeout> {
        self.edge.acquire(timeout).await?;
        Ok(self.react().await)
    }

    /// Reacts to button edges forever.
    pub async fn run(mut self) -> ! {
        info!("button reaction waiting for edges");
        loop {
            if let Ok(outcome) = self.step(Timeout::Infinite).await {
                trace!("reaction {} done: {}", self.reactions, outcome);
            }
        }
    }
}
