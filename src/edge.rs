//! Interrupt-to-task edge handoff.
//!
//! [`EdgeSignal`] is a binary signal: releasing it while it is already set
//! does nothing, so any number of edges that arrive before the task gets
//! around to acquiring collapse into one pending reaction.
//!
//! The two sides are split by type. Interrupt handlers see the signal itself,
//! whose only operation is [`EdgeSignal::release`]. The waiting side is an
//! [`EdgeAcquirer`], handed out once per signal.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, with_timeout};

/// Binary edge signal shared between an interrupt handler and one task.
pub struct EdgeSignal {
    pending: Signal<CriticalSectionRawMutex, ()>,
    acquirer_taken: AtomicBool,
}

impl EdgeSignal {
    /// Creates an unset signal. Usable in `static` position.
    pub const fn new() -> Self {
        Self {
            pending: Signal::new(),
            acquirer_taken: AtomicBool::new(false),
        }
    }

    /// Marks the signal as set and wakes the acquirer, if it is waiting.
    ///
    /// Safe to call from interrupt context: it takes a short critical
    /// section, never blocks and never allocates. Releasing an already set
    /// signal is a no-op.
    #[inline]
    pub fn release(&self) {
        self.pending.signal(());
    }

    /// Returns `true` while a release is waiting to be acquired.
    pub fn is_set(&self) -> bool {
        self.pending.signaled()
    }

    /// Hands out the task-side role.
    ///
    /// Returns `None` on every call after the first, so exactly one task can
    /// ever wait on a given signal.
    pub fn acquirer(&self) -> Option<EdgeAcquirer<'_>> {
        if self.acquirer_taken.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(EdgeAcquirer { signal: self })
    }
}

impl Default for EdgeSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// How long [`EdgeAcquirer::acquire`] may wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Timeout {
    /// Wait until a release arrives.
    Infinite,
    /// Give up after the given duration.
    After(Duration),
}

impl From<Duration> for Timeout {
    fn from(limit: Duration) -> Self {
        Timeout::After(limit)
    }
}

/// Returned by [`EdgeAcquirer::acquire`] when no release arrived in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AcquireTimeout;

impl fmt::Display for AcquireTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no edge released before the timeout")
    }
}

/// Task-side handle of an [`EdgeSignal`]. Not available to interrupt code.
pub struct EdgeAcquirer<'a> {
    signal: &'a EdgeSignal,
}

impl EdgeAcquirer<'_> {
    /// Suspends the calling task until the signal is set, then clears it.
    ///
    /// Each release is consumed exactly once. With [`Timeout::After`] the
    /// signal is left untouched when the limit elapses first.
    pub async fn acquire(&mut self, timeout: Timeout) -> Result<(), AcquireTimeout> {
        match timeout {
            Timeout::Infinite => {
                self.signal.pending.wait().await;
                Ok(())
            }
            Timeout::After(limit) => with_timeout(limit, self.signal.pending.wait())
                .await
                .map_err(|_| AcquireTimeout),
        }
    }

    /// Consumes a pending release without waiting.
    pub fn try_acquire(&mut self) -> bool {
        self.signal.pending.try_take().is_some()
    }
}
