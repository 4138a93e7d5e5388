//! Button-triggered Wi-Fi scan core
//!
//! This library holds the hardware-free half of the scan-on-press firmware:
//! the handoff that carries a button edge out of interrupt context into a
//! long-lived reaction task, the reaction itself, and the keep-alive task
//! that shares the executor with it.
//!
//! ## Roles
//!
//! - Interrupt context only ever calls [`EdgeSignal::release`].
//! - The reaction task owns the single [`EdgeAcquirer`] and is the only
//!   writer of the [`LedState`].
//!
//! ## Example
//!
//! ```no_run
//! use scan_trigger::{ButtonReaction, EdgeSignal};
//!
//! static BUTTON_EDGE: EdgeSignal = EdgeSignal::new();
//!
//! // interrupt handler:
//! fn on_falling_edge() {
//!     BUTTON_EDGE.release();
//! }
//!
//! // task context (see wifi/src/tasks.rs for the firmware wiring):
//! // let edge = BUTTON_EDGE.acquirer().unwrap();
//! // ButtonReaction::new(edge, scanner, led, report).run().await
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// must stay first so the logging macros are visible to the other modules
mod fmt;

/// Interrupt-safe edge handoff
pub mod edge;

/// Background keep-alive task
pub mod idle;

/// Button reaction task and its collaborators
pub mod reaction;

/// Access point records and the scan report table
pub mod record;

pub use edge::{AcquireTimeout, EdgeAcquirer, EdgeSignal, Timeout};
pub use idle::{Heartbeat, keep_alive};
pub use reaction::{
    ButtonReaction, Indicator, LedState, ReactionOutcome, ScanOperation, ScanReport,
    scan_and_render,
};
pub use record::{AccessPointRecord, ScanTable};
