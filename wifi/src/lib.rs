//! ESP32 button-triggered WiFi scanner
//!
//! Board wiring for the [`scan_trigger`] core: a falling edge on the button
//! pin raises a GPIO interrupt, the handler releases the button edge, and
//! the reaction task toggles the status LED and runs a WiFi scan.
//!
//! ## Startup order
//!
//! 1. Heap and radio bring-up, one scan printed at boot
//! 2. Button and LED pins configured
//! 3. Button reaction task spawned
//! 4. GPIO interrupt handler installed
//! 5. Keep-alive task spawned
//!
//! Any failure before step 5 halts the firmware.
//!
//! ## Example
//!
//! ```no_run
//! use wifi::{allocator, scanner};
//! use embassy_executor::Spawner;
//!
//! #[esp_rtos::main]
//! async fn main(spawner: Spawner) {
//!     // Initialize heap
//!     allocator::init_heap();
//!
//!     // Bring up the radio, then arm the button
//!     // ... (see bin/main.rs for complete example)
//! }
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

/// Memory allocation configuration
pub mod allocator;

/// Button GPIO and its interrupt handler
pub mod button;

/// Compile-time firmware settings
pub mod config;

/// Startup errors
pub mod error;

/// Status LED
pub mod led;

/// WiFi bring-up, scanning and console output
pub mod scanner;

/// Embassy tasks
pub mod tasks;

/// Global static storage
pub mod types;
