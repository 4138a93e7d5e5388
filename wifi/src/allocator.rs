//! Memory allocation configuration for ESP32 WiFi operations.
//!
//! The radio driver keeps its buffers on the heap, and every scan result is
//! collected into a heap-allocated vector before it is printed.

/// Reclaimed RAM heap size (from bootloader sections)
const RECLAIMED_HEAP_SIZE: usize = 98768;

/// Main heap size for WiFi buffers and scan results
const MAIN_HEAP_SIZE: usize = 64 * 1024;

/// Initialize heap allocators.
///
/// Registers two regions:
/// - Reclaimed RAM: memory the bootloader no longer needs
/// - Main heap: WiFi driver buffers and scan result vectors
///
/// Must run once, before the radio is initialized.
pub fn init_heap() {
    esp_alloc::heap_allocator!(#[esp_hal::ram(reclaimed)] size: RECLAIMED_HEAP_SIZE);
    esp_alloc::heap_allocator!(size: MAIN_HEAP_SIZE);
}
