//! Button GPIO and its interrupt handler.
//!
//! The handler runs in interrupt context. It acknowledges the pin and
//! releases [`BUTTON_EDGE`]; everything else happens in the button task.

use core::cell::RefCell;

use critical_section::Mutex;
use esp_hal::gpio::{Event, Input, InputConfig, InputPin, Io, Pull};
use esp_hal::{handler, ram};

use crate::types::BUTTON_EDGE;

// Owned here so the handler can acknowledge the pending edge.
static BUTTON: Mutex<RefCell<Option<Input<'static>>>> = Mutex::new(RefCell::new(None));

/// Configures `pin` as the active-low button input.
pub fn input(pin: impl InputPin + 'static) -> Input<'static> {
    Input::new(pin, InputConfig::default().with_pull(Pull::Up))
}

/// Enables falling-edge interrupts on `button` and installs the handler.
///
/// Call only after the button task is running, so no edge is released
/// before anyone can acquire it.
pub fn arm(io: &mut Io<'_>, mut button: Input<'static>) {
    critical_section::with(|cs| {
        button.listen(Event::FallingEdge);
        BUTTON.borrow_ref_mut(cs).replace(button);
    });
    io.set_interrupt_handler(button_isr);
}

#[handler]
#[ram]
fn button_isr() {
    let fell = critical_section::with(|cs| match BUTTON.borrow_ref_mut(cs).as_mut() {
        Some(button) if button.is_interrupt_set() => {
            button.clear_interrupt();
            true
        }
        _ => false,
    });

    if fell {
        BUTTON_EDGE.release();
    }
}
