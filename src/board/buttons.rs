//! GPIO button input - polled snapshots.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - sw1 - forces the button-indicator LED on while held
//!   - sw2 - watched for press/release edge reporting
//!   - sw3 - forces the button-indicator LED off while held
//!
//! The indicators poll at a fixed cadence, so these are plain
//! non-blocking level reads - no GPIOTE edge waits, no debounce timers.
//! Edge filtering happens in the pure logic layer.

use embassy_nrf::gpio::{AnyPin, Input, Pull};

/// The three user buttons, read as instantaneous snapshots.
pub struct Buttons {
    sw1: Input<'static>,
    sw2: Input<'static>,
    sw3: Input<'static>,
}

impl Buttons {
    pub fn new(sw1: AnyPin, sw2: AnyPin, sw3: AnyPin) -> Self {
        Self {
            sw1: Input::new(sw1, Pull::Up),
            sw2: Input::new(sw2, Pull::Up),
            sw3: Input::new(sw3, Pull::Up),
        }
    }

    /// sw1 level right now (active-low).
    pub fn sw1_pressed(&self) -> bool {
        self.sw1.is_low()
    }

    /// sw2 level right now (active-low).
    pub fn sw2_pressed(&self) -> bool {
        self.sw2.is_low()
    }

    /// sw3 level right now (active-low).
    pub fn sw3_pressed(&self) -> bool {
        self.sw3.is_low()
    }
}

/// A single polled button, for slots that only watch one.
pub struct Button {
    pin: Input<'static>,
}

impl Button {
    pub fn new(pin: AnyPin) -> Self {
        Self {
            pin: Input::new(pin, Pull::Up),
        }
    }

    /// Level right now (active-low).
    pub fn is_pressed(&self) -> bool {
        self.pin.is_low()
    }
}
