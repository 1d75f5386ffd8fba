//! Button indicator - a self-toggling LED modulated by override buttons.
//!
//! Per poll, the LED level inverts unconditionally, then sw1 forces it
//! on and sw3 forces it off - in that order, so sw3 wins when both are
//! held. A third button (sw2) is watched purely for edge reporting.

use crate::indicator::{Edge, EdgeDetector};

/// Loop state for the button indicator. One instance per slot, owned by
/// the polling loop; nothing here touches hardware.
pub struct ButtonIndicator {
    led_state: bool,
    sw2: EdgeDetector,
}

impl ButtonIndicator {
    /// `initial_led` is the level before the first toggle; `initial_sw2`
    /// is the sw2 baseline sampled before the loop starts.
    pub const fn new(initial_led: bool, initial_sw2: bool) -> Self {
        Self {
            led_state: initial_led,
            sw2: EdgeDetector::new(initial_sw2),
        }
    }

    /// One poll step: toggle, apply overrides, return the level to write.
    ///
    /// The override order is load-bearing: sw3 is applied after sw1, so
    /// holding both resolves to off.
    pub fn update_led(&mut self, sw1_pressed: bool, sw3_pressed: bool) -> bool {
        self.led_state = !self.led_state;
        if sw1_pressed {
            self.led_state = true;
        }
        if sw3_pressed {
            self.led_state = false;
        }
        self.led_state
    }

    /// Feed the sw2 level polled after the LED write. At most one edge
    /// per transition; a held button reports nothing.
    pub fn sw2_edge(&mut self, sw2_pressed: bool) -> Option<Edge> {
        self.sw2.sample(sw2_pressed)
    }
}
