//! Strip animator - a moving rainbow over the WS2812 strip.
//!
//! Each frame stages every pixel from the color wheel, spatially spread
//! by `PIXEL_WHEEL_STEP` and shifted by a phase that advances by
//! `FRAME_OFFSET_STEP` per frame. The phase grows without an explicit
//! bound; only `phase mod 255` is observable through the wheel, so the
//! eventual `u32` wrap is invisible.

use smart_leds::RGB8;

use crate::color::color_wheel;
use crate::config::{BRIGHTNESS_DIVISOR, FRAME_OFFSET_STEP, PIXEL_WHEEL_STEP};

/// Animation state: the per-frame phase offset. Owned by the strip
/// loop; the staged frame buffer is passed in by the caller.
pub struct StripAnimator {
    offset: u32,
}

impl StripAnimator {
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    /// Stage one frame into `frame`, then advance the phase. Every pixel
    /// is written every frame; the caller flushes the whole frame to the
    /// strip in one transfer afterwards.
    pub fn render(&mut self, frame: &mut [RGB8]) {
        for (i, px) in frame.iter_mut().enumerate() {
            *px = color_wheel(
                (i as u32).wrapping_mul(PIXEL_WHEEL_STEP).wrapping_add(self.offset),
                BRIGHTNESS_DIVISOR,
            );
        }
        self.offset = self.offset.wrapping_add(FRAME_OFFSET_STEP);
    }
}

impl Default for StripAnimator {
    fn default() -> Self {
        Self::new()
    }
}
