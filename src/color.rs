//! Position-to-color transform for the strip animation.
//!
//! A "color wheel": a deterministic map from a scalar position onto a
//! cyclic 255-unit hue scale, swept linearly red → green → blue → red
//! in three 85-unit bands.

use smart_leds::RGB8;

/// Map a wheel position to an RGB color, scaled down for brightness.
///
/// `pos` is normalized into `[0, 255)` first, so any monotonically
/// growing phase can be fed in directly. Each channel is integer-divided
/// by `divisor` (must be >= 1) before being returned.
pub fn color_wheel(pos: u32, divisor: u8) -> RGB8 {
    let pos = (pos % 255) as u8;

    let (r, g, b) = if pos < 85 {
        (255 - pos * 3, 0, pos * 3)
    } else if pos < 170 {
        let pos = pos - 85;
        (0, pos * 3, 255 - pos * 3)
    } else {
        let pos = pos - 170;
        (pos * 3, 255 - pos * 3, 0)
    };

    RGB8::new(r / divisor, g / divisor, b / divisor)
}
