//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and animation
//! constants live here so they can be tuned in one place.

// Connectivity indicator

/// LED hold while the radio is off (ms).
pub const CONN_OFF_HOLD_MS: u64 = 100;

/// Half-period of the advertising blink (ms): LED on for this long,
/// then off for the same, once per outer loop pass.
pub const CONN_ADV_HOLD_MS: u64 = 500;

/// LED hold while a central is connected (ms).
pub const CONN_CONNECTED_HOLD_MS: u64 = 100;

/// Idle hold when the state word cannot be decoded (ms). The LED is
/// left untouched for that pass; this only keeps the loop cooperative.
pub const CONN_IDLE_HOLD_MS: u64 = 100;

// Button indicator

/// Button poll period (ms). 2 Hz - transitions between polls are missed,
/// which is an accepted limitation at this cadence.
pub const BUTTON_POLL_MS: u64 = 500;

// LED strip

/// Number of WS2812 pixels on the strip.
pub const NUM_LEDS: usize = 60;

/// Raw 0-255 channel values are integer-divided by this before being
/// written. Must be >= 1; larger means dimmer. 8 keeps a 60-pixel strip
/// well under 1 A at 5 V.
pub const BRIGHTNESS_DIVISOR: u8 = 8;

/// Delay between staged frames (ms).
pub const FRAME_DELAY_MS: u64 = 10;

/// Wheel units between adjacent pixels. 4 spreads one full hue cycle
/// (255 units) across ~64 pixels.
pub const PIXEL_WHEEL_STEP: u32 = 4;

/// Wheel units the whole pattern advances per frame.
pub const FRAME_OFFSET_STEP: u32 = 2;

// BLE

/// Base of the advertised device name; a 4-hex-digit hardware id suffix
/// is appended at boot (`<base>_XXXX`).
pub const BLE_NAME_BASE: &str = "stat2led";

/// Advertising interval (in 0.625 ms units). 400 = 250 ms.
pub const BLE_ADV_INTERVAL: u32 = 400;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in the slot binaries. Adjust for your custom PCB.
//
//   Button sw1     → P0.11 (BUTTON1)
//   Button sw2     → P0.12 (BUTTON2)
//   Button sw3     → P0.24 (BUTTON3)
//   LED led1       → P0.13 (LED1, active-low)
//   LED led3       → P0.15 (LED3, active-low)
//   Strip data     → P1.05 (SPIM3 MOSI)
//   Strip clock    → P1.06 (SPIM3 SCK, unused by the strip)
