//! Unified error type for stat2led.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! The indicators themselves are fail-silent: a failed write is logged
//! and the next poll self-corrects, so these errors never escape a slot
//! binary's loop.

use defmt::Format;

/// Top-level error type used across the firmware.
#[derive(Debug, Format)]
pub enum Error {
    // BLE
    /// The SoftDevice returned a BLE-level error.
    Ble(BleError),

    // Strip
    /// Pushing a staged frame over SPI failed; the frame is dropped.
    StripWrite,
}

/// Subset of BLE errors we propagate (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, Format)]
pub enum BleError {
    /// Advertising could not be started or was aborted.
    AdvertiseFailed,
}

// Convenience conversions

impl From<BleError> for Error {
    fn from(e: BleError) -> Self {
        Error::Ble(e)
    }
}
