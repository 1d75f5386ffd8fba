//! LED output - discrete status LEDs and the WS2812 strip.
//!
//! Both sinks are write-only and idempotent: writing the same state
//! twice is harmless, and the indicators write exactly once per poll
//! without change detection.

use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};
use embassy_nrf::peripherals::SPI3;
use embassy_nrf::spim::Spim;
use smart_leds::{SmartLedsWrite, RGB8};
use ws2812_spi::Ws2812;

use crate::error::Error;

/// A single status LED. The DK's LEDs are active-low; callers think in
/// on/off and the wrapper absorbs the polarity.
pub struct Led {
    pin: Output<'static>,
}

impl Led {
    /// Starts off.
    pub fn new(pin: AnyPin) -> Self {
        Self {
            pin: Output::new(pin, Level::High, OutputDrive::Standard),
        }
    }

    pub fn set(&mut self, on: bool) {
        if on {
            self.pin.set_low();
        } else {
            self.pin.set_high();
        }
    }
}

/// The WS2812 strip, driven as ws2812-over-SPI on SPIM3.
///
/// Callers stage a full frame locally and commit it with [`flush`];
/// the whole frame goes out in one SPI transfer, so the physical strip
/// never shows a partially updated frame.
///
/// [`flush`]: Strip::flush
pub struct Strip {
    driver: Ws2812<Spim<'static, SPI3>>,
}

impl Strip {
    /// `spim` must be configured for 3 MHz, mode 0 - the ws2812 bit
    /// patterns are generated at that rate.
    pub fn new(spim: Spim<'static, SPI3>) -> Self {
        Self {
            driver: Ws2812::new(spim),
        }
    }

    /// Commit one staged frame. A failed transfer drops the frame; the
    /// next flush self-corrects.
    pub fn flush(&mut self, frame: &[RGB8]) -> Result<(), Error> {
        self.driver
            .write(frame.iter().copied())
            .map_err(|_| Error::StripWrite)
    }
}
