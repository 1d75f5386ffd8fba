//! Board support for the nRF52840-DK.
//!
//! Pin assignments are documented in [`crate::config`]; the slot
//! binaries pick the concrete `embassy_nrf::peripherals::*` instances.
//!
//! ## Components
//!
//! - **buttons**: polled snapshots of the three user buttons
//! - **leds**: discrete status LEDs + the WS2812 strip writer

pub mod buttons;
pub mod leds;

use embassy_nrf::interrupt::Priority;
use embassy_nrf::Peripherals;

/// Initialise the HAL.
///
/// GPIOTE and time-driver interrupts are moved off the highest
/// priorities, which the SoftDevice reserves for itself. Harmless in
/// slots that never enable the SoftDevice.
pub fn init() -> Peripherals {
    let mut config = embassy_nrf::config::Config::default();
    config.gpiote_interrupt_priority = Priority::P2;
    config.time_interrupt_priority = Priority::P2;
    embassy_nrf::init(config)
}
