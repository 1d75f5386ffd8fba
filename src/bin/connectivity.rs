//! Connectivity indicator slot.
//!
//! Advertises over BLE and blinks LED3 with the connectivity state:
//! dark while the radio is off, a slow 1 Hz blink while advertising,
//! solid while a central is connected. The state is re-read at the top
//! of every pass, so a change shows up within the current pattern's
//! hold time.

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_time::Timer;

use stat2led::board::{self, leds::Led};
use stat2led::ble;
use stat2led::config::CONN_IDLE_HOLD_MS;
use stat2led::indicator::connectivity::blink_pattern;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = board::init();
    info!("ble-indicator slot up");

    let mut led = Led::new(p.P0_15.degrade()); // LED3
    ble::start(&spawner);

    loop {
        let steps = blink_pattern(ble::current_state());
        if steps.is_empty() {
            // Undecodable state word: leave the LED alone this pass.
            Timer::after_millis(CONN_IDLE_HOLD_MS).await;
            continue;
        }
        for step in steps {
            led.set(step.on);
            Timer::after_millis(step.hold_ms).await;
        }
    }
}
