//! Button indicator slot.
//!
//! LED1 toggles every poll, modulated by two momentary overrides: sw1
//! holds it on, sw3 holds it off (sw3 wins if both are held). sw2 is
//! watched purely for edge reporting - one log line per press and one
//! per release, nothing while held. Polls at 2 Hz; transitions between
//! polls are missed by design.

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_time::Timer;

use stat2led::board::buttons::Buttons;
use stat2led::board::{self, leds::Led};
use stat2led::config::BUTTON_POLL_MS;
use stat2led::indicator::button::ButtonIndicator;
use stat2led::indicator::Edge;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = board::init();

    let mut led = Led::new(p.P0_13.degrade()); // LED1
    let buttons = Buttons::new(p.P0_11.degrade(), p.P0_12.degrade(), p.P0_24.degrade());

    // The sw2 baseline is sampled before the loop, so a button held at
    // boot does not count as a press.
    let mut indicator = ButtonIndicator::new(true, buttons.sw2_pressed());
    info!("button-indicator slot up");

    loop {
        let on = indicator.update_led(buttons.sw1_pressed(), buttons.sw3_pressed());
        led.set(on);

        if let Some(edge) = indicator.sw2_edge(buttons.sw2_pressed()) {
            match edge {
                Edge::Pressed => info!("sw2 pressed"),
                Edge::Released => info!("sw2 released"),
            }
        }

        Timer::after_millis(BUTTON_POLL_MS).await;
    }
}
