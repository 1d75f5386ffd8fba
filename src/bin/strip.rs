//! Strip animator slot.
//!
//! Renders a moving rainbow over the WS2812 strip at 100 fps: each
//! frame is staged into a local buffer and flushed in one SPI transfer.
//! sw1 presses are logged on the side without gating the animation.

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_nrf::{bind_interrupts, peripherals, spim};
use embassy_time::Timer;
use smart_leds::RGB8;

use stat2led::board::buttons::Button;
use stat2led::board::{self, leds::Strip};
use stat2led::config::{FRAME_DELAY_MS, NUM_LEDS};
use stat2led::indicator::strip::StripAnimator;
use stat2led::indicator::{Edge, EdgeDetector};

bind_interrupts!(struct Irqs {
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = board::init();

    let mut config = spim::Config::default();
    // SPIM3 has no 3 MHz setting; 4 MHz keeps the ws2812 0/1 pulse
    // widths inside WS2812B tolerances.
    config.frequency = spim::Frequency::M4;
    let spim = spim::Spim::new_txonly(p.SPI3, Irqs, p.P1_06, p.P1_05, config);
    let mut strip = Strip::new(spim);

    let button = Button::new(p.P0_11.degrade()); // sw1
    let mut presses = EdgeDetector::new(button.is_pressed());

    let mut animator = StripAnimator::new();
    let mut frame = [RGB8::default(); NUM_LEDS];
    info!("strip-animator slot up: {} pixels", NUM_LEDS);

    loop {
        // Non-blocking press check; never gates the animation.
        if let Some(Edge::Pressed) = presses.sample(button.is_pressed()) {
            info!("sw1 pressed");
        }

        animator.render(&mut frame);
        if let Err(e) = strip.flush(&frame) {
            warn!("strip: {}", e);
        }

        Timer::after_millis(FRAME_DELAY_MS).await;
    }
}
