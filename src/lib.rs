//! Host-testable library interface for stat2led.
//!
//! This crate root exposes the pure indicator logic (state machines,
//! color math, identity) that can be tested on the host - no embedded
//! hardware required. Usage: `cargo test`
//!
//! The slot binaries under `src/bin/` build with `--features embedded`
//! for the nRF52840 and drive this logic against real GPIO, the
//! SoftDevice, and the WS2812 strip.

#![cfg_attr(not(test), no_std)]

pub mod color;
pub mod config;
pub mod ident;
pub mod indicator;

#[cfg(feature = "embedded")]
pub mod ble;
#[cfg(feature = "embedded")]
pub mod board;
#[cfg(feature = "embedded")]
pub mod error;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::color::color_wheel;
    use super::config::{BRIGHTNESS_DIVISOR, FRAME_OFFSET_STEP, NUM_LEDS, PIXEL_WHEEL_STEP};
    use super::ident::{device_name, short_id};
    use super::indicator::button::ButtonIndicator;
    use super::indicator::connectivity::blink_pattern;
    use super::indicator::strip::StripAnimator;
    use super::indicator::{ConnState, Edge, EdgeDetector};
    use smart_leds::RGB8;

    // ════════════════════════════════════════════════════════════════════════
    // Color Wheel Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn wheel_band_endpoints() {
        assert_eq!(color_wheel(0, 1), RGB8::new(255, 0, 0));
        assert_eq!(color_wheel(84, 1), RGB8::new(3, 0, 252));
        assert_eq!(color_wheel(85, 1), RGB8::new(0, 0, 255));
        assert_eq!(color_wheel(169, 1), RGB8::new(0, 252, 3));
        assert_eq!(color_wheel(170, 1), RGB8::new(0, 255, 0));
        assert_eq!(color_wheel(254, 1), RGB8::new(252, 3, 0));
    }

    #[test]
    fn wheel_band_interior_slopes() {
        // One unit of position moves a channel by 3.
        assert_eq!(color_wheel(10, 1), RGB8::new(225, 0, 30));
        assert_eq!(color_wheel(100, 1), RGB8::new(0, 45, 210));
        assert_eq!(color_wheel(200, 1), RGB8::new(90, 165, 0));
    }

    #[test]
    fn wheel_continuous_at_band_boundaries() {
        // Adjacent positions never move a channel by more than the slope,
        // including across the 85/170 breakpoints and the 255 wrap.
        for pos in 0..=255u32 {
            let a = color_wheel(pos, 1);
            let b = color_wheel(pos + 1, 1);
            for (x, y) in [(a.r, b.r), (a.g, b.g), (a.b, b.b)] {
                assert!(x.abs_diff(y) <= 3, "jump at pos {}", pos);
            }
        }
    }

    #[test]
    fn wheel_is_periodic() {
        for pos in [0u32, 1, 84, 85, 127, 200, 254] {
            for k in 1..=4u32 {
                assert_eq!(color_wheel(pos, 1), color_wheel(pos + 255 * k, 1));
            }
        }
    }

    #[test]
    fn wheel_brightness_divisor_bounds_channels() {
        for pos in 0..255u32 {
            let c = color_wheel(pos, 8);
            assert!(c.r <= 255 / 8);
            assert!(c.g <= 255 / 8);
            assert!(c.b <= 255 / 8);
        }
    }

    #[test]
    fn wheel_divisor_scales_each_channel() {
        for pos in [5u32, 90, 180] {
            let full = color_wheel(pos, 1);
            let dim = color_wheel(pos, 4);
            assert_eq!(dim.r, full.r / 4);
            assert_eq!(dim.g, full.g / 4);
            assert_eq!(dim.b, full.b / 4);
        }
    }

    #[test]
    fn wheel_exactly_one_channel_dark_per_band() {
        assert_eq!(color_wheel(40, 1).g, 0);
        assert_eq!(color_wheel(120, 1).r, 0);
        assert_eq!(color_wheel(210, 1).b, 0);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Connectivity Indicator Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn conn_state_decodes_known_words() {
        assert_eq!(ConnState::from_raw(0), Some(ConnState::Off));
        assert_eq!(ConnState::from_raw(1), Some(ConnState::Advertising));
        assert_eq!(ConnState::from_raw(2), Some(ConnState::Connected));
    }

    #[test]
    fn conn_state_rejects_unknown_words() {
        assert_eq!(ConnState::from_raw(3), None);
        assert_eq!(ConnState::from_raw(0xFF), None);
    }

    #[test]
    fn blink_pattern_off_holds_dark() {
        let steps = blink_pattern(Some(ConnState::Off));
        assert_eq!(steps.len(), 1);
        assert!(!steps[0].on);
        assert_eq!(steps[0].hold_ms, 100);
    }

    #[test]
    fn blink_pattern_advertising_is_a_full_cycle() {
        let steps = blink_pattern(Some(ConnState::Advertising));
        assert_eq!(steps.len(), 2);
        assert!(steps[0].on);
        assert_eq!(steps[0].hold_ms, 500);
        assert!(!steps[1].on);
        assert_eq!(steps[1].hold_ms, 500);
    }

    #[test]
    fn blink_pattern_connected_holds_lit() {
        let steps = blink_pattern(Some(ConnState::Connected));
        assert_eq!(steps.len(), 1);
        assert!(steps[0].on);
        assert_eq!(steps[0].hold_ms, 100);
    }

    #[test]
    fn blink_pattern_unknown_state_is_a_no_op() {
        assert!(blink_pattern(None).is_empty());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Button Indicator Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn led_alternates_with_no_buttons() {
        let mut ind = ButtonIndicator::new(false, false);
        let levels: Vec<bool> = (0..6).map(|_| ind.update_led(false, false)).collect();
        assert_eq!(levels, [true, false, true, false, true, false]);
    }

    #[test]
    fn sw1_forces_on_regardless_of_phase() {
        let mut ind = ButtonIndicator::new(false, false);
        assert!(ind.update_led(false, false)); // toggled to true
        assert!(ind.update_led(true, false)); // would toggle off, sw1 wins
        assert!(ind.update_led(true, false));
        // Release: alternation resumes from the forced level.
        assert!(!ind.update_led(false, false));
    }

    #[test]
    fn sw3_forces_off_regardless_of_phase() {
        let mut ind = ButtonIndicator::new(true, false);
        assert!(!ind.update_led(false, true));
        assert!(!ind.update_led(false, true));
        assert!(ind.update_led(false, false));
    }

    #[test]
    fn sw3_wins_when_both_overrides_held() {
        let mut ind = ButtonIndicator::new(false, false);
        for _ in 0..4 {
            assert!(!ind.update_led(true, true));
        }
    }

    #[test]
    fn sw2_edge_fires_once_per_transition() {
        let mut ind = ButtonIndicator::new(false, false);
        assert_eq!(ind.sw2_edge(false), None);
        assert_eq!(ind.sw2_edge(true), Some(Edge::Pressed));
        assert_eq!(ind.sw2_edge(true), None); // held: no repeat
        assert_eq!(ind.sw2_edge(true), None);
        assert_eq!(ind.sw2_edge(false), Some(Edge::Released));
        assert_eq!(ind.sw2_edge(false), None);
    }

    #[test]
    fn sw2_held_at_boot_is_not_an_edge() {
        let mut ind = ButtonIndicator::new(false, true);
        assert_eq!(ind.sw2_edge(true), None);
        assert_eq!(ind.sw2_edge(false), Some(Edge::Released));
    }

    #[test]
    fn edge_detector_both_polarities() {
        let mut edges = EdgeDetector::new(false);
        assert_eq!(edges.sample(true), Some(Edge::Pressed));
        assert_eq!(edges.sample(false), Some(Edge::Released));

        let mut edges = EdgeDetector::new(true);
        assert_eq!(edges.sample(true), None);
        assert_eq!(edges.sample(false), Some(Edge::Released));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Strip Animator Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn first_frame_matches_wheel_at_zero_offset() {
        let mut animator = StripAnimator::new();
        let mut frame = [RGB8::default(); 16];
        animator.render(&mut frame);
        assert_eq!(frame[0], color_wheel(0, BRIGHTNESS_DIVISOR));
        for (i, px) in frame.iter().enumerate() {
            assert_eq!(*px, color_wheel(i as u32 * PIXEL_WHEEL_STEP, BRIGHTNESS_DIVISOR));
        }
    }

    #[test]
    fn phase_advances_per_frame() {
        let mut animator = StripAnimator::new();
        let mut frame = [RGB8::default(); 8];
        let rendered = 5;
        for _ in 0..rendered {
            animator.render(&mut frame);
        }
        // The last render used offset = (rendered - 1) * step.
        let offset = (rendered - 1) * FRAME_OFFSET_STEP;
        for (i, px) in frame.iter().enumerate() {
            assert_eq!(
                *px,
                color_wheel(i as u32 * PIXEL_WHEEL_STEP + offset, BRIGHTNESS_DIVISOR)
            );
        }
    }

    #[test]
    fn pattern_repeats_after_a_full_wheel_cycle() {
        // 255 frames advance the phase by 2*255, a whole number of wheel
        // cycles, so frame 256 equals frame 1.
        let mut animator = StripAnimator::new();
        let mut first = [RGB8::default(); 8];
        animator.render(&mut first);

        let mut frame = [RGB8::default(); 8];
        for _ in 0..254 {
            animator.render(&mut frame);
        }
        animator.render(&mut frame);
        assert_eq!(frame, first);
    }

    #[test]
    fn full_strip_frame_is_covered() {
        let mut animator = StripAnimator::new();
        let mut frame = [RGB8::default(); NUM_LEDS];
        animator.render(&mut frame);
        // Every pixel got a wheel color; with divisor 8 nothing exceeds 31.
        for px in frame.iter() {
            assert!(px.r <= 31 && px.g <= 31 && px.b <= 31);
            assert!(px.r > 0 || px.g > 0 || px.b > 0);
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Device Identity Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn short_id_is_deterministic() {
        let id = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];
        assert_eq!(short_id(&id), short_id(&id));
    }

    #[test]
    fn short_id_separates_neighboring_ids() {
        let base = [0u8; 8];
        let mut other = base;
        other[7] = 1;
        assert_ne!(short_id(&base), short_id(&other));
    }

    #[test]
    fn device_name_format() {
        let name = device_name(0x3F0A);
        assert_eq!(name.as_str(), "stat2led_3F0A");
        let name = device_name(0x000B);
        assert_eq!(name.as_str(), "stat2led_000B");
    }
}
