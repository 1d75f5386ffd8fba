//! Connectivity indicator - maps the radio state to a blink pattern.
//!
//! The pattern is data: a slice of (level, hold) steps the loop walks
//! once per outer iteration, re-reading the state at the top. There is
//! no stored previous state - the pattern restarts fresh every pass, so
//! a state change is picked up with latency bounded by the current
//! pattern's total hold (worst case 1000 ms while advertising).

use crate::config::{CONN_ADV_HOLD_MS, CONN_CONNECTED_HOLD_MS, CONN_OFF_HOLD_MS};
use crate::indicator::ConnState;

/// One step of a blink pattern: the LED level and how long to hold it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkStep {
    pub on: bool,
    pub hold_ms: u64,
}

const OFF_PATTERN: &[BlinkStep] = &[BlinkStep {
    on: false,
    hold_ms: CONN_OFF_HOLD_MS,
}];

const ADVERTISING_PATTERN: &[BlinkStep] = &[
    BlinkStep {
        on: true,
        hold_ms: CONN_ADV_HOLD_MS,
    },
    BlinkStep {
        on: false,
        hold_ms: CONN_ADV_HOLD_MS,
    },
];

const CONNECTED_PATTERN: &[BlinkStep] = &[BlinkStep {
    on: true,
    hold_ms: CONN_CONNECTED_HOLD_MS,
}];

/// Pattern for one outer-loop pass. An undecodable state yields an empty
/// pattern: no LED write that iteration.
pub fn blink_pattern(state: Option<ConnState>) -> &'static [BlinkStep] {
    match state {
        Some(ConnState::Off) => OFF_PATTERN,
        Some(ConnState::Advertising) => ADVERTISING_PATTERN,
        Some(ConnState::Connected) => CONNECTED_PATTERN,
        None => &[],
    }
}
