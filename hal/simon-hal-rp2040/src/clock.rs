//! Crystal oscillator status
//!
//! `embassy_rp::init` brings up XOSC as part of the clock tree, so there is
//! nothing to start here; the monitor only reports the hardware stable bit.

use embassy_rp::pac;
use simon_hal::Oscillator;

pub struct XoscMonitor {
    _private: (),
}

impl XoscMonitor {
    /// Create the monitor; call after `embassy_rp::init`
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for XoscMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Oscillator for XoscMonitor {
    fn start(&mut self) {}

    fn is_stable(&mut self) -> bool {
        pac::XOSC.status().read().stable()
    }
}
