//! GPIO indicator lamps
//!
//! One GPIO line per lamp, driven directly or through a transistor.

use simon_core::traits::{Indicator, IndicatorPanel};
use simon_hal::OutputPin;

/// Two indicator lamps on GPIO
///
/// Both lines share one polarity, active-high (default) or active-low.
pub struct GpioIndicators<A, B> {
    a: A,
    b: B,
    /// If true, lamp ON = pin LOW
    inverted: bool,
    /// Current logical state of A and B
    lit: [bool; 2],
}

impl<A: OutputPin, B: OutputPin> GpioIndicators<A, B> {
    /// Create the lamp pair; both start off
    ///
    /// # Arguments
    /// - `a`, `b`: the GPIO pins of lamp A and lamp B
    /// - `inverted`: if true, a lamp is ON when its pin is LOW
    pub fn new(a: A, b: B, inverted: bool) -> Self {
        let mut lamps = Self {
            a,
            b,
            inverted,
            lit: [false; 2],
        };
        lamps.set_all(false);
        lamps
    }

    pub fn new_active_high(a: A, b: B) -> Self {
        Self::new(a, b, false)
    }

    pub fn new_active_low(a: A, b: B) -> Self {
        Self::new(a, b, true)
    }

    /// Logical state of a lamp
    pub fn is_lit(&self, indicator: Indicator) -> bool {
        self.lit[slot(indicator)]
    }

    /// Give the pins back
    pub fn release(self) -> (A, B) {
        (self.a, self.b)
    }
}

const fn slot(indicator: Indicator) -> usize {
    match indicator {
        Indicator::A => 0,
        Indicator::B => 1,
    }
}

impl<A: OutputPin, B: OutputPin> IndicatorPanel for GpioIndicators<A, B> {
    fn set(&mut self, indicator: Indicator, on: bool) {
        self.lit[slot(indicator)] = on;

        // on != inverted: high for active-high on, low for active-low on
        let level = on != self.inverted;
        match indicator {
            Indicator::A => self.a.set_state(level),
            Indicator::B => self.b.set_state(level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_lamps() {
        let mut lamps = GpioIndicators::new_active_high(MockPin::new(), MockPin::new());

        // Initially off
        assert!(!lamps.is_lit(Indicator::A));
        assert!(!lamps.a.is_set_high());

        lamps.set(Indicator::A, true);
        assert!(lamps.is_lit(Indicator::A));
        assert!(lamps.a.is_set_high());
        assert!(!lamps.b.is_set_high());

        lamps.set(Indicator::A, false);
        assert!(!lamps.a.is_set_high());
    }

    #[test]
    fn test_active_low_lamps() {
        let mut lamps = GpioIndicators::new_active_low(MockPin::new(), MockPin::new());

        // Off means both pins high
        assert!(lamps.a.is_set_high());
        assert!(lamps.b.is_set_high());

        lamps.set(Indicator::B, true);
        assert!(lamps.is_lit(Indicator::B));
        assert!(!lamps.b.is_set_high());
        assert!(lamps.a.is_set_high());
    }

    #[test]
    fn test_set_all() {
        let mut lamps = GpioIndicators::new_active_high(MockPin::new(), MockPin::new());
        lamps.set_all(true);
        assert!(lamps.is_lit(Indicator::A) && lamps.is_lit(Indicator::B));

        let (a, b) = lamps.release();
        assert!(a.is_set_high() && b.is_set_high());
    }
}
