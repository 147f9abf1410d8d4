//! GPIO push buttons

use simon_core::traits::{Button, ButtonPanel};
use simon_hal::InputPin;

/// Two push buttons on GPIO
///
/// The usual wiring is a switch to ground with a pull-up, so a press reads
/// low. No debouncing is done here.
pub struct GpioButtons<A, B> {
    a: A,
    b: B,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<A: InputPin, B: InputPin> GpioButtons<A, B> {
    pub fn new(a: A, b: B, active_low: bool) -> Self {
        Self { a, b, active_low }
    }

    /// Switches to ground with pull-ups
    pub fn new_active_low(a: A, b: B) -> Self {
        Self::new(a, b, true)
    }

    pub fn new_active_high(a: A, b: B) -> Self {
        Self::new(a, b, false)
    }
}

impl<A: InputPin, B: InputPin> ButtonPanel for GpioButtons<A, B> {
    fn is_pressed(&mut self, button: Button) -> bool {
        let high = match button {
            Button::A => self.a.is_high(),
            Button::B => self.b.is_high(),
        };
        high != self.active_low
    }
}
