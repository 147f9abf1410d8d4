//! Indicator lamps next to the buttons

use super::button::Button;

/// The two indicator lamps, one per button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    A,
    B,
}

impl Indicator {
    /// Lamp for a pattern bit (false = A, true = B)
    pub const fn for_bit(bit: bool) -> Self {
        if bit {
            Indicator::B
        } else {
            Indicator::A
        }
    }
}

impl From<Button> for Indicator {
    fn from(button: Button) -> Self {
        match button {
            Button::A => Indicator::A,
            Button::B => Indicator::B,
        }
    }
}

/// Trait for driving the indicator pair
pub trait IndicatorPanel {
    /// Turn one lamp on or off
    fn set(&mut self, indicator: Indicator, on: bool);

    /// Drive both lamps to the same level
    fn set_all(&mut self, on: bool) {
        self.set(Indicator::A, on);
        self.set(Indicator::B, on);
    }
}
