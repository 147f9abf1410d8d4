//! Player input buttons

/// The two player buttons
///
/// `A` is also the start button; holding both acknowledges game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
}

impl Button {
    /// Pattern bit this button answers
    pub const fn bit(self) -> bool {
        matches!(self, Button::B)
    }
}

/// Trait for reading the button pair
///
/// Implementations report the debounced-or-not level as it is right now;
/// the engine only relies on a press staying visible until release.
pub trait ButtonPanel {
    /// Check whether a button is currently held down
    ///
    /// Takes `&mut self` because GPIO reads may require mutable access.
    fn is_pressed(&mut self, button: Button) -> bool;

    /// Check whether both buttons are held at the same time
    fn both_pressed(&mut self) -> bool {
        self.is_pressed(Button::A) && self.is_pressed(Button::B)
    }
}
