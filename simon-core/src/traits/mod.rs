//! Hardware abstraction traits
//!
//! These traits define the interface between the game engine and the
//! board's buttons and indicator lamps.

pub mod button;
pub mod indicator;

pub use button::{Button, ButtonPanel};
pub use indicator::{Indicator, IndicatorPanel};
