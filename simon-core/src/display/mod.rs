//! Six-character segment LCD
//!
//! Layered bottom-up: glyph table and slot map (static data), display
//! memory (bit access to the backend), and the driver that renders
//! characters, numbers and text effects.

pub mod driver;
pub mod glyph;
pub mod memory;
pub mod number;
pub mod position;
pub mod symbol;

pub use driver::{SegmentDisplay, WORD_HOLD_TICKS};
pub use glyph::{glyph, Glyph};
pub use memory::{DisplayMemory, SegmentRam, DISPLAY_CELLS};
pub use number::NumberPolicy;
pub use position::SLOT_COUNT;
pub use symbol::{Symbol, SymbolOp};
