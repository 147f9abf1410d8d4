//! Fixed indicator symbols of the panel
//!
//! Besides the six character slots the glass carries single-segment icons
//! (battery bars, radio marks, decimal points, colons). Each one is a single
//! bit in a memory cell.

use simon_hal::{MemoryBank, SegmentMemory};

use super::memory::DisplayMemory;

/// Single-segment icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    Timer,
    Heart,
    Record,
    Exclamation,
    Brackets,
    Battery,
    BatteryBar1,
    BatteryBar2,
    BatteryBar3,
    BatteryBar4,
    BatteryBar5,
    BatteryBar6,
    Antenna,
    Transmit,
    Receive,
    Negative,
    Degree,
    /// Decimal point after slot 1
    DecimalPoint1,
    DecimalPoint2,
    DecimalPoint3,
    DecimalPoint4,
    DecimalPoint5,
    /// Colon after slot 2
    Colon2,
    /// Colon after slot 4
    Colon4,
}

impl Symbol {
    /// One-based memory cell and bit mask of the icon
    pub const fn location(self) -> (usize, u8) {
        use Symbol::*;

        match self {
            Timer => (3, 1 << 3),
            Heart => (3, 1 << 2),
            Record => (3, 1 << 1),
            Exclamation => (3, 1 << 0),
            Brackets => (18, 1 << 4),
            Battery => (14, 1 << 4),
            BatteryBar1 => (18, 1 << 5),
            BatteryBar2 => (14, 1 << 5),
            BatteryBar3 => (18, 1 << 6),
            BatteryBar4 => (14, 1 << 6),
            BatteryBar5 => (18, 1 << 7),
            BatteryBar6 => (14, 1 << 7),
            Antenna => (5, 1 << 2),
            Transmit => (9, 1 << 2),
            Receive => (9, 1 << 0),
            Negative => (11, 1 << 2),
            Degree => (16, 1 << 2),
            DecimalPoint1 => (11, 1 << 0),
            DecimalPoint2 => (7, 1 << 0),
            DecimalPoint3 => (5, 1 << 0),
            DecimalPoint4 => (20, 1 << 0),
            DecimalPoint5 => (16, 1 << 0),
            Colon2 => (7, 1 << 2),
            Colon4 => (20, 1 << 2),
        }
    }
}

/// What to do with a symbol's bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SymbolOp {
    /// Light the symbol
    Update,
    /// Turn the symbol off
    Clear,
    /// Flip the symbol
    Toggle,
    /// Only report the current state
    Get,
}

impl<M: SegmentMemory> DisplayMemory<M> {
    /// Apply `op` to a symbol and report whether it is lit afterwards
    pub fn apply_symbol(&mut self, op: SymbolOp, symbol: Symbol, bank: MemoryBank) -> bool {
        let (index, bit) = symbol.location();
        match op {
            SymbolOp::Update => self.update(bank, index, bit),
            SymbolOp::Clear => self.clear(bank, index, bit),
            SymbolOp::Toggle => self.toggle(bank, index, bit),
            SymbolOp::Get => {}
        }
        self.get(bank, index) & bit != 0
    }
}
