//! Segment LCD memory abstraction
//!
//! The display peripheral exposes two byte arrays: the main segment memory
//! and a blinking memory of identical shape. Indices are one-based, matching
//! the LCDM1..LCDMn register naming of segment controllers.
//!
//! Peripheral bring-up (bias, charge pump, multiplex mode) is the
//! implementation's concern and must be done before the first write.

/// Which of the two memory arrays an access targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MemoryBank {
    /// Segments currently displayed
    Main,
    /// Segments that blink when blinking is enabled
    Blinking,
}

/// Byte-addressed segment memory
pub trait SegmentMemory {
    /// Number of cells in each bank
    fn cell_count(&self) -> usize;

    /// Write a cell (one-based index)
    ///
    /// Out-of-range indices must be ignored.
    fn write_cell(&mut self, bank: MemoryBank, index: usize, value: u8);

    /// Read a cell (one-based index)
    ///
    /// Out-of-range indices read as zero.
    fn read_cell(&self, bank: MemoryBank, index: usize) -> u8;
}
