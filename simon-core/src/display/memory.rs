//! Display memory access
//!
//! [`DisplayMemory`] wraps a [`SegmentMemory`] backend with the bit-level
//! operations the driver and symbol code need. [`SegmentRam`] is a plain
//! RAM backend, used directly on the host and as the shadow copy behind
//! bus-attached controllers.

use simon_hal::{MemoryBank, SegmentMemory};

/// Cells needed for segment pins 0..=39 at 4-mux (two pins per cell)
pub const DISPLAY_CELLS: usize = 20;

/// RAM-backed segment memory with main and blinking banks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRam<const N: usize> {
    main: [u8; N],
    blinking: [u8; N],
}

impl<const N: usize> Default for SegmentRam<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SegmentRam<N> {
    /// Create a cleared memory
    pub const fn new() -> Self {
        Self {
            main: [0; N],
            blinking: [0; N],
        }
    }

    /// Raw view of one bank
    pub fn bank(&self, bank: MemoryBank) -> &[u8; N] {
        match bank {
            MemoryBank::Main => &self.main,
            MemoryBank::Blinking => &self.blinking,
        }
    }
}

impl<const N: usize> SegmentMemory for SegmentRam<N> {
    fn cell_count(&self) -> usize {
        N
    }

    fn write_cell(&mut self, bank: MemoryBank, index: usize, value: u8) {
        let cells = match bank {
            MemoryBank::Main => &mut self.main,
            MemoryBank::Blinking => &mut self.blinking,
        };
        if let Some(cell) = index.checked_sub(1).and_then(|i| cells.get_mut(i)) {
            *cell = value;
        }
    }

    fn read_cell(&self, bank: MemoryBank, index: usize) -> u8 {
        index
            .checked_sub(1)
            .and_then(|i| self.bank(bank).get(i))
            .copied()
            .unwrap_or(0)
    }
}

/// Cell that holds a segment pin's nibble, and whether it is the high nibble
const fn pin_location(pin: u8) -> (usize, bool) {
    (pin as usize / 2 + 1, pin & 1 == 1)
}

/// Bit operations over a segment memory backend
///
/// All indices are one-based, like the controller's LCDMx registers.
#[derive(Debug)]
pub struct DisplayMemory<M> {
    backend: M,
}

impl<M: SegmentMemory> DisplayMemory<M> {
    /// Take ownership of an initialised backend
    pub fn new(backend: M) -> Self {
        Self { backend }
    }

    /// Borrow the backend
    pub fn backend(&self) -> &M {
        &self.backend
    }

    /// Mutably borrow the backend
    pub fn backend_mut(&mut self) -> &mut M {
        &mut self.backend
    }

    /// Give the backend back
    pub fn into_inner(self) -> M {
        self.backend
    }

    /// Overwrite a cell
    pub fn set(&mut self, bank: MemoryBank, index: usize, mask: u8) {
        self.backend.write_cell(bank, index, mask);
    }

    /// OR bits into a cell
    pub fn update(&mut self, bank: MemoryBank, index: usize, mask: u8) {
        let value = self.backend.read_cell(bank, index) | mask;
        self.backend.write_cell(bank, index, value);
    }

    /// Clear bits in a cell
    pub fn clear(&mut self, bank: MemoryBank, index: usize, mask: u8) {
        let value = self.backend.read_cell(bank, index) & !mask;
        self.backend.write_cell(bank, index, value);
    }

    /// Flip bits in a cell
    pub fn toggle(&mut self, bank: MemoryBank, index: usize, mask: u8) {
        let value = self.backend.read_cell(bank, index) ^ mask;
        self.backend.write_cell(bank, index, value);
    }

    /// Read a cell
    pub fn get(&self, bank: MemoryBank, index: usize) -> u8 {
        self.backend.read_cell(bank, index)
    }

    /// Write the low nibble of `value` to a segment pin of the main bank
    ///
    /// Only that pin's nibble changes; its neighbour in the same cell is
    /// preserved.
    pub fn set_segment_pin(&mut self, pin: u8, value: u8) {
        let (index, high) = pin_location(pin);
        let cell = self.backend.read_cell(MemoryBank::Main, index);
        let cell = if high {
            (cell & 0x0F) | (value & 0x0F) << 4
        } else {
            (cell & 0xF0) | (value & 0x0F)
        };
        self.backend.write_cell(MemoryBank::Main, index, cell);
    }

    /// Read a segment pin's nibble from the main bank
    pub fn segment_pin(&self, pin: u8) -> u8 {
        let (index, high) = pin_location(pin);
        let cell = self.backend.read_cell(MemoryBank::Main, index);
        if high {
            cell >> 4
        } else {
            cell & 0x0F
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory() -> DisplayMemory<SegmentRam<DISPLAY_CELLS>> {
        DisplayMemory::new(SegmentRam::new())
    }

    #[test]
    fn test_cell_operations() {
        let mut mem = memory();
        mem.set(MemoryBank::Main, 3, 0b1010_0000);
        mem.update(MemoryBank::Main, 3, 0b0000_0101);
        assert_eq!(mem.get(MemoryBank::Main, 3), 0b1010_0101);

        mem.clear(MemoryBank::Main, 3, 0b1000_0001);
        assert_eq!(mem.get(MemoryBank::Main, 3), 0b0010_0100);

        mem.toggle(MemoryBank::Main, 3, 0b1111_0000);
        assert_eq!(mem.get(MemoryBank::Main, 3), 0b1101_0100);
    }

    #[test]
    fn test_banks_are_independent() {
        let mut mem = memory();
        mem.set(MemoryBank::Blinking, 5, 0xAA);
        assert_eq!(mem.get(MemoryBank::Main, 5), 0);
        assert_eq!(mem.get(MemoryBank::Blinking, 5), 0xAA);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut mem = memory();
        mem.set(MemoryBank::Main, 0, 0xFF);
        mem.set(MemoryBank::Main, DISPLAY_CELLS + 1, 0xFF);
        assert_eq!(mem.get(MemoryBank::Main, 0), 0);
        assert_eq!(mem.get(MemoryBank::Main, DISPLAY_CELLS + 1), 0);
        assert!(mem.backend().bank(MemoryBank::Main).iter().all(|&b| b == 0));
    }

    #[test]
    fn test_segment_pin_nibbles() {
        let mut mem = memory();
        // Pins 18 and 19 share cell 10
        mem.set_segment_pin(18, 0xF3);
        mem.set_segment_pin(19, 0x0C);
        assert_eq!(mem.get(MemoryBank::Main, 10), 0xC3);
        assert_eq!(mem.segment_pin(18), 0x3);
        assert_eq!(mem.segment_pin(19), 0xC);

        // Rewriting one pin leaves the other alone
        mem.set_segment_pin(18, 0x0);
        assert_eq!(mem.get(MemoryBank::Main, 10), 0xC0);
    }

    #[test]
    fn test_highest_pin_fits() {
        let mut mem = memory();
        mem.set_segment_pin(39, 0x9);
        assert_eq!(mem.get(MemoryBank::Main, DISPLAY_CELLS), 0x90);
    }
}
