//! Character slot to segment pin mapping
//!
//! Each of the six character positions is wired to four segment pins. A pin
//! carries one nibble (four COM lines), so one glyph fans out over four pins.

/// Number of character slots on the panel
pub const SLOT_COUNT: usize = 6;

/// Segment pins for slots 1..=6, in nibble order (see [`super::Glyph::nibbles`])
pub const SLOT_PINS: [[u8; 4]; SLOT_COUNT] = [
    [18, 19, 20, 21],
    [10, 11, 12, 13],
    [6, 7, 8, 9],
    [36, 37, 38, 39],
    [28, 29, 30, 31],
    [14, 15, 16, 17],
];

/// Segment pins for a one-based slot, or `None` outside 1..=6
pub fn pins_for(slot: usize) -> Option<&'static [u8; 4]> {
    slot.checked_sub(1).and_then(|i| SLOT_PINS.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_bounds() {
        assert!(pins_for(0).is_none());
        assert!(pins_for(7).is_none());
        assert_eq!(pins_for(1), Some(&[18, 19, 20, 21]));
        assert_eq!(pins_for(6), Some(&[14, 15, 16, 17]));
    }

    #[test]
    fn test_pins_unique() {
        let mut seen = [false; 40];
        for pins in SLOT_PINS.iter() {
            for &p in pins {
                assert!(!seen[p as usize], "pin {p} mapped twice");
                seen[p as usize] = true;
            }
        }
    }
}
