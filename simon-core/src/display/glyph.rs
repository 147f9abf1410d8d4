//! 14-segment glyph table
//!
//! Each character is a 16-bit mask. The low byte drives the outer segments
//! (a..f plus the two middle bars), the high byte the diagonals and the
//! centre verticals. Bit assignments follow the panel wiring, so these
//! tables must not be "cleaned up".

/// Segment mask for one character position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph(u16);

impl Glyph {
    /// No segments lit
    pub const BLANK: Glyph = Glyph(0x0000);

    /// Every segment lit, used for characters the table does not know
    pub const FALLBACK: Glyph = Glyph(0xFFFF);

    /// Build a glyph from the raw 16-bit mask
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Build a glyph from its two table bytes
    pub const fn from_bytes(lo: u8, hi: u8) -> Self {
        Self((hi as u16) << 8 | lo as u16)
    }

    /// Raw 16-bit mask
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Low table byte
    pub const fn lo(self) -> u8 {
        self.0 as u8
    }

    /// High table byte
    pub const fn hi(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Split into the four nibbles written to a slot's segment pins
    ///
    /// Order: low byte low nibble, low byte high nibble, high byte low
    /// nibble, high byte high nibble.
    pub const fn nibbles(self) -> [u8; 4] {
        let lo = self.lo();
        let hi = self.hi();
        [lo & 0x0F, lo >> 4, hi & 0x0F, hi >> 4]
    }

    /// Reassemble a glyph from the nibbles read back from segment pins
    pub const fn from_nibbles(n: [u8; 4]) -> Self {
        let lo = (n[0] & 0x0F) | (n[1] & 0x0F) << 4;
        let hi = (n[2] & 0x0F) | (n[3] & 0x0F) << 4;
        Self::from_bytes(lo, hi)
    }
}

/// Digits '0'..'9'
pub const DIGITS: [[u8; 2]; 10] = [
    [0xFC, 0x28], // 0
    [0x60, 0x20], // 1
    [0xDB, 0x00], // 2
    [0xF3, 0x00], // 3
    [0x67, 0x00], // 4
    [0xB7, 0x00], // 5
    [0xBF, 0x00], // 6
    [0xE4, 0x00], // 7
    [0xFF, 0x00], // 8
    [0xF7, 0x00], // 9
];

/// Letters 'A'..'Z'
pub const LETTERS: [[u8; 2]; 26] = [
    [0xEF, 0x00], // A
    [0xF1, 0x50], // B
    [0x9C, 0x00], // C
    [0xF0, 0x50], // D
    [0x9F, 0x00], // E
    [0x8F, 0x00], // F
    [0xBD, 0x00], // G
    [0x6F, 0x00], // H
    [0x90, 0x50], // I
    [0x78, 0x00], // J
    [0x0E, 0x22], // K
    [0x1C, 0x00], // L
    [0x6C, 0xA0], // M
    [0x6C, 0x82], // N
    [0xFC, 0x00], // O
    [0xCF, 0x00], // P
    [0xFC, 0x02], // Q
    [0xCF, 0x02], // R
    [0xB7, 0x00], // S (same strokes as 5 on this panel)
    [0x80, 0x50], // T
    [0x7C, 0x00], // U
    [0x0C, 0x28], // V
    [0x6C, 0x0A], // W
    [0x00, 0xAA], // X
    [0x00, 0xB0], // Y
    [0x90, 0x28], // Z
];

/// Look up the glyph for a character
///
/// Priority: space, digits, uppercase letters, fallback. Lowercase letters
/// are not folded; they render as the fallback like any other unknown
/// character.
pub fn glyph(c: char) -> Glyph {
    match c {
        ' ' => Glyph::BLANK,
        '0'..='9' => {
            let [lo, hi] = DIGITS[c as usize - '0' as usize];
            Glyph::from_bytes(lo, hi)
        }
        'A'..='Z' => {
            let [lo, hi] = LETTERS[c as usize - 'A' as usize];
            Glyph::from_bytes(lo, hi)
        }
        _ => Glyph::FALLBACK,
    }
}

/// Reverse lookup, used to read text back out of display memory
///
/// Digits win over letters when a mask is shared ('5' and 'S').
pub fn decode(g: Glyph) -> Option<char> {
    if g == Glyph::BLANK {
        return Some(' ');
    }
    ('0'..='9').chain('A'..='Z').find(|&c| glyph(c) == g)
}
