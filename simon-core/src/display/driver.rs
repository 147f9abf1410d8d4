//! Six-slot text and number renderer
//!
//! Slots are numbered 1..=6 from the left. Requests for other slots are
//! dropped without error, and characters the glyph table does not know are
//! drawn with every segment lit so the fault is visible on the glass.

use heapless::String;
use simon_hal::{MemoryBank, SegmentMemory};

use super::glyph::{self, glyph, Glyph};
use super::memory::DisplayMemory;
use super::number::NumberPolicy;
use super::position::{pins_for, SLOT_COUNT};
use super::symbol::{Symbol, SymbolOp};
use crate::timing::Pause;

/// Ticks each page of [`SegmentDisplay::show_multi_words`] is held (about 400 ms)
pub const WORD_HOLD_TICKS: u16 = 40;

/// Renderer owning the display memory
#[derive(Debug)]
pub struct SegmentDisplay<M> {
    memory: DisplayMemory<M>,
    number_policy: NumberPolicy,
}

impl<M: SegmentMemory> SegmentDisplay<M> {
    /// Wrap an initialised memory backend
    pub fn new(backend: M, number_policy: NumberPolicy) -> Self {
        Self {
            memory: DisplayMemory::new(backend),
            number_policy,
        }
    }

    /// Bit-level access to the display memory
    pub fn memory(&self) -> &DisplayMemory<M> {
        &self.memory
    }

    /// Mutable bit-level access to the display memory
    pub fn memory_mut(&mut self) -> &mut DisplayMemory<M> {
        &mut self.memory
    }

    /// Number layout in use
    pub fn number_policy(&self) -> NumberPolicy {
        self.number_policy
    }

    /// Draw a character in a one-based slot
    pub fn show_char(&mut self, c: char, slot: usize) {
        self.show_glyph(glyph(c), slot);
    }

    /// Draw a raw glyph in a one-based slot
    pub fn show_glyph(&mut self, g: Glyph, slot: usize) {
        let Some(pins) = pins_for(slot) else {
            return;
        };
        for (&pin, nibble) in pins.iter().zip(g.nibbles()) {
            self.memory.set_segment_pin(pin, nibble);
        }
    }

    /// Read back the glyph currently drawn in a slot
    pub fn glyph_at(&self, slot: usize) -> Option<Glyph> {
        let pins = pins_for(slot)?;
        let mut nibbles = [0u8; 4];
        for (n, &pin) in nibbles.iter_mut().zip(pins.iter()) {
            *n = self.memory.segment_pin(pin);
        }
        Some(Glyph::from_nibbles(nibbles))
    }

    /// Decode all six slots back to text; undecodable slots read as '?'
    pub fn read_text(&self) -> String<SLOT_COUNT> {
        let mut text = String::new();
        for slot in 1..=SLOT_COUNT {
            let c = self
                .glyph_at(slot)
                .and_then(glyph::decode)
                .unwrap_or('?');
            // Six slots, six characters: cannot overflow
            let _ = text.push(c);
        }
        text
    }

    /// Blank all six slots
    pub fn clear(&mut self) {
        for slot in 1..=SLOT_COUNT {
            self.show_glyph(Glyph::BLANK, slot);
        }
    }

    /// Render a number across all six slots using the configured policy
    pub fn display_number(&mut self, value: u32) {
        let text = self.number_policy.render(value);
        self.show_bytes(&text);
    }

    /// Draw a word of at most six characters, left-aligned
    ///
    /// Slots past the end of the word keep their contents. Longer messages
    /// are not drawn at all.
    pub fn show_text(&mut self, msg: &str) {
        if msg.len() <= SLOT_COUNT {
            self.show_bytes(msg.as_bytes());
        }
    }

    /// Scroll a message in from the right and out to the left
    ///
    /// One frame per offset in `0..len + 6`, each held for `step_ticks`.
    pub fn scroll_text<P: Pause>(&mut self, msg: &str, pause: &mut P, step_ticks: u16) {
        self.clear();
        let bytes = msg.as_bytes();
        for offset in 0..bytes.len() + SLOT_COUNT {
            let frame = marquee_frame(bytes, offset);
            self.show_bytes(&frame);
            pause.pause(step_ticks);
        }
        self.clear();
    }

    /// Show space-separated words one page at a time
    ///
    /// Each word is drawn left-aligned and cut to six characters, held for
    /// `hold_ticks`, then cleared.
    pub fn show_multi_words<P: Pause>(&mut self, msg: &str, pause: &mut P, hold_ticks: u16) {
        self.clear();
        if !msg.is_empty() {
            let body = msg.strip_suffix(' ').unwrap_or(msg);
            for word in body.split(' ') {
                let bytes = word.as_bytes();
                let shown = &bytes[..bytes.len().min(SLOT_COUNT)];
                self.show_bytes(shown);
                pause.pause(hold_ticks);
                self.clear();
            }
        }
        pause.pause(hold_ticks);
        self.clear();
    }

    /// Apply a symbol operation, see [`DisplayMemory::apply_symbol`]
    pub fn show_symbol(&mut self, op: SymbolOp, symbol: Symbol, bank: MemoryBank) -> bool {
        self.memory.apply_symbol(op, symbol, bank)
    }

    fn show_bytes(&mut self, bytes: &[u8]) {
        for (i, &b) in bytes.iter().take(SLOT_COUNT).enumerate() {
            self.show_char(char::from(b), i + 1);
        }
    }
}

/// Characters visible at one marquee offset
///
/// The message is padded with six blanks on both sides; offset 0 is fully
/// blank and the first character enters at slot 6 on offset 1.
pub fn marquee_frame(msg: &[u8], offset: usize) -> [u8; SLOT_COUNT] {
    let mut frame = [b' '; SLOT_COUNT];
    for (k, slot) in frame.iter_mut().enumerate() {
        let pos = offset + k;
        if pos >= SLOT_COUNT && pos < msg.len() + SLOT_COUNT {
            *slot = msg[pos - SLOT_COUNT];
        }
    }
    frame
}
