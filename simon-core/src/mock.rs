//! Host-side stand-ins for the hardware traits

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use simon_hal::{MemoryBank, SegmentMemory, TickSource};

use crate::display::{NumberPolicy, SegmentDisplay, SegmentRam, DISPLAY_CELLS};
use crate::timing::Pause;
use crate::traits::{Button, ButtonPanel, Indicator, IndicatorPanel};

/// Tick source that overflows every `every` polls
#[derive(Debug)]
pub struct FakeTick {
    every: u32,
    counters: VecDeque<u32>,
    pub polls: u32,
    pub acknowledged: u32,
}

impl FakeTick {
    /// Overflows on every poll
    pub fn new() -> Self {
        Self::with_overflow_every(1)
    }

    pub fn with_overflow_every(every: u32) -> Self {
        Self {
            every: every.max(1),
            counters: VecDeque::new(),
            polls: 0,
            acknowledged: 0,
        }
    }

    /// Queue counter samples; once drained the counter reads 0xA5A5
    pub fn with_counters(mut self, values: &[u32]) -> Self {
        self.counters.extend(values.iter().copied());
        self
    }
}

impl TickSource for FakeTick {
    fn counter(&mut self) -> u32 {
        self.counters.pop_front().unwrap_or(0xA5A5)
    }

    fn has_overflowed(&mut self) -> bool {
        self.polls += 1;
        self.polls % self.every == 0
    }

    fn acknowledge(&mut self) {
        self.acknowledged += 1;
    }
}

/// Segment RAM shared between an engine and a [`FrameTick`]
#[derive(Debug, Clone, Default)]
pub struct SharedRam(Rc<RefCell<SegmentRam<DISPLAY_CELLS>>>);

impl SegmentMemory for SharedRam {
    fn cell_count(&self) -> usize {
        DISPLAY_CELLS
    }

    fn write_cell(&mut self, bank: MemoryBank, index: usize, value: u8) {
        self.0.borrow_mut().write_cell(bank, index, value);
    }

    fn read_cell(&self, bank: MemoryBank, index: usize) -> u8 {
        self.0.borrow().read_cell(bank, index)
    }
}

/// Tick source that decodes the display on every tick
///
/// Each distinct text seen while the game pauses is kept once, in order,
/// so `frames` is what a player watching the glass would have read.
#[derive(Debug)]
pub struct FrameTick {
    ram: SharedRam,
    pub frames: Vec<String>,
}

impl FrameTick {
    pub fn new(ram: SharedRam) -> Self {
        Self {
            ram,
            frames: Vec::new(),
        }
    }

    /// Index of the first frame equal to `text`
    pub fn position(&self, text: &str) -> Option<usize> {
        self.frames.iter().position(|f| f == text)
    }
}

impl TickSource for FrameTick {
    fn counter(&mut self) -> u32 {
        0xA5A5
    }

    fn has_overflowed(&mut self) -> bool {
        true
    }

    fn acknowledge(&mut self) {
        let view = SegmentDisplay::new(self.ram.clone(), NumberPolicy::default());
        let text = view.read_text();
        if self.frames.last().map(String::as_str) != Some(text.as_str()) {
            self.frames.push(text.as_str().into());
        }
    }
}

/// Pause that only records what it was asked for
#[derive(Debug, Default)]
pub struct CountingPause {
    pub calls: Vec<u16>,
}

impl Pause for CountingPause {
    fn pause(&mut self, ticks: u16) {
        self.calls.push(ticks);
    }
}

/// Which buttons a script entry holds down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Held {
    Nothing,
    Only(Button),
    Both,
}

impl Held {
    fn contains(self, button: Button) -> bool {
        match self {
            Held::Nothing => false,
            Held::Only(b) => b == button,
            Held::Both => true,
        }
    }
}

/// Button panel replaying a script of (held, reads) entries
///
/// Every `is_pressed` call consumes one read of the front entry, whichever
/// button is asked about. Running off the end of the script panics so a
/// test cannot spin forever.
#[derive(Debug, Default)]
pub struct ScriptedButtons {
    script: VecDeque<(Held, usize)>,
    pub reads: usize,
}

impl ScriptedButtons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `held` for the next `reads` reads
    pub fn then(mut self, held: Held, reads: usize) -> Self {
        self.script.push_back((held, reads));
        self
    }

    /// A short press of one button followed by a release
    ///
    /// Three reads pressed cover the detecting read and two polls of the
    /// release wait; two idle reads follow.
    pub fn tap(self, button: Button) -> Self {
        self.then(Held::Only(button), 3).then(Held::Nothing, 2)
    }

    /// Entries not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.iter().filter(|(_, n)| *n > 0).count()
    }
}

impl ButtonPanel for ScriptedButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.reads += 1;
        loop {
            let Some((held, left)) = self.script.front_mut() else {
                panic!("button script exhausted after {} reads", self.reads);
            };
            if *left == 0 {
                self.script.pop_front();
                continue;
            }
            *left -= 1;
            return held.contains(button);
        }
    }
}

/// Indicator panel that records every write
#[derive(Debug, Default)]
pub struct RecordingIndicators {
    pub writes: Vec<(Indicator, bool)>,
}

impl RecordingIndicators {
    /// Current level of a lamp
    pub fn is_lit(&self, indicator: Indicator) -> bool {
        self.writes
            .iter()
            .rev()
            .find(|(i, _)| *i == indicator)
            .map(|(_, on)| *on)
            .unwrap_or(false)
    }

    /// Writes with consecutive duplicates collapsed
    pub fn edges(&self) -> Vec<(Indicator, bool)> {
        let mut out: Vec<(Indicator, bool)> = Vec::new();
        for &w in &self.writes {
            if out.last() != Some(&w) {
                out.push(w);
            }
        }
        out
    }
}

impl IndicatorPanel for RecordingIndicators {
    fn set(&mut self, indicator: Indicator, on: bool) {
        self.writes.push((indicator, on));
    }
}
