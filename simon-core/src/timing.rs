//! Tick-driven delays
//!
//! Every pause in the game is a count of tick overflows. The primitive is
//! [`countdown`], which consumes at most one overflow per call; [`TickDelay`]
//! spins on it until the count reaches zero.

use simon_hal::TickSource;

/// Consume one pending overflow, if any, and return the remaining count
///
/// The count saturates at zero; "time has elapsed" means the result is 0.
pub fn countdown<T: TickSource>(tick: &mut T, remaining: u16) -> u16 {
    if tick.has_overflowed() {
        tick.acknowledge();
        remaining.saturating_sub(1)
    } else {
        remaining
    }
}

/// Something that can hold the control flow for a number of ticks
pub trait Pause {
    /// Block for `ticks` tick periods
    fn pause(&mut self, ticks: u16);
}

/// Busy-wait delay over a tick source
#[derive(Debug)]
pub struct TickDelay<T> {
    tick: T,
}

impl<T: TickSource> TickDelay<T> {
    /// Take ownership of the tick source
    pub fn new(tick: T) -> Self {
        Self { tick }
    }

    /// Sample the free-running counter
    pub fn sample_counter(&mut self) -> u32 {
        self.tick.counter()
    }

    /// Borrow the tick source
    pub fn tick(&self) -> &T {
        &self.tick
    }

    /// Mutably borrow the tick source
    pub fn tick_mut(&mut self) -> &mut T {
        &mut self.tick
    }
}

impl<T: TickSource> Pause for TickDelay<T> {
    fn pause(&mut self, ticks: u16) {
        let mut remaining = ticks;
        while remaining > 0 {
            remaining = countdown(&mut self.tick, remaining);
        }
    }
}
