//! Periodic tick source
//!
//! All game timing is derived from a fixed-period overflow flag (10 ms on
//! the reference board). The game polls the flag and acknowledges it; it
//! never blocks on an interrupt.

/// Nominal tick period in milliseconds
pub const TICK_PERIOD_MS: u32 = 10;

/// Free-running counter with a periodic overflow flag
pub trait TickSource {
    /// Current value of the free-running counter
    ///
    /// Only used as an entropy sample; the value has no unit guarantees.
    fn counter(&mut self) -> u32;

    /// Whether the period elapsed since the last acknowledgement
    fn has_overflowed(&mut self) -> bool;

    /// Clear the overflow flag
    fn acknowledge(&mut self);
}
