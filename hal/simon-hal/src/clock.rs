//! External oscillator abstraction
//!
//! The tick source is only as accurate as the crystal behind it, so the
//! firmware refuses to run until the oscillator reports stable.

/// External oscillator with a stabilisation flag
pub trait Oscillator {
    /// Enable the oscillator
    fn start(&mut self);

    /// Whether the oscillator has stabilised
    fn is_stable(&mut self) -> bool;
}
