//! Target sequence of a session
//!
//! Bit `i` is the expected answer for step `i`: 0 for button A, 1 for B.
//! The value 0 means "not generated yet", so an all-A sequence is never
//! played.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::config::SeedExpansion;

/// Bitfield of up to 64 steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pattern(u64);

impl Pattern {
    /// The "not generated" sentinel
    pub const EMPTY: Pattern = Pattern(0);

    /// Wrap raw bits
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Derive a pattern from a sampled tick counter
    pub fn from_seed(seed: u32, expansion: SeedExpansion) -> Self {
        match expansion {
            SeedExpansion::Raw => Self(u64::from(seed)),
            SeedExpansion::SmallRng => Self(SmallRng::seed_from_u64(u64::from(seed)).next_u64()),
        }
    }

    /// Raw bits
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// True while no pattern has been generated
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Expected answer for a step; `false` is A, `true` is B
    ///
    /// Steps past bit 63 read as A.
    pub const fn bit(self, step: u8) -> bool {
        step < 64 && (self.0 >> step) & 1 == 1
    }
}
