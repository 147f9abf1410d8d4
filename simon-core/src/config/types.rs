//! Configuration type definitions

use crate::display::NumberPolicy;

/// Highest round cap a `u64` pattern can hold
pub const MAX_ROUND_CAP: u8 = 64;

/// Highest round cap a raw 32-bit counter sample can fill
pub const RAW_SEED_ROUNDS: u8 = 32;

/// How the sampled tick counter becomes a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SeedExpansion {
    /// Use the counter value directly; only its low 32 bits can vary
    #[default]
    Raw,
    /// Seed a small PRNG with the counter and take 64 bits from it
    SmallRng,
}

/// Pause lengths, in tick periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timings {
    /// One marquee frame
    pub scroll_step: u16,
    /// "WATCH" shown before each playback step
    pub watch_lead: u16,
    /// Lamp on-time for each playback step
    pub indicator_hold: u16,
    /// Re-poll interval while a button is held
    pub press_ack: u16,
    /// Each pause of the level announcement
    pub level_pause: u16,
}

impl Timings {
    pub const DEFAULT: Timings = Timings {
        scroll_step: 20,
        watch_lead: 25,
        indicator_hold: 25,
        press_ack: 3,
        level_pause: 30,
    };

    fn all(&self) -> [u16; 5] {
        [
            self.scroll_step,
            self.watch_lead,
            self.indicator_hold,
            self.press_ack,
            self.level_pause,
        ]
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    /// Rounds in a full game; completing them all wins
    pub round_cap: u8,
    /// How scores and levels are rendered
    pub number_policy: NumberPolicy,
    /// How the pattern seed is derived
    pub seed_expansion: SeedExpansion,
    /// Pause lengths
    pub timings: Timings,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Round cap of zero
    NoRounds,
    /// Round cap above [`MAX_ROUND_CAP`]
    TooManyRounds(u8),
    /// A pause of zero ticks
    ZeroTiming,
    /// Raw seed too narrow for the round cap; later rounds would all expect A
    SeedTooNarrow { round_cap: u8 },
}

impl GameConfig {
    /// Sixteen rounds, modulo-wrap numbers, raw counter seed
    pub const fn classic() -> Self {
        Self {
            round_cap: 16,
            number_policy: NumberPolicy::ModuloWrap,
            seed_expansion: SeedExpansion::Raw,
            timings: Timings::DEFAULT,
        }
    }

    /// Fifty rounds, fixed-division numbers, PRNG-expanded seed
    pub const fn marathon() -> Self {
        Self {
            round_cap: 50,
            number_policy: NumberPolicy::FixedDivision,
            seed_expansion: SeedExpansion::SmallRng,
            timings: Timings::DEFAULT,
        }
    }

    /// Check the configuration can be played
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_cap == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.round_cap > MAX_ROUND_CAP {
            return Err(ConfigError::TooManyRounds(self.round_cap));
        }
        if self.seed_expansion == SeedExpansion::Raw && self.round_cap > RAW_SEED_ROUNDS {
            return Err(ConfigError::SeedTooNarrow {
                round_cap: self.round_cap,
            });
        }
        if self.timings.all().contains(&0) {
            return Err(ConfigError::ZeroTiming);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
