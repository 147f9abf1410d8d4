//! Per-session bookkeeping

use super::pattern::Pattern;

/// State of one game from the start press to the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameSession {
    /// Sequence being played; empty until generated
    pub pattern: Pattern,
    /// Current zero-based round
    pub round: u8,
    /// Rounds completed without a mistake
    pub points: u8,
    /// Set once the session has ended
    pub game_over: bool,
}

impl GameSession {
    pub const fn new() -> Self {
        Self {
            pattern: Pattern::EMPTY,
            round: 0,
            points: 0,
            game_over: false,
        }
    }

    /// Credit a completed round and report whether the cap was reached
    pub fn complete_round(&mut self, round_cap: u8) -> bool {
        self.points = self.points.saturating_add(1);
        if self.points >= round_cap {
            self.game_over = true;
        }
        self.game_over
    }

    /// End the session after a mistake
    pub fn fail(&mut self) {
        self.game_over = true;
    }

    /// True if every round up to the cap was completed
    pub fn is_won(&self, round_cap: u8) -> bool {
        self.points >= round_cap
    }
}
