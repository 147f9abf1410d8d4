//! State machine definition
//!
//! Everything the game shows or reads is a function of the current state.
//! Rounds are zero-based; round `r` replays `r + 1` steps.

use super::events::Event;

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Lamps on, start prompt scrolling
    #[default]
    AwaitStart,
    /// Waiting for the start press to sample a pattern
    Generating,
    /// Showing the sequence up to `round`
    PlaySequence { round: u8 },
    /// Reading the player's reproduction of `round + 1` steps
    AwaitInput { round: u8 },
    /// Round passed; scoring and announcing the next level
    RoundAdvance { round: u8 },
    /// Session over; waiting for both buttons
    GameOver,
}

impl State {
    /// Round being played, if any
    pub fn round(&self) -> Option<u8> {
        match *self {
            State::PlaySequence { round }
            | State::AwaitInput { round }
            | State::RoundAdvance { round } => Some(round),
            _ => None,
        }
    }

    /// Check if a session is in progress
    pub fn in_session(&self) -> bool {
        self.round().is_some()
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (AwaitStart, PromptShown) => Generating,

            (Generating, PatternReady) => PlaySequence { round: 0 },

            (PlaySequence { round }, SequenceShown) => AwaitInput { round },

            (AwaitInput { round }, InputMatched) => RoundAdvance { round },
            (AwaitInput { .. }, InputMismatch) => GameOver,

            (RoundAdvance { round }, NextLevel) => PlaySequence {
                round: round.saturating_add(1),
            },
            (RoundAdvance { .. }, CapReached) => GameOver,

            (GameOver, RestartRequested) => AwaitStart,

            // Default: stay in current state
            _ => self,
        }
    }
}
