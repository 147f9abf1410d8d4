//! Events that trigger state transitions

/// Events produced by the engine when a state's work is done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Start prompt has been shown
    PromptShown,
    /// Start pressed and a nonzero pattern sampled
    PatternReady,
    /// Playback of the current round finished
    SequenceShown,
    /// Player reproduced the whole sequence
    InputMatched,
    /// Player pressed the wrong button
    InputMismatch,
    /// Next level announced
    NextLevel,
    /// Last round completed
    CapReached,
    /// Both buttons held on the game-over screen
    RestartRequested,
}

impl Event {
    /// Check if this event ends the current session
    pub fn ends_session(&self) -> bool {
        matches!(self, Event::InputMismatch | Event::CapReached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ending_events() {
        assert!(Event::InputMismatch.ends_session());
        assert!(Event::CapReached.ends_session());
        assert!(!Event::InputMatched.ends_session());
        assert!(!Event::NextLevel.ends_session());
    }
}
