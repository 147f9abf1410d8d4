//! Game engine
//!
//! Owns the display, the tick source and the player I/O, and runs one
//! state's work per [`Engine::step`]. Every wait is a busy-poll on the
//! injected traits, so the whole game is single-threaded and runs on the
//! host against mocks.

use simon_hal::{SegmentMemory, TickSource};

use super::events::Event;
use super::pattern::Pattern;
use super::session::GameSession;
use super::state::State;
use crate::config::GameConfig;
use crate::display::SegmentDisplay;
use crate::timing::{Pause, TickDelay};
use crate::traits::{Button, ButtonPanel, Indicator, IndicatorPanel};

/// Messages shown by the engine
pub mod messages {
    pub const START_PROMPT: &str = "BEGIN BY PRESSING S1";
    pub const WATCH: &str = "WATCH";
    pub const GO: &str = "GO";
    pub const LEVEL: &str = "LEVEL";
    pub const WIN: &str = "YOU WIN";
    pub const GAME_OVER: &str = "GAME OVER FINAL SCORE";
}

/// Result of reading one round of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputOutcome {
    /// Every step was answered correctly
    Matched,
    /// Wrong button at `step`; remaining steps were not read
    Mismatch { step: u8 },
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    Won,
    Lost { points: u8 },
}

/// The Simon game
pub struct Engine<M, T, B, L> {
    config: GameConfig,
    display: SegmentDisplay<M>,
    delay: TickDelay<T>,
    buttons: B,
    indicators: L,
    session: GameSession,
    state: State,
}

impl<M, T, B, L> Engine<M, T, B, L>
where
    M: SegmentMemory,
    T: TickSource,
    B: ButtonPanel,
    L: IndicatorPanel,
{
    /// Assemble an engine from initialised peripherals
    ///
    /// `config` is expected to have passed [`GameConfig::validate`].
    pub fn new(config: GameConfig, memory: M, tick: T, buttons: B, indicators: L) -> Self {
        Self {
            display: SegmentDisplay::new(memory, config.number_policy),
            delay: TickDelay::new(tick),
            buttons,
            indicators,
            session: GameSession::new(),
            state: State::AwaitStart,
            config,
        }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Bookkeeping of the session in progress (or the last one)
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Configuration the engine was built with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Borrow the display driver
    pub fn display(&self) -> &SegmentDisplay<M> {
        &self.display
    }

    /// Mutably borrow the display driver
    pub fn display_mut(&mut self) -> &mut SegmentDisplay<M> {
        &mut self.display
    }

    /// Borrow the indicator lamps
    pub fn indicators(&self) -> &L {
        &self.indicators
    }

    /// Borrow the button panel
    pub fn buttons(&self) -> &B {
        &self.buttons
    }

    /// Borrow the tick source
    pub fn tick(&self) -> &T {
        self.delay.tick()
    }

    /// Run the current state's work and move to the next state
    pub fn step(&mut self) -> State {
        let event = match self.state {
            State::AwaitStart => {
                self.show_start_prompt();
                Event::PromptShown
            }
            State::Generating => {
                self.session = GameSession::new();
                self.session.pattern = self.wait_for_start();
                self.announce_level(1);
                Event::PatternReady
            }
            State::PlaySequence { round } => {
                self.session.round = round;
                self.play_sequence(self.session.pattern, round);
                Event::SequenceShown
            }
            State::AwaitInput { round } => match self.verify_input(self.session.pattern, round) {
                InputOutcome::Matched => Event::InputMatched,
                InputOutcome::Mismatch { .. } => {
                    self.session.fail();
                    Event::InputMismatch
                }
            },
            State::RoundAdvance { round } => {
                if self.session.complete_round(self.config.round_cap) {
                    Event::CapReached
                } else {
                    self.announce_level(u32::from(round) + 2);
                    Event::NextLevel
                }
            }
            State::GameOver => {
                self.show_game_over();
                self.wait_for_restart();
                Event::RestartRequested
            }
        };

        if event.ends_session() {
            self.session.game_over = true;
            #[cfg(feature = "defmt")]
            defmt::info!(
                "Session over: {} of {} rounds",
                self.session.points,
                self.config.round_cap
            );
        }

        self.state = self.state.transition(event);
        self.state
    }

    /// Play forever
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Light both lamps and scroll the start prompt once
    pub fn show_start_prompt(&mut self) {
        self.indicators.set_all(true);
        self.display.scroll_text(
            messages::START_PROMPT,
            &mut self.delay,
            self.config.timings.scroll_step,
        );
    }

    /// Busy-wait for button A and sample the tick counter as the seed
    ///
    /// Sampling repeats while the pattern comes out empty.
    pub fn wait_for_start(&mut self) -> Pattern {
        loop {
            if self.buttons.is_pressed(Button::A) {
                let seed = self.delay.sample_counter();
                let pattern = Pattern::from_seed(seed, self.config.seed_expansion);
                if !pattern.is_empty() {
                    return pattern;
                }
            }
        }
    }

    /// Show the "LEVEL n" announcement
    pub fn announce_level(&mut self, level: u32) {
        let hold = self.config.timings.level_pause;
        self.indicators.set_all(false);
        self.delay.pause(hold);
        self.display.clear();
        self.display.show_text(messages::LEVEL);
        self.delay.pause(hold);
        self.display.display_number(level);
        self.delay.pause(hold);
    }

    /// Replay steps `0..=round` of the pattern on the lamps
    pub fn play_sequence(&mut self, pattern: Pattern, round: u8) {
        let timings = self.config.timings;
        for step in 0..=round {
            self.display.clear();
            self.display.show_text(messages::WATCH);
            self.delay.pause(timings.watch_lead);

            let lit = Indicator::for_bit(pattern.bit(step));
            let dark = Indicator::for_bit(!pattern.bit(step));
            self.indicators.set(lit, true);
            self.indicators.set(dark, false);
            self.delay.pause(timings.indicator_hold);

            self.indicators.set_all(false);
        }
    }

    /// Read `round + 1` presses and compare them against the pattern
    ///
    /// A press is acknowledged on release; the first wrong button ends the
    /// round without reading further.
    pub fn verify_input(&mut self, pattern: Pattern, round: u8) -> InputOutcome {
        self.display.clear();
        self.display.show_text(messages::GO);

        let mut presses: u8 = 0;
        while presses <= round {
            let button = if self.buttons.is_pressed(Button::A) {
                Button::A
            } else if self.buttons.is_pressed(Button::B) {
                Button::B
            } else {
                continue;
            };

            self.hold_until_released(button);

            if button.bit() != pattern.bit(presses) {
                return InputOutcome::Mismatch { step: presses };
            }
            presses += 1;
        }

        InputOutcome::Matched
    }

    /// Scroll the end-of-session message and, after a loss, show the score
    pub fn show_game_over(&mut self) -> Verdict {
        let step = self.config.timings.scroll_step;
        if self.session.is_won(self.config.round_cap) {
            self.display.scroll_text(messages::WIN, &mut self.delay, step);
            Verdict::Won
        } else {
            let points = self.session.points;
            self.display
                .scroll_text(messages::GAME_OVER, &mut self.delay, step);
            self.display.clear();
            self.display.display_number(u32::from(points));
            Verdict::Lost { points }
        }
    }

    /// Busy-wait until both buttons are held together
    pub fn wait_for_restart(&mut self) {
        while !self.buttons.both_pressed() {}
    }

    fn hold_until_released(&mut self, button: Button) {
        let lamp = Indicator::from(button);
        while self.buttons.is_pressed(button) {
            self.indicators.set(lamp, true);
            self.delay.pause(self.config.timings.press_ack);
        }
        self.indicators.set(lamp, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::memory::{SegmentRam, DISPLAY_CELLS};
    use crate::mock::{FakeTick, FrameTick, Held, RecordingIndicators, ScriptedButtons, SharedRam};

    type TestEngine = Engine<SegmentRam<DISPLAY_CELLS>, FakeTick, ScriptedButtons, RecordingIndicators>;
    type WatchedEngine = Engine<SharedRam, FrameTick, ScriptedButtons, RecordingIndicators>;

    fn engine_with(config: GameConfig, tick: FakeTick, buttons: ScriptedButtons) -> TestEngine {
        Engine::new(
            config,
            SegmentRam::new(),
            tick,
            buttons,
            RecordingIndicators::default(),
        )
    }

    /// Engine whose tick source records every text shown during pauses
    fn watched(config: GameConfig) -> WatchedEngine {
        let ram = SharedRam::default();
        Engine::new(
            config,
            ram.clone(),
            FrameTick::new(ram),
            ScriptedButtons::new(),
            RecordingIndicators::default(),
        )
    }

    fn engine(buttons: ScriptedButtons) -> TestEngine {
        engine_with(GameConfig::classic(), FakeTick::new(), buttons)
    }

    fn small_cap(cap: u8) -> GameConfig {
        GameConfig {
            round_cap: cap,
            ..GameConfig::classic()
        }
    }

    fn text(engine: &TestEngine) -> String {
        engine.display().read_text().as_str().into()
    }

    #[test]
    fn test_playback_drives_lamps() {
        let mut e = engine(ScriptedButtons::new());
        e.play_sequence(Pattern::from_bits(0b10), 1);

        assert_eq!(
            e.indicators().writes,
            vec![
                (Indicator::A, true),
                (Indicator::B, false),
                (Indicator::A, false),
                (Indicator::B, false),
                (Indicator::B, true),
                (Indicator::A, false),
                (Indicator::A, false),
                (Indicator::B, false),
            ]
        );
        // Two steps of watch lead plus lamp hold
        assert_eq!(e.tick().acknowledged, 2 * (25 + 25));
        assert_eq!(text(&e), "WATCH ");
    }

    #[test]
    fn test_correct_input_matches() {
        let buttons = ScriptedButtons::new().tap(Button::A).tap(Button::B);
        let mut e = engine(buttons);

        let outcome = e.verify_input(Pattern::from_bits(0b10), 1);
        assert_eq!(outcome, InputOutcome::Matched);
        assert_eq!(text(&e), "GO    ");

        let lamps = e.indicators().edges();
        assert_eq!(
            lamps,
            vec![
                (Indicator::A, true),
                (Indicator::A, false),
                (Indicator::B, true),
                (Indicator::B, false),
            ]
        );
    }

    #[test]
    fn test_wrong_first_press_fails_immediately() {
        // Only one press scripted; a second read would panic
        let buttons = ScriptedButtons::new().then(Held::Only(Button::B), 3).then(Held::Nothing, 1);
        let mut e = engine(buttons);

        let outcome = e.verify_input(Pattern::from_bits(0b10), 1);
        assert_eq!(outcome, InputOutcome::Mismatch { step: 0 });
        assert_eq!(e.buttons().remaining(), 0);
        assert!(!e.indicators().is_lit(Indicator::B));
    }

    #[test]
    fn test_held_button_is_one_press() {
        let buttons = ScriptedButtons::new()
            .then(Held::Only(Button::A), 10)
            .then(Held::Nothing, 1);
        let mut e = engine(buttons);

        assert_eq!(e.verify_input(Pattern::from_bits(0b1), 0), InputOutcome::Mismatch { step: 0 });
        // Nine polls of the release wait, press_ack ticks each
        assert_eq!(e.tick().acknowledged, 9 * 3);
    }

    #[test]
    fn test_zero_seed_is_resampled() {
        let tick = FakeTick::new().with_counters(&[0, 0, 0x1234]);
        let buttons = ScriptedButtons::new()
            .then(Held::Nothing, 4)
            .then(Held::Only(Button::A), 3);
        let mut e = engine_with(GameConfig::classic(), tick, buttons);

        assert_eq!(e.wait_for_start(), Pattern::from_bits(0x1234));
    }

    #[test]
    fn test_level_announcement() {
        let mut e = engine(ScriptedButtons::new());
        e.announce_level(3);
        assert_eq!(text(&e), "     3");
        assert_eq!(e.tick().acknowledged, 3 * 30);
        assert!(!e.indicators().is_lit(Indicator::A));
        assert!(!e.indicators().is_lit(Indicator::B));
    }

    #[test]
    fn test_start_prompt_lights_both_lamps() {
        let mut e = engine(ScriptedButtons::new());
        assert_eq!(e.step(), State::Generating);
        assert!(e.indicators().is_lit(Indicator::A));
        assert!(e.indicators().is_lit(Indicator::B));

        let frames = messages::START_PROMPT.len() as u32 + 6;
        assert_eq!(e.tick().acknowledged, frames * 20);
        assert_eq!(text(&e), "      ");
    }

    #[test]
    fn test_lose_in_second_round() {
        // Pattern 0b10: round 0 expects A; round 1 expects A then B
        let buttons = ScriptedButtons::new()
            .then(Held::Only(Button::A), 1)
            .tap(Button::A)
            .tap(Button::A)
            .tap(Button::A)
            .then(Held::Both, 2);
        let tick = FakeTick::new().with_counters(&[0b10]);
        let mut e = engine_with(GameConfig::classic(), tick, buttons);

        let mut visited = Vec::new();
        e.step();
        while e.state() != State::GameOver {
            visited.push(e.step());
        }

        assert_eq!(
            visited,
            vec![
                State::PlaySequence { round: 0 },
                State::AwaitInput { round: 0 },
                State::RoundAdvance { round: 0 },
                State::PlaySequence { round: 1 },
                State::AwaitInput { round: 1 },
                State::GameOver,
            ]
        );
        assert_eq!(e.session().points, 1);
        assert!(e.session().game_over);

        assert_eq!(e.step(), State::AwaitStart);
        assert_eq!(text(&e), "     1");
    }

    #[test]
    fn test_win_at_cap() {
        let buttons = ScriptedButtons::new()
            .then(Held::Only(Button::A), 1)
            .tap(Button::B)
            .tap(Button::B)
            .tap(Button::B)
            .then(Held::Both, 2);
        let tick = FakeTick::new().with_counters(&[0b11]);
        let mut e = engine_with(small_cap(2), tick, buttons);

        while e.state() != State::GameOver {
            e.step();
        }
        assert!(e.session().is_won(2));
        assert_eq!(e.show_game_over(), Verdict::Won);
        assert_eq!(text(&e), "      ");
    }

    #[test]
    fn test_game_over_shows_score() {
        let mut e = engine_with(GameConfig::marathon(), FakeTick::new(), ScriptedButtons::new());
        let before = e.tick().acknowledged;
        assert_eq!(e.show_game_over(), Verdict::Lost { points: 0 });

        let frames = messages::GAME_OVER.len() as u32 + 6;
        assert_eq!(e.tick().acknowledged - before, frames * 20);
        assert_eq!(text(&e), "     0");
    }

    #[test]
    fn test_win_scrolls_you_win() {
        let mut e = watched(small_cap(2));
        e.session.points = 2;
        assert_eq!(e.show_game_over(), Verdict::Won);

        let tick = e.tick();
        let first = tick.position("YOU WI").expect("message fully on screen");
        assert_eq!(tick.frames[first + 1], "OU WIN");
        assert_eq!(tick.position("GAME O"), None);
        assert_eq!(e.display().read_text().as_str(), "      ");
    }

    #[test]
    fn test_loss_scrolls_game_over_then_score() {
        let mut e = watched(GameConfig::classic());
        e.session.points = 3;
        assert_eq!(e.show_game_over(), Verdict::Lost { points: 3 });

        let tick = e.tick();
        let start = tick.position("GAME O").expect("message start on screen");
        let end = tick.position("FINAL ").expect("message tail on screen");
        assert!(start < end);
        assert_eq!(tick.position("YOU WI"), None);
        // Score stays up after the scroll
        assert_eq!(e.display().read_text().as_str(), "     3");
    }

    #[test]
    fn test_restart_needs_both_buttons() {
        let buttons = ScriptedButtons::new()
            .then(Held::Only(Button::A), 4)
            .then(Held::Only(Button::B), 4)
            .then(Held::Both, 2);
        let mut e = engine(buttons);
        e.wait_for_restart();
        assert_eq!(e.buttons().remaining(), 0);
    }
}
