//! Simon game logic
//!
//! The state machine is explicit, finite and deterministic: [`State`]
//! changes only through [`State::transition`], and the [`Engine`] performs
//! the display, lamp and input work belonging to each state.

pub mod engine;
pub mod events;
pub mod pattern;
pub mod session;
pub mod state;

pub use engine::{Engine, InputOutcome, Verdict};
pub use events::Event;
pub use pattern::Pattern;
pub use session::GameSession;
pub use state::State;
