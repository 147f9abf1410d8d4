//! Configuration types
//!
//! Board-agnostic game configuration. The firmware builds its
//! [`GameConfig`] at compile time from `game.toml`; host code uses the
//! named presets.

pub mod types;

pub use types::*;
