//! Board-agnostic core logic for the Simon memory game
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Segment glyph tables and the six-slot LCD driver
//! - Tick-based delay primitive
//! - Game state machine and engine
//! - Game configuration and presets
//! - Oscillator bring-up policy

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod display;
pub mod game;
pub mod timing;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;
