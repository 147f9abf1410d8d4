//! Simon Hardware Abstraction Layer
//!
//! This crate defines the hardware boundary of the memory game. The game
//! logic in `simon-core` only ever talks to these traits, so the same code
//! runs on the RP2040 board and under host tests with mock hardware.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  simon-firmware / simon-core            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  simon-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ simon-hal-    │       │ simon-drivers │
//! │    rp2040     │       │  (PCF85176)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Indicator lines and buttons
//! - [`tick::TickSource`] - Periodic overflow flag plus free-running counter
//! - [`lcd::SegmentMemory`] - Byte-addressed segment LCD memory
//! - [`clock::Oscillator`] - External oscillator start-up

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod lcd;
pub mod tick;

// Re-export key traits at crate root for convenience
pub use clock::Oscillator;
pub use gpio::{InputPin, OutputPin};
pub use lcd::{MemoryBank, SegmentMemory};
pub use tick::TickSource;
