//! RP2040-specific HAL for the Simon firmware
//!
//! This crate provides RP2040 implementations of the shared `simon-hal`
//! traits:
//!
//! - GPIO wrappers over embassy-rp `Input`/`Output`
//! - A 10 ms tick source over `embassy_time::Instant`
//! - Crystal oscillator status

#![no_std]

pub mod clock;
pub mod gpio;
pub mod tick;

pub use clock::XoscMonitor;
pub use gpio::{RpInput, RpOutput};
pub use tick::EmbassyTick;
