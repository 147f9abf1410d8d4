//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in simon-core and simon-hal:
//!
//! - Indicator lamps on GPIO (active-high or active-low)
//! - Push buttons on GPIO
//! - PCF85176 segment LCD controller over I2C

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod indicator;
pub mod lcd;

pub use button::GpioButtons;
pub use indicator::GpioIndicators;
pub use lcd::pcf85176::Pcf85176;
