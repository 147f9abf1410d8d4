//! Segment LCD controllers
//!
//! Each controller implements [`simon_hal::SegmentMemory`] so the core
//! display driver can render into it directly.

pub mod pcf85176;

pub use pcf85176::{Pcf85176, Pcf85176Config};
