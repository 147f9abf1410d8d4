//! Tick source over the embassy time driver
//!
//! Emulates a periodic timer overflow flag: the flag is raised once a
//! period boundary has passed and stays raised until acknowledged. Like a
//! hardware flag it does not count; boundaries missed while the flag was
//! pending are dropped.

use embassy_time::{Duration, Instant};
use simon_hal::tick::{TickSource, TICK_PERIOD_MS};

pub struct EmbassyTick {
    period: Duration,
    next: Instant,
}

impl EmbassyTick {
    /// Tick with the standard 10 ms period, first overflow one period from now
    pub fn new() -> Self {
        Self::with_period(Duration::from_millis(TICK_PERIOD_MS as u64))
    }

    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }
}

impl Default for EmbassyTick {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for EmbassyTick {
    fn counter(&mut self) -> u32 {
        // Low bits of the 1 MHz timebase
        Instant::now().as_ticks() as u32
    }

    fn has_overflowed(&mut self) -> bool {
        Instant::now() >= self.next
    }

    fn acknowledge(&mut self) {
        let now = Instant::now();
        self.next += self.period;
        while self.next <= now {
            self.next += self.period;
        }
    }
}
