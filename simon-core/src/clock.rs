//! Oscillator bring-up policy
//!
//! Tick accuracy depends on the external crystal, so the game never starts
//! on an unstable clock. Bring-up is the one bounded wait in the firmware
//! and its failure is the one fatal error: the board halts for good.

use simon_hal::Oscillator;

/// Default poll budget for [`stabilize`]
pub const CLOCK_TIMEOUT_POLLS: u32 = 100_000;

/// Clock bring-up errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Still unstable after the given number of polls
    Timeout { polls: u32 },
}

/// Start the oscillator and poll until it is stable
///
/// Returns the number of polls it took. A budget of 0 fails without
/// polling.
pub fn stabilize<O: Oscillator>(osc: &mut O, timeout_polls: u32) -> Result<u32, ClockError> {
    osc.start();
    for poll in 1..=timeout_polls {
        if osc.is_stable() {
            return Ok(poll);
        }
    }
    Err(ClockError::Timeout {
        polls: timeout_polls,
    })
}

/// [`stabilize`], halting the board on timeout
pub fn stabilize_or_halt<O: Oscillator>(osc: &mut O, timeout_polls: u32) -> u32 {
    match stabilize(osc, timeout_polls) {
        Ok(polls) => polls,
        Err(_err) => {
            #[cfg(feature = "defmt")]
            defmt::error!("Oscillator failed to stabilise: {}", _err);
            halt()
        }
    }
}

/// Stop here forever
pub fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
