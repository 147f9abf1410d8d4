//! Six-digit number formatting
//!
//! Two renderings exist. They agree for every value up to 999999 and differ
//! only in overflow handling: fixed division shows " ERROR", modulo wrap
//! drops the high digits.

use super::position::SLOT_COUNT;

/// Largest value that fits in six digits
pub const MAX_DISPLAY_VALUE: u32 = 999_999;

/// How [`super::SegmentDisplay::display_number`] lays out a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NumberPolicy {
    /// Successive division by 100000..1, " ERROR" above 999999
    FixedDivision,
    /// `value % 1000000`, right-aligned, silently truncated
    #[default]
    ModuloWrap,
}

impl NumberPolicy {
    /// Characters for slots 1..=6
    pub fn render(self, value: u32) -> [u8; SLOT_COUNT] {
        match self {
            NumberPolicy::FixedDivision => fixed_division(value),
            NumberPolicy::ModuloWrap => modulo_wrap(value),
        }
    }
}

fn fixed_division(value: u32) -> [u8; SLOT_COUNT] {
    if value > MAX_DISPLAY_VALUE {
        return *b" ERROR";
    }

    let mut out = [b' '; SLOT_COUNT];
    let mut divisor = 100_000;
    let mut rest = value;
    let mut leading = true;

    for (i, slot) in out.iter_mut().enumerate() {
        let digit = (rest / divisor) as u8;
        rest %= divisor;
        divisor /= 10;

        let last = i == SLOT_COUNT - 1;
        if digit == 0 && leading && !last {
            continue;
        }
        leading = false;
        *slot = b'0' + digit;
    }

    out
}

fn modulo_wrap(value: u32) -> [u8; SLOT_COUNT] {
    let mut out = [b' '; SLOT_COUNT];
    let mut rest = value % (MAX_DISPLAY_VALUE + 1);

    // Least significant first, at least one digit
    for slot in out.iter_mut().rev() {
        *slot = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    out
}
