//! PCF85176 segment LCD driver (I2C)
//!
//! The PCF85176 drives 40 segment lines against 4 backplanes, so its RAM
//! is 40 four-bit nibbles: the same 20-cell layout as the core display
//! memory.
//!
//! # I2C Protocol
//!
//! Every transfer starts with one or more command bytes. Bit 7 of a
//! command is the continuation bit: set when another command follows,
//! clear on the last command. Bytes after the last command are display
//! data written at the data pointer, which auto-increments by two segment
//! addresses per byte in 1:4 mode.
//!
//! - Mode-set: `0x40 | E << 3 | B << 2 | M`
//! - Load-data-pointer: `0x00 | pointer` (segment address 0..39)
//! - Device-select: `0x60 | subaddress`
//! - Bank-select: `0x78 | I << 1 | O` (1:2 mode only, unused here)
//! - Blink-select: `0x70 | AB << 2 | frequency`
//!
//! A data byte carries the lower segment address in bits 7..4 (COM0 at
//! bit 4) and the upper one in bits 3..0, the reverse of the core memory
//! cell layout, so nibbles are swapped on the way out.
//!
//! # Blinking
//!
//! The controller blinks the whole panel, not individual segments. The
//! blinking bank is kept in the shadow only; while any bit in it is set,
//! blink-select is enabled.

use embedded_hal::i2c::{Error, ErrorKind, I2c};
use heapless::Vec;
use simon_core::display::{SegmentRam, DISPLAY_CELLS};
use simon_hal::{MemoryBank, SegmentMemory};

/// Command bytes
pub mod cmd {
    /// More commands follow
    pub const CONTINUE: u8 = 0x80;
    /// Mode-set, display enabled, 1/3 bias, 1:4 multiplex
    pub const MODE_SET_ENABLED: u8 = 0x48;
    /// Mode-set, display disabled, 1/3 bias, 1:4 multiplex
    pub const MODE_SET_DISABLED: u8 = 0x40;
    /// Load-data-pointer base
    pub const LOAD_DATA_POINTER: u8 = 0x00;
    /// Device-select base
    pub const DEVICE_SELECT: u8 = 0x60;
    /// Blink-select base
    pub const BLINK_SELECT: u8 = 0x70;
}

/// 7-bit address with SA0 tied low
pub const DEFAULT_ADDRESS: u8 = 0x38;

/// Blink frequency field of blink-select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkFrequency {
    /// About 2 Hz
    #[default]
    Fast = 1,
    /// About 1 Hz
    Medium = 2,
    /// About 0.5 Hz
    Slow = 3,
}

/// PCF85176 driver configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pcf85176Config {
    /// 7-bit I2C address (0x38 or 0x39, set by SA0)
    pub address: u8,
    /// Hardware subaddress (A2..A0 pins, 0-7)
    pub subaddress: u8,
    /// Rate used while the blinking bank is non-empty
    pub blink: BlinkFrequency,
}

impl Default for Pcf85176Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            subaddress: 0,
            blink: BlinkFrequency::Fast,
        }
    }
}

/// PCF85176 segment LCD controller
///
/// Writes land in a RAM shadow first and are then sent to the device. A
/// failed transfer keeps the shadow, latches the error and is otherwise
/// ignored; the next write of the same cell or a [`Pcf85176::flush`]
/// retries it.
pub struct Pcf85176<I2C> {
    i2c: I2C,
    config: Pcf85176Config,
    shadow: SegmentRam<DISPLAY_CELLS>,
    blinking: bool,
    fault: Option<ErrorKind>,
    fault_count: u32,
}

impl<I2C: I2c> Pcf85176<I2C> {
    pub fn new(i2c: I2C, config: Pcf85176Config) -> Self {
        Self {
            i2c,
            config,
            shadow: SegmentRam::new(),
            blinking: false,
            fault: None,
            fault_count: 0,
        }
    }

    /// Enable the display, stop blinking and clear the RAM
    pub fn init(&mut self) -> Result<(), ErrorKind> {
        self.shadow = SegmentRam::new();
        self.blinking = false;

        let mut frame: Vec<u8, { DISPLAY_CELLS + 4 }> = Vec::new();
        // Capacity covers four commands and a full RAM image
        let _ = frame.extend_from_slice(&[
            cmd::CONTINUE | cmd::MODE_SET_ENABLED,
            cmd::CONTINUE | self.blink_command(),
            cmd::CONTINUE | self.device_select(),
            cmd::LOAD_DATA_POINTER,
        ]);
        let _ = frame.extend_from_slice(&[0; DISPLAY_CELLS]);

        self.i2c
            .write(self.config.address, &frame)
            .map_err(|e| e.kind())
    }

    /// Turn the panel off, keeping RAM contents
    pub fn disable(&mut self) -> Result<(), ErrorKind> {
        self.i2c
            .write(self.config.address, &[cmd::MODE_SET_DISABLED])
            .map_err(|e| e.kind())
    }

    /// Resend the whole shadow and blink state
    pub fn flush(&mut self) -> Result<(), ErrorKind> {
        let mut frame: Vec<u8, { DISPLAY_CELLS + 3 }> = Vec::new();
        let _ = frame.extend_from_slice(&[
            cmd::CONTINUE | self.blink_command(),
            cmd::CONTINUE | self.device_select(),
            cmd::LOAD_DATA_POINTER,
        ]);
        for &cell in self.shadow.bank(MemoryBank::Main) {
            let _ = frame.push(wire_byte(cell));
        }

        self.i2c
            .write(self.config.address, &frame)
            .map_err(|e| e.kind())
    }

    /// Take the latched bus error, if any
    pub fn take_fault(&mut self) -> Option<ErrorKind> {
        self.fault.take()
    }

    /// Number of failed transfers since creation
    pub fn fault_count(&self) -> u32 {
        self.fault_count
    }

    /// RAM shadow as last written
    pub fn shadow(&self) -> &SegmentRam<DISPLAY_CELLS> {
        &self.shadow
    }

    /// Whether blink-select is currently enabled
    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn device_select(&self) -> u8 {
        cmd::DEVICE_SELECT | (self.config.subaddress & 0x07)
    }

    fn blink_command(&self) -> u8 {
        if self.blinking {
            cmd::BLINK_SELECT | self.config.blink as u8
        } else {
            cmd::BLINK_SELECT
        }
    }

    fn send_cell(&mut self, index: usize, value: u8) {
        // Two segment addresses per cell
        let pointer = ((index - 1) * 2) as u8;
        let frame = [
            cmd::CONTINUE | self.device_select(),
            cmd::LOAD_DATA_POINTER | pointer,
            wire_byte(value),
        ];
        let result = self.i2c.write(self.config.address, &frame);
        self.record(result);
    }

    fn send_blink(&mut self) {
        let frame = [cmd::CONTINUE | self.device_select(), self.blink_command()];
        let result = self.i2c.write(self.config.address, &frame);
        self.record(result);
    }

    fn record(&mut self, result: Result<(), I2C::Error>) {
        if let Err(e) = result {
            let kind = e.kind();
            #[cfg(feature = "defmt")]
            defmt::warn!("PCF85176 write failed: {}", defmt::Debug2Format(&kind));
            self.fault = Some(kind);
            self.fault_count = self.fault_count.saturating_add(1);
        }
    }
}

/// Core cell layout to controller byte layout
const fn wire_byte(cell: u8) -> u8 {
    cell.rotate_left(4)
}

impl<I2C: I2c> SegmentMemory for Pcf85176<I2C> {
    fn cell_count(&self) -> usize {
        DISPLAY_CELLS
    }

    fn write_cell(&mut self, bank: MemoryBank, index: usize, value: u8) {
        if !(1..=DISPLAY_CELLS).contains(&index) {
            return;
        }
        self.shadow.write_cell(bank, index, value);

        match bank {
            MemoryBank::Main => self.send_cell(index, value),
            MemoryBank::Blinking => {
                let blinking = self.shadow.bank(MemoryBank::Blinking).iter().any(|&c| c != 0);
                if blinking != self.blinking {
                    self.blinking = blinking;
                    self.send_blink();
                }
            }
        }
    }

    fn read_cell(&self, bank: MemoryBank, index: usize) -> u8 {
        self.shadow.read_cell(bank, index)
    }
}
