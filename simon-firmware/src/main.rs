//! Simon - segmented-display memory game firmware
//!
//! Main firmware binary for RP2040 boards: two buttons, two indicator
//! lamps and a six-character segment LCD on a PCF85176.
//!
//! The game engine is the only control flow. It busy-polls a 10 ms tick
//! derived from the embassy time driver, so the executor just hosts it.
//!
//! # Wiring
//!
//! | Signal      | Pin    |
//! |-------------|--------|
//! | Button A    | GPIO14 |
//! | Button B    | GPIO15 |
//! | Lamp A      | GPIO16 |
//! | Lamp B      | GPIO17 |
//! | LCD SDA     | GPIO4  |
//! | LCD SCL     | GPIO5  |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::Level;
use embassy_rp::i2c::{self, I2c};
use {defmt_rtt as _, panic_probe as _};

use simon_core::clock::{halt, stabilize_or_halt, CLOCK_TIMEOUT_POLLS};
use simon_core::game::Engine;
use simon_drivers::lcd::{Pcf85176, Pcf85176Config};
use simon_drivers::{GpioButtons, GpioIndicators};
use simon_hal_rp2040::{EmbassyTick, RpInput, RpOutput, XoscMonitor};

/// Configuration compiled from game.toml
mod config {
    include!(concat!(env!("OUT_DIR"), "/game_config.rs"));
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Simon firmware starting...");

    // Initialize RP2040 peripherals (clock tree on the 12 MHz crystal)
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let polls = stabilize_or_halt(&mut XoscMonitor::new(), CLOCK_TIMEOUT_POLLS);
    info!("Crystal stable after {} polls", polls);

    let game_config = config::GAME_CONFIG;
    if let Err(e) = game_config.validate() {
        error!("Invalid game configuration: {}", e);
        halt();
    }

    // Buttons switch to ground
    let buttons = GpioButtons::new_active_low(RpInput::pull_up(p.PIN_14), RpInput::pull_up(p.PIN_15));

    // Start with the lamps dark whatever the polarity
    let dark = if config::INDICATORS_ACTIVE_LOW {
        Level::High
    } else {
        Level::Low
    };
    let lamps = GpioIndicators::new(
        RpOutput::new(p.PIN_16, dark),
        RpOutput::new(p.PIN_17, dark),
        config::INDICATORS_ACTIVE_LOW,
    );

    let bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    let mut lcd = Pcf85176::new(
        bus,
        Pcf85176Config {
            address: config::LCD_ADDRESS,
            ..Default::default()
        },
    );
    match lcd.init() {
        Ok(()) => info!("PCF85176 at {=u8:#x} initialized", config::LCD_ADDRESS),
        // Keep going: the shadow is retried on every write
        Err(e) => warn!("PCF85176 init failed: {}", Debug2Format(&e)),
    }

    let mut engine = Engine::new(game_config, lcd, EmbassyTick::new(), buttons, lamps);
    info!(
        "Game ready: {} rounds, {}",
        game_config.round_cap, game_config.number_policy
    );

    let mut faults = 0;
    loop {
        let before = engine.state();
        let after = engine.step();
        info!("State: {} -> {}", before, after);

        if after.in_session() {
            let session = engine.session();
            debug!("Round {} points {}", session.round, session.points);
        }

        let lcd = engine.display_mut().memory_mut().backend_mut();
        if lcd.take_fault().is_some() && lcd.fault_count() != faults {
            faults = lcd.fault_count();
            warn!("LCD bus faults: {}", faults);
        }
    }
}
