//! Build script for simon-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml at compile time
//! - Generates the `GameConfig` constant the firmware runs with

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values resolved from the preset plus overrides
struct ResolvedConfig {
    round_cap: u8,
    number_policy: &'static str,
    seed_expansion: &'static str,
    timings: [(&'static str, u16); 5],
    indicators_active_low: bool,
    lcd_address: u8,
}

const TIMING_KEYS: [&str; 5] = [
    "scroll_step",
    "watch_lead",
    "indicator_hold",
    "press_ack",
    "level_pause",
];

const DEFAULT_TIMINGS: [u16; 5] = [20, 25, 25, 3, 30];

/// Rounds a raw 32-bit counter seed can fill
const RAW_SEED_ROUNDS: u8 = 32;

/// Validate game.toml and resolve it against its preset
fn validate_config() -> ResolvedConfig {
    // Re-run if game.toml changes
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: game.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a game.toml configuration file.           ║\n\
            ║  Please create one in the simon-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read game.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in game.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let game = section(&config, "game", &mut errors);
    let timings = section(&config, "timings", &mut errors);
    let board = section(&config, "board", &mut errors);
    let marathon = preset(game, &mut errors) == "marathon";

    let resolved = ResolvedConfig {
        round_cap: validate_round_cap(game, marathon, &mut errors),
        number_policy: validate_number_policy(game, marathon, &mut errors),
        seed_expansion: validate_seed_expansion(game, marathon, &mut errors),
        timings: validate_timings(timings, &mut errors),
        indicators_active_low: validate_polarity(board, &mut errors),
        lcd_address: validate_lcd_address(board, &mut errors),
    };
    validate_seed_width(&resolved, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid game configuration                               ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=game.toml validated successfully");
    resolved
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Look up a top-level table; a missing section is an empty one
fn section<'a>(
    config: &'a toml::Value,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a toml::value::Table> {
    match config.get(name) {
        Some(toml::Value::Table(t)) => Some(t),
        Some(_) => {
            errors.push(format!("[{}] must be a table", name));
            None
        }
        None => None,
    }
}

/// Preset named in [game], classic when absent
fn preset(game: Option<&toml::value::Table>, errors: &mut Vec<String>) -> &'static str {
    match game.and_then(|g| g.get("preset")) {
        None => "classic",
        Some(toml::Value::String(p)) if p == "classic" => "classic",
        Some(toml::Value::String(p)) if p == "marathon" => "marathon",
        Some(_) => {
            errors.push("[game] preset must be 'classic' or 'marathon'".to_string());
            "classic"
        }
    }
}

fn validate_round_cap(
    game: Option<&toml::value::Table>,
    marathon: bool,
    errors: &mut Vec<String>,
) -> u8 {
    let default = if marathon { 50 } else { 16 };
    match game.and_then(|g| g.get("round_cap")) {
        None => default,
        Some(toml::Value::Integer(n)) if (1..=64).contains(n) => *n as u8,
        Some(_) => {
            errors.push("[game] round_cap must be an integer 1-64".to_string());
            default
        }
    }
}

fn validate_number_policy(
    game: Option<&toml::value::Table>,
    marathon: bool,
    errors: &mut Vec<String>,
) -> &'static str {
    let default = if marathon {
        "FixedDivision"
    } else {
        "ModuloWrap"
    };
    match game.and_then(|g| g.get("number_policy")) {
        None => default,
        Some(toml::Value::String(s)) if s == "modulo_wrap" => "ModuloWrap",
        Some(toml::Value::String(s)) if s == "fixed_division" => "FixedDivision",
        Some(_) => {
            errors.push(
                "[game] number_policy must be 'modulo_wrap' or 'fixed_division'".to_string(),
            );
            default
        }
    }
}

fn validate_seed_expansion(
    game: Option<&toml::value::Table>,
    marathon: bool,
    errors: &mut Vec<String>,
) -> &'static str {
    let default = if marathon {
        "SmallRng"
    } else {
        "Raw"
    };
    match game.and_then(|g| g.get("seed_expansion")) {
        None => default,
        Some(toml::Value::String(s)) if s == "raw" => "Raw",
        Some(toml::Value::String(s)) if s == "small_rng" => "SmallRng",
        Some(_) => {
            errors.push("[game] seed_expansion must be 'raw' or 'small_rng'".to_string());
            default
        }
    }
}

fn validate_timings(
    timings: Option<&toml::value::Table>,
    errors: &mut Vec<String>,
) -> [(&'static str, u16); 5] {
    let mut out = [("", 0u16); 5];
    for (i, key) in TIMING_KEYS.iter().enumerate() {
        let value = match timings.and_then(|t| t.get(*key)) {
            None => DEFAULT_TIMINGS[i],
            Some(toml::Value::Integer(n)) if (1..=i64::from(u16::MAX)).contains(n) => *n as u16,
            Some(_) => {
                errors.push(format!("[timings] {} must be an integer 1-65535", key));
                DEFAULT_TIMINGS[i]
            }
        };
        out[i] = (*key, value);
    }
    out
}

/// Rounds past the raw seed's width would all expect button A
fn validate_seed_width(config: &ResolvedConfig, errors: &mut Vec<String>) {
    if config.seed_expansion == "Raw" && config.round_cap > RAW_SEED_ROUNDS {
        errors.push(format!(
            "[game] round_cap {} needs seed_expansion = 'small_rng' (raw fills {})",
            config.round_cap, RAW_SEED_ROUNDS
        ));
    }
}

fn validate_polarity(board: Option<&toml::value::Table>, errors: &mut Vec<String>) -> bool {
    match board.and_then(|b| b.get("indicators_active_low")) {
        None => false,
        Some(toml::Value::Boolean(v)) => *v,
        Some(_) => {
            errors.push("[board] indicators_active_low must be true or false".to_string());
            false
        }
    }
}

fn validate_lcd_address(board: Option<&toml::value::Table>, errors: &mut Vec<String>) -> u8 {
    match board.and_then(|b| b.get("lcd_address")) {
        None => 0x38,
        Some(toml::Value::Integer(a)) if *a == 0x38 || *a == 0x39 => *a as u8,
        Some(_) => {
            errors.push("[board] lcd_address must be 0x38 or 0x39".to_string());
            0x38
        }
    }
}

/// Write `game_config.rs` into OUT_DIR for `include!`
fn generate_config(config: &ResolvedConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let timings = config
        .timings
        .iter()
        .map(|(key, value)| format!("        {}: {},", key, value))
        .collect::<Vec<_>>()
        .join("\n");

    let source = format!(
        "// Generated from game.toml by build.rs\n\
         pub const GAME_CONFIG: simon_core::config::GameConfig = simon_core::config::GameConfig {{\n    \
             round_cap: {},\n    \
             number_policy: simon_core::display::NumberPolicy::{},\n    \
             seed_expansion: simon_core::config::SeedExpansion::{},\n    \
             timings: simon_core::config::Timings {{\n{}\n    }},\n\
         }};\n\
         pub const INDICATORS_ACTIVE_LOW: bool = {};\n\
         pub const LCD_ADDRESS: u8 = {:#04x};\n",
        config.round_cap,
        config.number_policy,
        config.seed_expansion,
        timings,
        config.indicators_active_low,
        config.lcd_address,
    );

    let mut f = File::create(out_dir.join("game_config.rs")).unwrap();
    f.write_all(source.as_bytes()).unwrap();
}
