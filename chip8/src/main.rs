use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use chip8_core::constants::CLOCK_SPEED;
use chip8_core::{Chip8, Config};

mod audio;
mod keymap;
mod run;

/// Runs a Chip-8 ROM in a window.
///
/// Keys 1-4, Q-R, A-F and Z-V make up the hex keypad.
/// Hold space to fast forward; escape quits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(long, default_value_t = CLOCK_SPEED, value_parser = clap::value_parser!(u32).range(1..))]
    ips: u32,

    /// Window pixels per Chip-8 pixel
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=64))]
    scale: u32,

    /// Stop on unrecognized opcodes instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut chip8 = Chip8::with_config(Config {
        strict: args.strict,
        seed: args.seed,
        ..Config::default()
    })?;

    // Load ROM
    let file = File::open(&args.rom)
        .with_context(|| format!("unable to open {}", args.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", args.rom.display()))?;
    info!("loaded {}", args.rom.display());

    let settings = run::Settings {
        ips: args.ips,
        scale: args.scale,
    };
    run::run(chip8, &settings)
}
