//! Runs a Chip-8 ROM in an SDL2 window.
//!
//! ```bash
//! chip8 roms/pong.ch8 --ips 700 --scale 10 --layout qwerty
//! ```
//!
//! Escape quits, holding Space runs as fast as possible. Set `RUST_LOG=debug` (or
//! `trace` for every instruction) to see what the interpreter is doing.

use std::path::PathBuf;

use clap::Parser;

use chip8vm::CLOCK_SPEED;

use crate::keymap::Layout;
use crate::run::{run, Settings};

mod keymap;
mod run;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(short, long, default_value_t = CLOCK_SPEED)]
    ips: u32,

    /// Size of each Chip-8 pixel on screen
    #[arg(short, long, default_value_t = display::SCALE)]
    scale: u32,

    /// Seed for the random number generator, for repeatable runs
    #[arg(long)]
    seed: Option<u64>,

    /// Physical keys used for the hex keypad
    #[arg(short, long, value_enum, default_value_t = Layout::Qwerty)]
    layout: Layout,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Settings {
            rom: args.rom,
            instructions_per_second: args.ips,
            scale: args.scale,
            seed: args.seed,
            layout: args.layout,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let settings = Settings::from(Args::parse());

    run(&settings)
}
