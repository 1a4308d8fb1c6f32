use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8vm::{Chip8, Status, TIMER_FREQUENCY};
use display::Display;

use crate::keymap::Layout;

const WINDOW_TITLE: &str = "CHIP-8 Emulator";

/// How a session should be run
#[derive(Debug)]
pub struct Settings {
    pub rom: PathBuf,
    pub instructions_per_second: u32,
    pub scale: u32,
    pub seed: Option<u64>,
    pub layout: Layout,
}

pub fn run(settings: &Settings) -> Result<()> {
    // Load ROM
    let rom = fs::read(&settings.rom)
        .with_context(|| format!("unable to read ROM {}", settings.rom.display()))?;
    let mut chip8 = match settings.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };
    chip8
        .load_rom(&rom)
        .with_context(|| format!("unable to load ROM {}", settings.rom.display()))?;

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(&sdl, WINDOW_TITLE, settings.scale)?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    // Set initial timing; one frame per timer tick
    let frame_time = Duration::from_secs(1) / TIMER_FREQUENCY;
    let steps_per_frame = (settings.instructions_per_second / TIMER_FREQUENCY).max(1);
    let mut last_frame = Instant::now();
    info!(
        "Running [{} instructions/frame] [{} frames/s]",
        steps_per_frame, TIMER_FREQUENCY
    );

    // Whether or not the default clock speed should be respected
    let mut fast_forward = false;
    let mut beeping = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, settings.layout.keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc)?,
                    (Keycode::Space, _) => fast_forward = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, settings.layout.keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc)?,
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        for _ in 0..steps_per_frame {
            if chip8.step()? == Status::AwaitingKey {
                break;
            }
        }
        chip8.advance_timers();
        if chip8.sound_active() != beeping {
            beeping = chip8.sound_active();
            debug!("sound timer {}", if beeping { "started" } else { "stopped" });
        }

        display.render(chip8.frame_buffer())?;

        // Handle timing
        let elapsed = last_frame.elapsed();
        if !fast_forward && frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
        last_frame = Instant::now();
    }

    info!("Quit");
    Ok(())
}
