use std::time::{Duration, Instant};

use anyhow::{Context, Error, Result};
use log::{error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::constants::TIMER_HZ;
use chip8_core::Chip8;
use chip8_display::Display;

use crate::audio::Beeper;
use crate::keymap::keymap;

/// How fast and how big to run
pub struct Settings {
    /// Instructions executed per second
    pub ips: u32,
    /// Window pixels per Chip-8 pixel
    pub scale: u32,
}

pub fn run(mut chip8: Chip8, settings: &Settings) -> Result<()> {
    // Get SDL2 context
    let sdl = sdl2::init().map_err(Error::msg)?;
    let mut display = Display::new(&sdl, settings.scale).map_err(Error::msg)?;
    let mut beeper = Beeper::new(&sdl).map_err(Error::msg)?;
    let mut events = sdl.event_pump().map_err(Error::msg)?;

    // Set initial timing
    let cycle_time = Duration::from_secs(1) / settings.ips;
    let timer_period = Duration::from_secs(1) / TIMER_HZ;
    let mut last_cycle = Instant::now();
    let mut last_tick = last_cycle;

    // Whether or not the clock speed should be respected
    let mut fast_forward = false;

    info!(
        "running at {} instructions per second, timers at {}Hz",
        settings.ips, TIMER_HZ
    );

    'event: loop {
        // Render only when the frame changed
        if let Some(frame) = chip8.take_frame() {
            display.render(frame).map_err(Error::msg)?;
        }

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
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        if let Err(e) = chip8.step() {
            error!("halting at pc {:#06X}: {}", chip8.pc(), e);
            beeper.set_playing(false);
            return Err(e).context("program faulted");
        }

        let now = Instant::now();
        while now.duration_since(last_tick) >= timer_period {
            chip8.tick_timers();
            last_tick += timer_period;
        }
        beeper.set_playing(chip8.sound_active());

        // Handle timing
        let elapsed_cycle_time = now - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!("quit requested");
    Ok(())
}
