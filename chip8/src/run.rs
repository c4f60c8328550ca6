use std::time::Duration;
#[cfg(feature = "sdl")]
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use chip8_core::{Chip8, FrameBuffer, Program, RandomSource, Status, TimerClock};

#[cfg(feature = "sdl")]
use chip8_display::Display;
#[cfg(feature = "sdl")]
use sdl2::{event::Event, keyboard::Keycode};

#[cfg(feature = "sdl")]
use crate::keymap::keymap;

/// Instruction limit for a headless run that was given none
pub const HEADLESS_STEPS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub hz: u32,
    pub seed: Option<u64>,
    pub max_steps: Option<u64>,
    #[cfg_attr(not(feature = "sdl"), allow(dead_code))]
    pub scale: u32,
}

impl Settings {
    /// Wall-clock time one instruction is allotted
    pub fn cycle_time(&self) -> Duration {
        Duration::from_secs(1) / self.hz.max(1)
    }

    fn entropy(&self) -> RandomSource {
        match self.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::new(),
        }
    }

    fn machine(&self, program: Program) -> Chip8 {
        Chip8::with_peripherals(program, FrameBuffer::new(), self.entropy())
    }
}

/// Runs the ROM without a window, then prints the final frame
/// - time is simulated: every instruction advances the 60Hz timers by one cycle time
/// - stops at the step limit or when the program waits for a key
pub fn headless(program: Program, settings: &Settings) -> Result<()> {
    let mut chip8 = settings.machine(program);
    let mut timer_clock = TimerClock::new();
    let cycle_time = settings.cycle_time();
    let max_steps = settings.max_steps.unwrap_or(HEADLESS_STEPS);

    let steps = drive(&mut chip8, &mut timer_clock, cycle_time, max_steps)?;
    print!("{}", chip8.display());
    info!(
        "stopped after {} instructions with pc {:04x}",
        steps,
        chip8.state().pc()
    );
    Ok(())
}

fn drive(
    chip8: &mut Chip8,
    timer_clock: &mut TimerClock,
    cycle_time: Duration,
    max_steps: u64,
) -> Result<u64> {
    let mut steps = 0;
    while steps < max_steps {
        chip8
            .step()
            .with_context(|| format!("execution halted after {} instructions", steps))?;
        steps += 1;
        if let Status::AwaitingKey { register } = chip8.status() {
            info!("waiting for a key for V{:X}, nothing to press", register);
            break;
        }
        for _ in 0..timer_clock.advance(cycle_time) {
            chip8.tick_timers();
        }
    }
    Ok(steps)
}

/// Runs the ROM in an SDL window
/// - the keypad is read from the keyboard, see `keymap`
/// - holding Space ignores the clock speed, Escape quits
#[cfg(feature = "sdl")]
pub fn windowed(program: Program, settings: &Settings) -> Result<()> {
    let mut chip8 = settings.machine(program);

    // Get SDL2 context
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let mut display = Display::new(&sdl, "chip8", settings.scale).map_err(anyhow::Error::msg)?;
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;

    // Set initial timing
    let cycle_time = settings.cycle_time();
    let mut timer_clock = TimerClock::new();
    let mut last_cycle = Instant::now();

    // Whether or not the clock speed should be respected
    let mut fast_forward = false;
    let mut steps: u64 = 0;
    let timers = chip8.timers();
    let mut sounding = false;

    'event: loop {
        if let Some(frame) = chip8.take_frame() {
            display.render(frame).map_err(anyhow::Error::msg)?;
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
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

        chip8
            .step()
            .with_context(|| format!("execution halted after {} instructions", steps))?;
        steps += 1;
        if settings.max_steps.map_or(false, |max| steps >= max) {
            info!("reached the limit of {} instructions", steps);
            break;
        }

        if timers.is_sounding() != sounding {
            sounding = !sounding;
            log::debug!("sound {}", if sounding { "on" } else { "off" });
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        for _ in 0..timer_clock.advance(elapsed_cycle_time) {
            chip8.tick_timers();
        }
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = current_time;
    }
    Ok(())
}
