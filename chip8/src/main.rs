use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
#[cfg(not(feature = "sdl"))]
use log::info;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use chip8_core::{listing, Program, DEFAULT_CLOCK_HZ};

#[cfg(feature = "sdl")]
mod keymap;
mod run;

use run::Settings;

/// What to do with the ROM besides running it
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Print the ROM as 16-bit words
    Hex,
    /// Print the disassembly listing
    Asm,
    /// Do not execute the ROM
    Noexec,
}

/// Chip-8 interpreter and disassembler
#[derive(Parser, Debug)]
#[command(name = "chip8", version)]
struct Args {
    /// Any of `hex`, `asm` and `noexec`, followed by the path to the ROM
    #[arg(required = true, num_args = 1.., value_name = "MODE.. ROM")]
    args: Vec<OsString>,

    /// Instructions executed per second
    #[arg(long, default_value_t = DEFAULT_CLOCK_HZ)]
    hz: u32,

    /// Seed for RNDMSK; the OS entropy source is used when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many instructions
    #[arg(long)]
    max_steps: Option<u64>,

    /// Size of a Chip-8 pixel in the window
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Run without a window even when built with SDL support
    #[arg(long)]
    headless: bool,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

/// The positional arguments split into the modes and the ROM they apply to
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    modes: Vec<Mode>,
    rom: PathBuf,
}

impl Invocation {
    fn has(&self, mode: Mode) -> bool {
        self.modes.contains(&mode)
    }
}

impl Args {
    /// The last positional is the ROM; every one before it must name a mode
    fn invocation(&self) -> Result<Invocation> {
        let (rom, modes) = self.args.split_last().context("missing ROM path")?;
        let modes = modes
            .iter()
            .map(|mode| -> Result<Mode> {
                let name = mode
                    .to_str()
                    .with_context(|| format!("invalid mode {:?}", mode))?;
                <Mode as ValueEnum>::from_str(name, true).map_err(|_| {
                    anyhow::anyhow!("unknown mode {:?}, expected hex, asm or noexec", name)
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Invocation {
            modes,
            rom: PathBuf::from(rom),
        })
    }

    fn settings(&self) -> Settings {
        Settings {
            hz: self.hz,
            seed: self.seed,
            max_steps: self.max_steps,
            scale: self.scale,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    SimpleLogger::new()
        .with_level(args.log_level)
        .init()
        .context("unable to install the logger")?;

    let invocation = args.invocation()?;
    let program = Program::open(&invocation.rom)
        .with_context(|| format!("unable to load {}", invocation.rom.display()))?;

    if invocation.has(Mode::Hex) {
        println!("{}", program.hex_dump());
    }
    if invocation.has(Mode::Asm) {
        println!("{}", listing(&program));
    }
    if invocation.has(Mode::Noexec) {
        return Ok(());
    }

    let settings = args.settings();
    #[cfg(feature = "sdl")]
    {
        if !args.headless {
            return run::windowed(program, &settings);
        }
    }
    #[cfg(not(feature = "sdl"))]
    {
        if !args.headless {
            info!("built without SDL support, running headless");
        }
    }
    run::headless(program, &settings)
}
