use std::sync::Arc;

use log::{debug, error, trace};

use crate::constants::KEY_COUNT;
use crate::error::ExecutionFault;
use crate::frame::FrameBuffer;
use crate::memory::Memory;
use crate::operations::{self, Effect};
use crate::peripherals::{Display, Entropy, Input, Io, Keypad, RandomSource};
use crate::program::Program;
use crate::state::State;
use crate::timer::Timers;

/// Where the engine is in its fetch-decode-execute cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    /// An Fx0A instruction is waiting for a key to store in Vx
    AwaitingKey { register: u8 },
    Halted(ExecutionFault),
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - the CPU `state` and `memory`
///  - the `program` it was built from
///  - `keypad` with public interfaces for pressing and releasing keys
///  - its `status`; suspension on a key and halting are data, never a blocking call
///
/// Supplies interfaces for:
/// - advancing the CPU one instruction at a time
/// - advancing its timers; the host calls this at 60Hz, independently of `step`
/// - inspecting its display for rendering
pub struct Chip8<D = FrameBuffer, E = RandomSource> {
    state: State,
    memory: Memory,
    program: Program,
    keypad: Keypad,
    display: D,
    entropy: E,
    status: Status,
}

impl Chip8 {
    pub fn new(program: Program) -> Self {
        Self::with_peripherals(program, FrameBuffer::new(), RandomSource::new())
    }
}

impl<D: Display, E: Entropy> Chip8<D, E> {
    pub fn with_peripherals(program: Program, display: D, entropy: E) -> Self {
        let memory = Memory::with_program(program.bytes());
        Chip8 {
            state: State::new(),
            memory,
            program,
            keypad: Keypad::new(),
            display,
            entropy,
            status: Status::Ready,
        }
    }

    /// Puts the machine back to where it was right after loading
    /// - registers and timers are zeroed, the stack is emptied and the pc is at `MEM_START`
    /// - memory is reloaded from the program and the display is cleared
    pub fn reset(&mut self) {
        self.state.reset();
        self.memory = Memory::with_program(self.program.bytes());
        self.display.clear_screen();
        self.status = Status::Ready;
        debug!("reset");
    }

    /// Advances the CPU by a single instruction
    /// - does nothing while awaiting a keypress
    /// - returns the fault again once halted
    /// - otherwise fetches and executes the instruction at the pc
    pub fn step(&mut self) -> Result<(), ExecutionFault> {
        match self.status {
            Status::Ready => {}
            Status::AwaitingKey { .. } => return Ok(()),
            Status::Halted(fault) => return Err(fault),
        }

        let instruction = self.program.fetch(self.state.pc(), &self.memory);
        trace!(
            "{} v{:02X?} i{:04X} pc{:04X}",
            instruction.opcode,
            self.state.v,
            self.state.i(),
            self.state.pc()
        );

        let mut io = Io {
            display: &mut self.display,
            input: &self.keypad,
            entropy: &mut self.entropy,
        };
        match operations::execute(&instruction, &mut self.state, &mut self.memory, &mut io) {
            Ok(Effect::Continue) => Ok(()),
            Ok(Effect::AwaitKey { x }) => {
                debug!("awaiting key for V{:X}", x);
                self.status = Status::AwaitingKey { register: x };
                Ok(())
            }
            Err(fault) => {
                error!("halted: {}", fault);
                self.status = Status::Halted(fault);
                Err(fault)
            }
        }
    }

    /// Set the pressed status of key
    /// - resumes an engine awaiting a key, storing the key and moving past the Fx0A
    /// - keys outside the 16 key keypad are ignored
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        if key as usize >= KEY_COUNT {
            return;
        }
        self.keypad.press(key);
        if let Status::AwaitingKey { register } = self.status {
            debug!("resumed with key {:X} in V{:X}", key, register);
            self.state.v[register as usize] = key;
            self.state.advance();
            self.status = Status::Ready;
        }
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.keypad.release(key);
    }

    pub fn is_key_down(&self, key: u8) -> bool {
        self.keypad.is_key_down(key)
    }

    /// Decrements the delay and sound timers; meant to be called at 60Hz
    pub fn tick_timers(&mut self) {
        self.state.timers().tick();
    }

    /// A handle on the timers for hosts that tick them from another thread
    pub fn timers(&self) -> Arc<Timers> {
        Arc::clone(self.state.timers())
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}

impl<E: Entropy> Chip8<FrameBuffer, E> {
    /// Returns the FrameBuffer if the display should be redrawn
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.display.take_dirty() {
            Some(&self.display)
        } else {
            None
        }
    }
}
