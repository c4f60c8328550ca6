pub use chip8::{Chip8, Status};
pub use constants::DEFAULT_CLOCK_HZ;
pub use disassembler::{disassemble, listing, Disassembler};
pub use error::{ExecutionFault, LoadError};
pub use frame::FrameBuffer;
pub use instruction::{Instruction, Op};
pub use opcode::Opcode;
pub use peripherals::{Display, Entropy, Input, Keypad, RandomSource};
pub use program::Program;
pub use timer::{TimerClock, Timers};

mod chip8;
pub mod constants;
pub mod disassembler;
mod error;
mod frame;
pub mod instruction;
pub mod memory;
mod opcode;
pub mod operations;
mod peripherals;
mod program;
pub mod state;
mod timer;
