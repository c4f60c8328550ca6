use std::sync::Arc;

use crate::constants::{ADDRESS_MASK, MEM_START, STACK_SIZE};
use crate::error::ExecutionFault;
use crate::timer::Timers;

/// Stack pointer value of an empty call stack.
pub const STACK_EMPTY: u8 = 0;

/// A snapshot of the Chip-8 CPU
///
/// ## Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 12-bit memory address register
///
/// ## Counter
/// - (pc) a 12-bit program counter, always even
///
/// ## Stack
/// - 16 return addresses and a stack pointer counting how many are in use
///
/// ## Timers
/// - 2 8-bit timers (delay & sound), shared with the host
///
/// `i` and `pc` are reduced to the 12-bit address space on every write.
#[derive(Debug)]
pub struct State {
    pub v: [u8; 16],
    i: u16,
    pc: u16,
    sp: u8,
    stack: [u16; STACK_SIZE],
    timers: Arc<Timers>,
}

impl State {
    pub fn new() -> Self {
        State {
            v: [0; 16],
            i: 0,
            pc: MEM_START,
            sp: STACK_EMPTY,
            stack: [0; STACK_SIZE],
            timers: Arc::new(Timers::new()),
        }
    }

    /// Zeroes registers and timers and points the pc back at the start of the program.
    /// The timers keep their identity so hosts holding them stay attached.
    pub fn reset(&mut self) {
        self.v = [0; 16];
        self.i = 0;
        self.pc = MEM_START;
        self.sp = STACK_EMPTY;
        self.stack = [0; STACK_SIZE];
        self.timers.reset();
    }

    pub fn i(&self) -> u16 {
        self.i
    }

    pub fn set_i(&mut self, address: u16) {
        self.i = address & ADDRESS_MASK;
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// The low bit is dropped so instructions stay word aligned
    pub fn set_pc(&mut self, address: u16) {
        self.pc = address & ADDRESS_MASK & !0x1;
    }

    /// Moves on to the next instruction
    pub fn advance(&mut self) {
        self.set_pc(self.pc.wrapping_add(2));
    }

    /// Skips the next instruction if `condition` holds, otherwise moves on to it
    pub fn skip_if(&mut self, condition: bool) {
        let step = if condition { 4 } else { 2 };
        self.set_pc(self.pc.wrapping_add(step));
    }

    pub fn vf(&self) -> u8 {
        self.v[0xF]
    }

    pub fn set_vf(&mut self, flag: bool) {
        self.v[0xF] = u8::from(flag);
    }

    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// The return addresses currently on the stack, oldest first
    pub fn stack(&self) -> &[u16] {
        &self.stack[..self.sp as usize]
    }

    pub fn push(&mut self, address: u16) -> Result<(), ExecutionFault> {
        let slot = self
            .stack
            .get_mut(self.sp as usize)
            .ok_or(ExecutionFault::StackOverflow { pc: self.pc })?;
        *slot = address;
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16, ExecutionFault> {
        if self.sp == STACK_EMPTY {
            return Err(ExecutionFault::StackUnderflow { pc: self.pc });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp as usize])
    }

    pub fn delay_timer(&self) -> u8 {
        self.timers.delay()
    }

    pub fn set_delay_timer(&mut self, value: u8) {
        self.timers.set_delay(value);
    }

    pub fn sound_timer(&self) -> u8 {
        self.timers.sound()
    }

    pub fn set_sound_timer(&mut self, value: u8) {
        self.timers.set_sound(value);
    }

    pub fn timers(&self) -> &Arc<Timers> {
        &self.timers
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
