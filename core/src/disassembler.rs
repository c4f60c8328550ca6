use std::slice;

use crate::constants::MEM_START;
use crate::instruction::{Instruction, Op};
use crate::program::Program;

/// The mnemonic an instruction is listed under.
pub fn mnemonic(op: &Op) -> &'static str {
    match op {
        Op::ClearScreen => "CLS",
        Op::Return => "RET",
        Op::Sys { .. } => "SYS",
        Op::Jump { .. } => "JMP",
        Op::Call { .. } => "CALL",
        Op::SkipEqual { .. } => "SE",
        Op::SkipNotEqual { .. } => "SNE",
        Op::SkipRegistersEqual { .. } => "SRE",
        Op::Load { .. } => "MOV",
        Op::Add { .. } => "ADD",
        Op::Move { .. } => "MOVR",
        Op::Or { .. } => "OR",
        Op::And { .. } => "AND",
        Op::Xor { .. } => "XOR",
        Op::AddRegisters { .. } => "ADDR",
        Op::Sub { .. } => "SUB",
        Op::ShiftRight { .. } => "SHR",
        Op::SubInverse { .. } => "SUBINV",
        Op::ShiftLeft { .. } => "SHL",
        Op::SkipRegistersNotEqual { .. } => "SRNE",
        Op::LoadI { .. } => "MOVI",
        Op::JumpV0 { .. } => "JMPV",
        Op::Random { .. } => "RNDMSK",
        Op::Draw { .. } => "DRAW",
        Op::SkipKeyPressed { .. } => "SKE",
        Op::SkipKeyReleased { .. } => "SKNE",
        Op::GetDelay { .. } => "GETDLY",
        Op::AwaitKey { .. } => "GETKEY",
        Op::SetDelay { .. } => "SETDLY",
        Op::SetSound { .. } => "SETSND",
        Op::AddI { .. } => "ADDI",
        Op::FontSprite { .. } => "SPRITE",
        Op::Bcd { .. } => "BCD",
        Op::StoreRegisters { .. } => "SAVE",
        Op::ReadRegisters { .. } => "LOAD",
        Op::Unmapped => "; unknown",
    }
}

/// Formats the operands of an instruction.
///
/// Registers are `V` + hex index and addresses are 3 hex digits. Bytes that are compared
/// with, moved into or added to a register are listed as signed decimals; the random mask
/// and the sprite height are unsigned.
pub fn operands(instruction: &Instruction) -> String {
    match instruction.op {
        Op::ClearScreen | Op::Return => String::new(),
        Op::Sys { nnn }
        | Op::Jump { nnn }
        | Op::Call { nnn }
        | Op::LoadI { nnn }
        | Op::JumpV0 { nnn } => format!("{:03X}", nnn),
        Op::SkipEqual { x, kk }
        | Op::SkipNotEqual { x, kk }
        | Op::Load { x, kk }
        | Op::Add { x, kk } => format!("V{:X}, {}", x, kk as i8),
        Op::Random { x, kk } => format!("V{:X}, {}", x, kk),
        Op::SkipRegistersEqual { x, y }
        | Op::Move { x, y }
        | Op::Or { x, y }
        | Op::And { x, y }
        | Op::Xor { x, y }
        | Op::AddRegisters { x, y }
        | Op::Sub { x, y }
        | Op::SubInverse { x, y }
        | Op::SkipRegistersNotEqual { x, y } => format!("V{:X}, V{:X}", x, y),
        Op::Draw { x, y, n } => format!("V{:X}, V{:X}, {:02}", x, y, n),
        Op::ShiftRight { x, .. }
        | Op::ShiftLeft { x, .. }
        | Op::SkipKeyPressed { x }
        | Op::SkipKeyReleased { x }
        | Op::GetDelay { x }
        | Op::AwaitKey { x }
        | Op::SetDelay { x }
        | Op::SetSound { x }
        | Op::AddI { x }
        | Op::FontSprite { x }
        | Op::Bcd { x }
        | Op::StoreRegisters { x }
        | Op::ReadRegisters { x } => format!("V{:X}", x),
        Op::Unmapped => format!("({:X})", instruction.opcode.family()),
    }
}

/// Renders one listing line: address, raw bytes, mnemonic and operands
/// ```text
/// 0200:   <6005>   MOV      V0, 5
/// ```
pub fn disassemble(instruction: &Instruction, address: u16) -> String {
    let line = format!(
        "{:04x}:   <{}>   {:<8} {}",
        address,
        instruction.opcode,
        mnemonic(&instruction.op),
        operands(instruction)
    );
    line.trim_end().to_string()
}

/// # Disassembler
/// Walks a Program front to back yielding one listing line per instruction.
///
/// The listing address is a cursor of its own that starts at `MEM_START` and moves 2
/// bytes per instruction; no engine state is involved.
pub struct Disassembler<'a> {
    instructions: slice::Iter<'a, Instruction>,
    cursor: u16,
}

impl<'a> Disassembler<'a> {
    pub fn new(program: &'a Program) -> Self {
        Disassembler {
            instructions: program.instructions().iter(),
            cursor: MEM_START,
        }
    }

    /// The address the next line will be listed at
    pub fn cursor(&self) -> u16 {
        self.cursor
    }
}

impl<'a> Iterator for Disassembler<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let instruction = self.instructions.next()?;
        let line = disassemble(instruction, self.cursor);
        self.cursor = self.cursor.wrapping_add(2);
        Some(line)
    }
}

/// The full listing of a program, one line per instruction
pub fn listing(program: &Program) -> String {
    Disassembler::new(program)
        .map(|line| line + "\n")
        .collect()
}
