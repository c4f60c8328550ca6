use crate::opcode::Opcode;

/// # Operations
/// The 35 Chip-8 operations, each carrying the operands its execute and disassemble rules need.
/// Any opcode pattern the instruction set doesn't define decodes to `Unmapped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// 00E0
    ClearScreen,
    /// 00EE
    Return,
    /// 0nnn; only meaningful on the original hardware
    Sys { nnn: u16 },
    /// 1nnn
    Jump { nnn: u16 },
    /// 2nnn
    Call { nnn: u16 },
    /// 3xkk
    SkipEqual { x: u8, kk: u8 },
    /// 4xkk
    SkipNotEqual { x: u8, kk: u8 },
    /// 5xy0
    SkipRegistersEqual { x: u8, y: u8 },
    /// 6xkk
    Load { x: u8, kk: u8 },
    /// 7xkk
    Add { x: u8, kk: u8 },
    /// 8xy0
    Move { x: u8, y: u8 },
    /// 8xy1
    Or { x: u8, y: u8 },
    /// 8xy2
    And { x: u8, y: u8 },
    /// 8xy3
    Xor { x: u8, y: u8 },
    /// 8xy4
    AddRegisters { x: u8, y: u8 },
    /// 8xy5
    Sub { x: u8, y: u8 },
    /// 8xy6
    ShiftRight { x: u8, y: u8 },
    /// 8xy7
    SubInverse { x: u8, y: u8 },
    /// 8xyE
    ShiftLeft { x: u8, y: u8 },
    /// 9xy0
    SkipRegistersNotEqual { x: u8, y: u8 },
    /// Annn
    LoadI { nnn: u16 },
    /// Bnnn
    JumpV0 { nnn: u16 },
    /// Cxkk
    Random { x: u8, kk: u8 },
    /// Dxyn
    Draw { x: u8, y: u8, n: u8 },
    /// Ex9E
    SkipKeyPressed { x: u8 },
    /// ExA1
    SkipKeyReleased { x: u8 },
    /// Fx07
    GetDelay { x: u8 },
    /// Fx0A
    AwaitKey { x: u8 },
    /// Fx15
    SetDelay { x: u8 },
    /// Fx18
    SetSound { x: u8 },
    /// Fx1E
    AddI { x: u8 },
    /// Fx29
    FontSprite { x: u8 },
    /// Fx33
    Bcd { x: u8 },
    /// Fx55
    StoreRegisters { x: u8 },
    /// Fx65
    ReadRegisters { x: u8 },
    Unmapped,
}

/// A decoded instruction: the raw opcode it was built from and the operation it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub opcode: Opcode,
    pub op: Op,
}

impl Instruction {
    /// Decodes a big-endian byte pair. Every pair maps to exactly one operation.
    pub fn decode(l: u8, r: u8) -> Self {
        Instruction::from(Opcode::new(l, r))
    }
}

impl From<Opcode> for Instruction {
    fn from(opcode: Opcode) -> Self {
        Instruction {
            opcode,
            op: decode(opcode),
        }
    }
}

/// Selects the correct Op for a given Opcode
///
/// Dispatches on the family first; 0x0, 0xE and 0xF then look at the whole second byte and
/// 0x8 at its low nibble.
pub fn decode(op: Opcode) -> Op {
    let (x, y, n, kk, nnn) = (op.x(), op.y(), op.n(), op.kk(), op.nnn());
    match op.family() {
        0x0 => match kk {
            0xE0 => Op::ClearScreen,
            0xEE => Op::Return,
            _ => Op::Sys { nnn },
        },
        0x1 => Op::Jump { nnn },
        0x2 => Op::Call { nnn },
        0x3 => Op::SkipEqual { x, kk },
        0x4 => Op::SkipNotEqual { x, kk },
        0x5 => Op::SkipRegistersEqual { x, y },
        0x6 => Op::Load { x, kk },
        0x7 => Op::Add { x, kk },
        0x8 => match n {
            0x0 => Op::Move { x, y },
            0x1 => Op::Or { x, y },
            0x2 => Op::And { x, y },
            0x3 => Op::Xor { x, y },
            0x4 => Op::AddRegisters { x, y },
            0x5 => Op::Sub { x, y },
            0x6 => Op::ShiftRight { x, y },
            0x7 => Op::SubInverse { x, y },
            0xE => Op::ShiftLeft { x, y },
            _ => Op::Unmapped,
        },
        0x9 => Op::SkipRegistersNotEqual { x, y },
        0xA => Op::LoadI { nnn },
        0xB => Op::JumpV0 { nnn },
        0xC => Op::Random { x, kk },
        0xD => Op::Draw { x, y, n },
        0xE => match kk {
            0x9E => Op::SkipKeyPressed { x },
            0xA1 => Op::SkipKeyReleased { x },
            _ => Op::Unmapped,
        },
        0xF => match kk {
            0x07 => Op::GetDelay { x },
            0x0A => Op::AwaitKey { x },
            0x15 => Op::SetDelay { x },
            0x18 => Op::SetSound { x },
            0x1E => Op::AddI { x },
            0x29 => Op::FontSprite { x },
            0x33 => Op::Bcd { x },
            0x55 => Op::StoreRegisters { x },
            0x65 => Op::ReadRegisters { x },
            _ => Op::Unmapped,
        },
        _ => Op::Unmapped,
    }
}
