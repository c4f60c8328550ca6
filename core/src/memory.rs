use crate::constants::{FONT_START, MEM_SIZE, MEM_START, SPRITE_SHEET};
use crate::opcode::Opcode;

/// # Memory
/// 4096 bytes of addressable memory.
///
/// ```text
/// 0x000 - 0x050  sprite sheet
/// 0x050 - 0x200  reserved for the interpreter
/// 0x200 - 0xF00  program
/// 0xF00 - 0x1000 display region
/// ```
///
/// Every address is reduced modulo 4096, so no access can land outside the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    /// Fresh memory with the sprite sheet in place
    pub fn new() -> Self {
        let mut memory = Memory {
            bytes: vec![0; MEM_SIZE].into_boxed_slice(),
        };
        memory.write_slice(FONT_START, &SPRITE_SHEET);
        memory
    }

    /// Fresh memory with `program` loaded at `MEM_START`
    pub fn with_program(program: &[u8]) -> Self {
        let mut memory = Memory::new();
        memory.write_slice(MEM_START, program);
        memory
    }

    fn index(address: u16) -> usize {
        address as usize % MEM_SIZE
    }

    pub fn read(&self, address: u16) -> u8 {
        self.bytes[Self::index(address)]
    }

    pub fn write(&mut self, address: u16, byte: u8) {
        self.bytes[Self::index(address)] = byte;
    }

    /// Reads `len` bytes starting at `address`, wrapping past the end of memory
    pub fn read_slice(&self, address: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.bytes[(address as usize + offset) % MEM_SIZE])
            .collect()
    }

    /// Writes `data` starting at `address`, wrapping past the end of memory
    pub fn write_slice(&mut self, address: u16, data: &[u8]) {
        for (offset, byte) in data.iter().enumerate() {
            self.bytes[(address as usize + offset) % MEM_SIZE] = *byte;
        }
    }

    /// Gets the opcode at `address`.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn opcode_at(&self, address: u16) -> Opcode {
        Opcode::new(self.read(address), self.read(address.wrapping_add(1)))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
