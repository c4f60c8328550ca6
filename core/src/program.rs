use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;

use crate::constants::{MAX_PROGRAM_LEN, MEM_START};
use crate::error::LoadError;
use crate::instruction::Instruction;
use crate::memory::Memory;

/// # Program
/// A ROM decoded once at load time: one Instruction per 2-byte word, indexed by its
/// offset from `MEM_START`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    bytes: Vec<u8>,
    instructions: Vec<Instruction>,
}

impl Program {
    /// Validates a raw big-endian instruction stream and decodes it
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, LoadError> {
        if bytes.len() % 2 != 0 {
            return Err(LoadError::OddLength { len: bytes.len() });
        }
        if bytes.len() > MAX_PROGRAM_LEN {
            return Err(LoadError::too_large(bytes.len()));
        }
        let instructions = bytes
            .chunks_exact(2)
            .map(|word| Instruction::decode(word[0], word[1]))
            .collect();
        Ok(Program {
            bytes,
            instructions,
        })
    }

    /// Load a rom from some reader
    ///
    /// # Arguments
    /// * `reader` a reader that yields a ROM
    pub fn load(reader: &mut dyn Read) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(bytes)
    }

    /// Load a rom from a file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        let program = Self::load(&mut reader)?;
        info!(
            "loaded {} ({} bytes, {} instructions)",
            path.display(),
            program.bytes.len(),
            program.len()
        );
        Ok(program)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The decoded instruction stored at `address`, if the address falls on a program word
    pub fn get(&self, address: u16) -> Option<&Instruction> {
        let offset = address.checked_sub(MEM_START)?;
        if offset % 2 != 0 {
            return None;
        }
        self.instructions.get(offset as usize / 2)
    }

    /// The instruction to execute at `address`.
    ///
    /// The pre-decoded instruction is used while memory still holds its bytes; anything
    /// else (addresses outside the program, or words the program overwrote) is decoded
    /// from memory on the spot.
    pub fn fetch(&self, address: u16, memory: &Memory) -> Instruction {
        let opcode = memory.opcode_at(address);
        match self.get(address) {
            Some(instruction) if instruction.opcode == opcode => *instruction,
            _ => Instruction::from(opcode),
        }
    }

    /// Renders the program as words, 8 per line, each line prefixed with its address
    /// ```text
    /// 0200:   6005 7003 2204 00ee
    /// ```
    pub fn hex_dump(&self) -> String {
        self.instructions
            .chunks(8)
            .enumerate()
            .map(|(line, words)| {
                let address = MEM_START as usize + line * 16;
                let words: Vec<String> = words.iter().map(|w| w.opcode.to_string()).collect();
                format!("{:04x}:   {}\n", address, words.join(" "))
            })
            .collect()
    }
}
