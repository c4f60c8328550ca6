use std::io;

use thiserror::Error;

use crate::constants::MAX_PROGRAM_LEN;

/// Reasons a ROM can't become a Program. Nothing is executed when loading fails.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read ROM: {0}")]
    Io(#[from] io::Error),

    #[error("the program should have an even amount of bytes, got {len}")]
    OddLength { len: usize },

    #[error("ROM is too large ({len} bytes), max size is {max} bytes")]
    TooLarge { len: usize, max: usize },
}

impl LoadError {
    pub(crate) fn too_large(len: usize) -> Self {
        LoadError::TooLarge {
            len,
            max: MAX_PROGRAM_LEN,
        }
    }
}

/// Conditions that halt a running engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionFault {
    #[error("stack overflow: call at {pc:#06X} with a full call stack")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: return at {pc:#06X} with an empty call stack")]
    StackUnderflow { pc: u16 },
}
