//! Runtime interpreter error implementation

use um_asm::{PanicReason, Platter};

use std::io;
use thiserror::Error;

/// Interpreter runtime error variants.
#[derive(Debug, Error)]
pub enum InterpreterError {
    /// A fetched platter does not decode to any instruction.
    #[error("unknown command {platter:#010x} at offset {pc}")]
    InvalidInstruction {
        /// The undecodable platter.
        platter: Platter,
        /// Program offset it was fetched from.
        pc: Platter,
    },
    /// An instruction ran into behavior the machine leaves undefined; this
    /// implementation stops and reports it.
    #[error("{reason} at offset {pc} (platter {platter:#010x})")]
    PanicInstruction {
        /// What went wrong.
        reason: PanicReason,
        /// The instruction that caused it.
        platter: Platter,
        /// Program offset it was fetched from.
        pc: Platter,
    },
    /// The program counter left the program array.
    #[error("execution fell off the program at offset {pc}")]
    ProgramCounterOverflow {
        /// The out-of-range offset.
        pc: Platter,
    },
}

/// Scroll file loading errors.
#[derive(Debug, Error)]
pub enum ScrollError {
    /// The scroll could not be read from the host.
    #[error("opening um: {0}")]
    Io(#[from] io::Error),
    /// The file is not a whole number of platters.
    #[error("scroll is not a whole number of platters ({0} bytes)")]
    Truncated(usize),
}

/// Snapshot serialization errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The file does not start with the snapshot magic.
    #[error("corrupted snapshot!")]
    BadMagic,
    /// The host failed the underlying read or write.
    #[error("{0}")]
    Io(#[from] io::Error),
}
