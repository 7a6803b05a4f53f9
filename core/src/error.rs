use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading or running a program.
///
/// All of these indicate a malformed program (or a bad ROM file) rather than
/// a transient condition, so nothing here is worth retrying.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A memory access landed outside of the 4096 addressable bytes
    #[error("memory access out of bounds at {address:#06X}")]
    OutOfBounds { address: usize },

    /// A CALL was made with all 16 stack slots in use
    #[error("stack overflow at pc {pc:#06X}")]
    StackOverflow { pc: u16 },

    /// A RET was made with nothing on the stack
    #[error("stack underflow at pc {pc:#06X}")]
    StackUnderflow { pc: u16 },

    #[error("ROM is {size} bytes but only {capacity} bytes are available")]
    RomTooLarge { size: usize, capacity: usize },

    /// An unrecognized instruction was fetched while running in strict mode
    #[error("illegal opcode {op:04X} at pc {pc:#06X}")]
    IllegalOpcode { op: u16, pc: u16 },

    #[error("unable to read ROM: {0}")]
    Io(#[from] io::Error),
}
