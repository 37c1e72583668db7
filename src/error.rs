//! Fatal error taxonomy for the interpreter.

use thiserror::Error;

/// All fatal conditions the interpreter can encounter.
///
/// Every variant terminates the VM; there is no in-band recovery. The CLI
/// boundary is the only place an [`UmError`] is turned into a stderr message
/// and a process exit code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UmError {
    /// Opcode field (bits 31..28) did not name one of the fourteen operations.
    #[error("unknown opcode {0}")]
    UnknownOpcode(u32),

    /// DIV executed with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// get/put/unmap addressed a segment id with no mapped segment.
    #[error("segment {0} is not mapped")]
    SegmentNotMapped(u32),

    /// get/put addressed an offset at or past the end of a mapped segment.
    #[error("offset {offset} out of bounds for segment {segment} (len {len})")]
    OffsetOutOfBounds { segment: u32, offset: u32, len: u32 },

    /// UNMAP was called on segment 0.
    #[error("cannot unmap segment 0")]
    UnmapSegmentZero,

    /// OUT register held a value that does not fit in a byte.
    #[error("output value {0} does not fit in a byte")]
    OutputOutOfRange(u32),

    /// The program counter ran past the end of segment 0 without a HALT.
    #[error("program counter ran off the end of segment 0")]
    ProgramCounterOverrun,

    /// The loader's input stream ended mid-word.
    #[error("short read while loading program: expected {expected} bytes, got {got}")]
    ShortRead { expected: u64, got: u64 },

    /// I/O failure opening the program file or touching stdio.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for UmError {
    fn from(e: std::io::Error) -> Self {
        UmError::Io(e.to_string())
    }
}

pub type UmResult<T> = Result<T, UmError>;
