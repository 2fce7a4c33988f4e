//! Crate-wide error and diagnostic types.
//!
//! Only I/O failure is fatal (see §7 of the simulator's design). Assembly
//! and decode problems are collected as diagnostics rather than propagated,
//! so a malformed line or a bad instruction word never stops a simulation
//! that has otherwise loaded successfully.

use thiserror::Error;

/// Fatal errors that abort the simulator before or during a run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Unable to open the source program or create an output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A problem encountered while assembling one line of source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// The line did not match any of the twelve mnemonics.
    #[error("unrecognized instruction \"{0}\"")]
    UnknownMnemonic(String),

    /// The mnemonic was recognized but the operands did not match its format.
    #[error("malformed operands for {mnemonic}: \"{line}\"")]
    MalformedOperands {
        /// The mnemonic that was recognized.
        mnemonic: String,
        /// The full source line, for diagnostics.
        line: String,
    },

    /// A register operand was outside 0..63.
    #[error("register operand R{0} is out of range (valid range is 0-63)")]
    RegisterOutOfRange(i64),

    /// An immediate operand was outside the range its opcode allows.
    #[error("immediate value {value} is out of range (valid range is {min}-{max})")]
    ImmediateOutOfRange {
        /// The offending immediate value as parsed.
        value: i64,
        /// Minimum allowed value (inclusive).
        min: i64,
        /// Maximum allowed value (inclusive).
        max: i64,
    },

    /// The program has more lines than instruction memory has slots.
    #[error("program too large to fit in instruction memory ({0} slots)")]
    ProgramTooLarge(usize),
}

/// A problem encountered while decoding an already-encoded instruction word.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The top nibble did not match any of the twelve opcodes.
    #[error("unknown opcode {0:#03x}")]
    UnknownOpcode(u8),

    /// An unsigned-immediate opcode carried an immediate outside 0..63.
    ///
    /// This can only happen for a hand-crafted or corrupted instruction
    /// word; the assembler itself rejects such immediates before they are
    /// ever encoded (see [`AssembleError::ImmediateOutOfRange`]).
    #[error("immediate {0} out of range for this opcode (valid range is 0-63)")]
    ImmediateOutOfRange(u8),
}

/// A non-fatal condition raised by the running pipeline, distinct from a
/// diagnosed assembly or decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeWarning {
    /// A branch target landed at or past the end of instruction memory.
    #[error("branch target out of bounds, PC={0}")]
    BranchOutOfBounds(u16),
}
