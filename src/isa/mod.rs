//! Instruction Set Architecture: the 16-bit encoding, opcode table, and the
//! decoded instruction representation used by Decode and Execute.

/// Decoded, tagged instruction variants and their encode/decode logic.
pub mod instruction;

/// The twelve-entry opcode table.
pub mod opcode;

pub use instruction::{sign_extend_6, Instruction, Reg};
pub use opcode::Opcode;
