//! Line-oriented assembler: fixed assembly syntax in, 16-bit words out.
//!
//! One mnemonic per line, per §6's grammar. Blank and whitespace-only lines
//! are silently skipped; anything else that fails to parse is diagnosed and
//! skipped, and the remaining program continues assembling (§7 — assembly
//! errors are recoverable).

mod parser;

use crate::common::error::AssembleError;
use crate::core::arch::memory::INSTRUCTION_MEMORY_SIZE;
use crate::isa::Instruction;

/// One diagnosed problem with a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleDiagnostic {
    /// 1-based source line number.
    pub line_number: u32,
    /// The offending line, trimmed.
    pub line: String,
    /// What went wrong.
    pub error: AssembleError,
}

/// The result of assembling a whole source program.
#[derive(Debug, Clone, Default)]
pub struct AssembleOutput {
    /// Encoded words in file order, paired with the 1-based source line
    /// number they came from. Instruction numbers (used for tracing) are
    /// assigned separately, in this same order, starting at 1, by
    /// [`crate::core::arch::memory::InstructionMemory::load`].
    pub words: Vec<(u16, u32)>,
    /// Diagnostics for lines that failed to assemble, in file order.
    pub diagnostics: Vec<AssembleDiagnostic>,
}

/// Assembles a whole source program, one line at a time, in file order.
pub fn assemble(source: &str) -> AssembleOutput {
    let mut words = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line_number = (index + 1) as u32;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if words.len() >= INSTRUCTION_MEMORY_SIZE {
            diagnostics.push(AssembleDiagnostic {
                line_number,
                line: trimmed.to_string(),
                error: AssembleError::ProgramTooLarge(INSTRUCTION_MEMORY_SIZE),
            });
            continue;
        }

        match parser::parse_line(trimmed) {
            Ok(instruction) => words.push((encode(instruction), line_number)),
            Err(error) => diagnostics.push(AssembleDiagnostic {
                line_number,
                line: trimmed.to_string(),
                error,
            }),
        }
    }

    AssembleOutput { words, diagnostics }
}

fn encode(instruction: Instruction) -> u16 {
    instruction.encode()
}
