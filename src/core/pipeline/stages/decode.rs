//! Decode stage.

use crate::common::error::DecodeError;
use crate::core::pipeline::engine::Pipeline;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::{Instruction, Opcode};

/// Record of what Decode did during one cycle, for tracing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeActivity {
    /// The 1-based instruction number decoded.
    pub inst_number: u32,
    /// The decoded instruction.
    pub instruction: Instruction,
}

/// Extracts fields, validates and sign-extends immediates, and writes
/// ID/EX, per §4.1/§4.3. Runs only when IF/ID is non-empty and ID/EX is
/// empty. Asserts the stall signal when the decoded instruction is BR,
/// since its target is unknown until Execute. On a decode failure, the
/// offending instruction is discarded: IF/ID is cleared, ID/EX stays
/// empty, and the error is returned for logging.
pub fn decode_stage(pipeline: &mut Pipeline) -> (Option<DecodeActivity>, Option<(u32, DecodeError)>) {
    if !pipeline.id_ex.is_empty() {
        return (None, None);
    }

    let Some(entry) = pipeline.if_id.peek() else {
        return (None, None);
    };

    match Instruction::decode(entry.word) {
        Ok(instruction) => {
            pipeline.arch.gpr.mark_touched(instruction.rd());
            if let Some(rs) = secondary_operand(instruction) {
                pipeline.arch.gpr.mark_touched(rs);
            }

            pipeline.id_ex.set(instruction, entry.inst_number);
            pipeline.if_id.clear();

            if instruction.opcode() == Opcode::Br {
                pipeline.stall = true;
            }

            (
                Some(DecodeActivity {
                    inst_number: entry.inst_number,
                    instruction,
                }),
                None,
            )
        }
        Err(err) => {
            pipeline.if_id.clear();
            (None, Some((entry.inst_number, err)))
        }
    }
}

/// The second register operand of an R-type instruction, if it has one.
fn secondary_operand(instruction: Instruction) -> Option<u8> {
    match instruction {
        Instruction::Add { rs, .. }
        | Instruction::Sub { rs, .. }
        | Instruction::Mul { rs, .. }
        | Instruction::Eor { rs, .. }
        | Instruction::Br { rs, .. } => Some(rs),
        _ => None,
    }
}
