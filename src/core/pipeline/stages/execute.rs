//! Execute stage.

use crate::common::error::RuntimeWarning;
use crate::core::pipeline::engine::Pipeline;
use crate::core::units::{derive_flags, Alu, FlagOp};
use crate::isa::Instruction;

/// Record of what Execute did during one cycle, for tracing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecuteActivity {
    /// The 1-based instruction number executed.
    pub inst_number: u32,
    /// The instruction executed.
    pub instruction: Instruction,
}

/// Dispatches on the decoded instruction in ID/EX, performs its operation
/// per §4.1, updates flags per §4.2, and clears ID/EX. Runs only when
/// ID/EX is non-empty and stall is not asserted. BEQZ (taken) and BR both
/// write a new PC and trigger a flush of both latches.
pub fn execute_stage(pipeline: &mut Pipeline) -> (Option<ExecuteActivity>, Option<RuntimeWarning>) {
    if pipeline.stall {
        return (None, None);
    }

    let Some(entry) = pipeline.id_ex.peek() else {
        return (None, None);
    };
    pipeline.id_ex.clear();

    let warning = match entry.instruction {
        Instruction::Add { rd, rs } => {
            let a = pipeline.arch.gpr.read(rd);
            let b = pipeline.arch.gpr.read(rs);
            let result = Alu::add(a, b);
            pipeline.arch.gpr.write(rd, result);
            pipeline.arch.sreg = derive_flags(FlagOp::Add, a, b, result);
            None
        }
        Instruction::Sub { rd, rs } => {
            let a = pipeline.arch.gpr.read(rd);
            let b = pipeline.arch.gpr.read(rs);
            let result = Alu::sub(a, b);
            pipeline.arch.gpr.write(rd, result);
            pipeline.arch.sreg = derive_flags(FlagOp::Sub, a, b, result);
            None
        }
        Instruction::Mul { rd, rs } => {
            let a = pipeline.arch.gpr.read(rd);
            let b = pipeline.arch.gpr.read(rs);
            let result = Alu::mul(a, b);
            pipeline.arch.gpr.write(rd, result);
            pipeline.arch.sreg = derive_flags(FlagOp::Other, a, b, result);
            None
        }
        Instruction::Movi { rd, imm } => {
            pipeline.arch.gpr.write(rd, imm);
            pipeline.arch.sreg = derive_flags(FlagOp::Other, imm, 0, imm);
            None
        }
        Instruction::Beqz { rd, imm } => {
            let mut warning = None;
            if pipeline.arch.gpr.read(rd) == 0 {
                let pc = pipeline.arch.pc;
                let new_pc = (pc as i32 + imm as i32 - 1) as u16;
                pipeline.arch.pc = new_pc;
                warning = branch_out_of_bounds(pipeline, new_pc);
                pipeline.flush();
            }
            warning
        }
        Instruction::Andi { rd, imm } => {
            let a = pipeline.arch.gpr.read(rd);
            let result = Alu::andi(a, imm);
            pipeline.arch.gpr.write(rd, result);
            pipeline.arch.sreg = derive_flags(FlagOp::Other, a, 0, result);
            None
        }
        Instruction::Eor { rd, rs } => {
            let a = pipeline.arch.gpr.read(rd);
            let b = pipeline.arch.gpr.read(rs);
            let result = Alu::eor(a, b);
            pipeline.arch.gpr.write(rd, result);
            pipeline.arch.sreg = derive_flags(FlagOp::Other, a, b, result);
            None
        }
        Instruction::Br { rd, rs } => {
            let hi = pipeline.arch.gpr.read(rd) as u8 as u16;
            let lo = pipeline.arch.gpr.read(rs) as u8 as u16;
            let new_pc = ((hi << 8) | lo) >> 6;
            pipeline.arch.pc = new_pc;
            let warning = branch_out_of_bounds(pipeline, new_pc);
            pipeline.flush();
            warning
        }
        Instruction::Sal { rd, imm } => {
            let a = pipeline.arch.gpr.read(rd);
            let result = Alu::sal(a, imm);
            pipeline.arch.gpr.write(rd, result);
            pipeline.arch.sreg = derive_flags(FlagOp::Other, a, 0, result);
            None
        }
        Instruction::Sar { rd, imm } => {
            let a = pipeline.arch.gpr.read(rd);
            let result = Alu::sar(a, imm);
            pipeline.arch.gpr.write(rd, result);
            pipeline.arch.sreg = derive_flags(FlagOp::Other, a, 0, result);
            None
        }
        Instruction::Ldr { rd, imm } => {
            let result = pipeline.arch.dmem.read(imm) as i8;
            pipeline.arch.gpr.write(rd, result);
            pipeline.arch.sreg = derive_flags(FlagOp::Other, result, 0, result);
            None
        }
        Instruction::Str { rd, imm } => {
            let val = pipeline.arch.gpr.read(rd);
            pipeline.arch.dmem.write(imm, val as u8);
            None
        }
    };

    (
        Some(ExecuteActivity {
            inst_number: entry.inst_number,
            instruction: entry.instruction,
        }),
        warning,
    )
}

/// A branch target at or past the end of loaded instruction memory is a
/// warning, not an error (§7): PC is still updated and Fetch will
/// naturally halt once it notices PC is past end-of-program.
fn branch_out_of_bounds(pipeline: &Pipeline, target: u16) -> Option<RuntimeWarning> {
    if target as usize >= pipeline.arch.imem.loaded_count() {
        Some(RuntimeWarning::BranchOutOfBounds(target))
    } else {
        None
    }
}
