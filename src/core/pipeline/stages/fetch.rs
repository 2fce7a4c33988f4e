//! Fetch stage.

use crate::core::pipeline::engine::Pipeline;

/// Record of what Fetch did during one cycle, for tracing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchActivity {
    /// The 1-based instruction number fetched.
    pub inst_number: u32,
    /// The raw 16-bit word fetched.
    pub word: u16,
}

/// Reads `InstructionMem[PC]`, writes it into IF/ID, and advances PC by
/// one, per §4.3. Skipped if the stall signal is asserted or PC has
/// reached end-of-program.
pub fn fetch_stage(pipeline: &mut Pipeline) -> Option<FetchActivity> {
    if pipeline.stall {
        return None;
    }

    let pc = pipeline.arch.pc;
    if pc as usize >= pipeline.arch.imem.loaded_count() {
        return None;
    }

    let slot = pipeline.arch.imem.get(pc)?;
    pipeline.if_id.set(slot.word, slot.inst_number);
    pipeline.arch.pc = pc.wrapping_add(1);

    Some(FetchActivity {
        inst_number: slot.inst_number,
        word: slot.word,
    })
}
