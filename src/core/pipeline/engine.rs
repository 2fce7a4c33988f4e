//! The pipeline orchestrator.
//!
//! A single [`Pipeline`] owns all architectural state and both latches and
//! drives them through the fixed-length cycle loop described in §4.3/§5 of
//! the governing design: within one cycle, Execute runs first, then Decode,
//! then Fetch, so each stage reads the latch its predecessor filled in the
//! *previous* cycle (Design Note 9 — "Cyclic pipeline ↔ architectural
//! state"). Stage functions never own state themselves; they take `&mut
//! Pipeline` and mutate the latches and [`ArchState`] only through it.

use crate::common::error::{DecodeError, RuntimeWarning};
use crate::core::arch::ArchState;
use crate::core::pipeline::latches::{IfId, IdEx};
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage};
use crate::core::pipeline::traits::PipelineLatch;

/// What happened in each of the three stages during one cycle, for tracing.
#[derive(Clone, Debug, Default)]
pub struct CycleActivity {
    /// Instruction fetched this cycle, if any.
    pub fetch: Option<crate::core::pipeline::stages::fetch::FetchActivity>,
    /// Instruction decoded this cycle, if any.
    pub decode: Option<crate::core::pipeline::stages::decode::DecodeActivity>,
    /// A decode error raised this cycle, if any, paired with the offending
    /// instruction number.
    pub decode_error: Option<(u32, DecodeError)>,
    /// Instruction executed this cycle, if any.
    pub execute: Option<crate::core::pipeline::stages::execute::ExecuteActivity>,
    /// A runtime warning raised by Execute this cycle, if any.
    pub warning: Option<RuntimeWarning>,
}

/// Owns architectural state, the two inter-stage latches, and the
/// single-cycle stall signal.
pub struct Pipeline {
    /// All architectural state: registers, PC, SREG, and both memories.
    pub arch: ArchState,
    /// The IF/ID latch.
    pub if_id: IfId,
    /// The ID/EX latch.
    pub id_ex: IdEx,
    /// Suppresses this cycle's Fetch when Decode has just placed a BR into
    /// ID/EX; cleared at the end of every cycle.
    pub stall: bool,
}

impl Pipeline {
    /// Creates a pipeline with zeroed architectural state and empty
    /// latches.
    pub fn new(arch: ArchState) -> Self {
        Self {
            arch,
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            stall: false,
        }
    }

    /// Clears both latches. Called by Execute when a branch is taken
    /// (§4.3's flush semantics).
    pub fn flush(&mut self) {
        self.if_id.flush();
        self.id_ex.flush();
    }

    /// Runs exactly one cycle: Execute, then Decode, then Fetch, then
    /// clears the stall signal. Returns a record of what each stage did,
    /// for the trace emitter.
    pub fn run_cycle(&mut self) -> CycleActivity {
        let (execute, warning) = execute_stage(self);
        let (decode, decode_error) = decode_stage(self);
        let fetch = fetch_stage(self);
        self.stall = false;

        CycleActivity {
            fetch,
            decode,
            decode_error,
            execute,
            warning,
        }
    }

    /// Runs the fixed N+2 cycle budget for a program of `instruction_count`
    /// instructions (§4.3), invoking `on_cycle` with the 1-based cycle
    /// number and that cycle's activity after each cycle completes.
    pub fn run(&mut self, instruction_count: usize, mut on_cycle: impl FnMut(u32, &CycleActivity, &ArchState)) {
        let total_cycles = instruction_count as u32 + 2;
        for cycle in 1..=total_cycles {
            let activity = self.run_cycle();
            on_cycle(cycle, &activity, &self.arch);
        }
    }
}
