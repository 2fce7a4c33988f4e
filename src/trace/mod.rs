//! Per-cycle trace and final-report formatting.
//!
//! Rendering is split into small, testable functions rather than one
//! monolithic print routine, translating the original reference program's
//! `End_program`/per-cycle `printf` calls into the teacher's idiom of
//! formatting helpers over a `Write` sink.

use std::io::{self, Write};

use crate::common::error::{DecodeError, RuntimeWarning};
use crate::core::arch::ArchState;
use crate::core::pipeline::stages::decode::DecodeActivity;
use crate::core::pipeline::stages::execute::ExecuteActivity;
use crate::core::pipeline::stages::fetch::FetchActivity;

/// What each of the three stages did during one cycle, ready to format.
#[derive(Clone, Debug, Default)]
pub struct CycleTrace {
    /// Instruction fetched this cycle, if any.
    pub fetch: Option<FetchActivity>,
    /// Instruction decoded this cycle, if any.
    pub decode: Option<DecodeActivity>,
    /// A decode failure this cycle, if any.
    pub decode_error: Option<(u32, DecodeError)>,
    /// Instruction executed this cycle, if any.
    pub execute: Option<ExecuteActivity>,
    /// A runtime warning raised this cycle, if any.
    pub warning: Option<RuntimeWarning>,
}

impl From<&crate::core::pipeline::CycleActivity> for CycleTrace {
    fn from(activity: &crate::core::pipeline::CycleActivity) -> Self {
        CycleTrace {
            fetch: activity.fetch,
            decode: activity.decode,
            decode_error: activity.decode_error.clone(),
            execute: activity.execute,
            warning: activity.warning,
        }
    }
}

/// Writes the five-part per-cycle block described in §6:
/// a start banner, the active Fetch/Decode/Execute operations, a dump of
/// non-zero registers/PC/SREG, a dump of non-zero data memory, and an end
/// marker.
pub fn write_cycle(out: &mut impl Write, cycle: u32, trace: &CycleTrace, state: &ArchState) -> io::Result<()> {
    writeln!(out, "### START OF CYCLE {cycle} DATA ###")?;

    match trace.fetch {
        Some(f) => writeln!(out, "Fetch: inst {} word=0x{:04X}", f.inst_number, f.word)?,
        None => writeln!(out, "Fetch: (idle)")?,
    }

    match &trace.decode {
        Some(d) => writeln!(out, "Decode: inst {} {:?}", d.inst_number, d.instruction)?,
        None => match &trace.decode_error {
            Some((inst_number, err)) => writeln!(out, "Decode: inst {inst_number} error: {err}")?,
            None => writeln!(out, "Decode: (idle)")?,
        },
    }

    match &trace.execute {
        Some(e) => writeln!(out, "Execute: inst {} {:?}", e.inst_number, e.instruction)?,
        None => writeln!(out, "Execute: (idle)")?,
    }

    if let Some(warning) = &trace.warning {
        writeln!(out, "Warning: {warning}")?;
    }

    write_nonzero_registers(out, state)?;
    writeln!(out, "PC: {}", state.pc)?;
    writeln!(out, "SREG: {}", state.sreg)?;
    write_nonzero_data_memory(out, state)?;

    writeln!(out, "### END OF CYCLE {cycle} DATA ###")?;
    Ok(())
}

/// Writes the post-run report: PC, bit-tabular SREG (reserved bits as
/// `X`), non-zero registers, all non-zero instruction words, and all
/// non-zero data-memory locations, matching the original reference
/// program's `End_program` sections.
pub fn write_final_report(out: &mut impl Write, state: &ArchState) -> io::Result<()> {
    writeln!(out, "Final CPU State:")?;
    writeln!(out, "PC: {}", state.pc)?;

    writeln!(out, "Status Register (SREG):")?;
    writeln!(out, "7 | 6 | 5 | C | V | N | S | Z")?;
    writeln!(out, "-------------------------------")?;
    writeln!(out, "{}", state.sreg.bit_table())?;

    writeln!(out, "Registers:")?;
    write_nonzero_registers(out, state)?;

    writeln!(out, "Instruction Memory:")?;
    for (addr, word) in state.imem.nonzero() {
        writeln!(out, "Instruction {addr}: 0x{word:04X}")?;
    }

    writeln!(out, "Data Memory:")?;
    write_nonzero_data_memory(out, state)?;

    writeln!(out, "End of Program Execution.")?;
    Ok(())
}

fn write_nonzero_registers(out: &mut impl Write, state: &ArchState) -> io::Result<()> {
    for (idx, value) in state.gpr.iter() {
        if value != 0 {
            writeln!(out, "R{idx}: {value}")?;
        }
    }
    Ok(())
}

fn write_nonzero_data_memory(out: &mut impl Write, state: &ArchState) -> io::Result<()> {
    for (addr, value) in state.dmem.nonzero() {
        writeln!(out, "Memory[{addr}]: {value}")?;
    }
    Ok(())
}
