//! Simulation harness.
//!
//! Wires the assembler, pipeline engine, and trace emitter together and
//! drives the fixed N+2 cycle loop (§4.3), mirroring the teacher's
//! `main.rs` drive loop plus `sim/loader.rs`'s role of getting a program
//! into memory before the core runs.

use std::fs;
use std::io::Write;
use std::time::Instant;

use crate::asm::{self, AssembleOutput};
use crate::common::error::SimError;
use crate::config::Config;
use crate::core::arch::ArchState;
use crate::core::pipeline::Pipeline;
use crate::stats::SimStats;
use crate::trace::{self, CycleTrace};

/// Runs one full simulation: reads `config.input`, assembles it, runs the
/// pipeline to completion, and writes `config.output` (the per-cycle trace
/// plus final report) and `config.errors` (assembly/decode diagnostics and
/// runtime warnings).
pub fn run(config: &Config) -> Result<SimStats, SimError> {
    let start = Instant::now();

    let source = fs::read_to_string(&config.input)?;
    let AssembleOutput { words, diagnostics } = asm::assemble(&source);
    println!(
        "Program loaded successfully with {} instructions.",
        words.len()
    );

    let mut arch = ArchState::new();
    let word_values: Vec<u16> = words.iter().map(|(word, _)| *word).collect();
    arch.imem.load(&word_values);
    let instruction_count = arch.imem.loaded_count();

    let mut pipeline = Pipeline::new(arch);
    let mut records: Vec<(u32, CycleTrace, ArchState)> = Vec::new();

    pipeline.run(instruction_count, |cycle, activity, state| {
        records.push((cycle, CycleTrace::from(activity), state.clone()));
    });

    let mut output = fs::File::create(&config.output)?;
    let mut errors = fs::File::create(&config.errors)?;

    for diagnostic in &diagnostics {
        writeln!(
            errors,
            "line {}: {} (\"{}\")",
            diagnostic.line_number, diagnostic.error, diagnostic.line
        )?;
    }

    let mut stats = SimStats {
        instructions_assembled: instruction_count,
        assemble_errors: diagnostics.len(),
        ..SimStats::default()
    };

    for (cycle, cycle_trace, state) in &records {
        if cycle_trace.execute.is_some() {
            stats.instructions_executed += 1;
        }
        if let Some((inst_number, err)) = &cycle_trace.decode_error {
            stats.decode_errors += 1;
            writeln!(errors, "cycle {cycle}: inst {inst_number} decode error: {err}")?;
        }
        if let Some(warning) = &cycle_trace.warning {
            stats.warnings += 1;
            writeln!(errors, "cycle {cycle}: {warning}")?;
        }

        trace::write_cycle(&mut output, *cycle, cycle_trace, state)?;
        stats.cycles = *cycle;
    }

    if let Some((_, _, last_state)) = records.last() {
        trace::write_final_report(&mut output, last_state)?;
    } else {
        trace::write_final_report(&mut output, &pipeline.arch)?;
    }

    stats.elapsed = start.elapsed();
    Ok(stats)
}
