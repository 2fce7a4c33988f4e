//! Command-line configuration.
//!
//! Resolves the three file paths the simulator needs, in priority order: an
//! explicit CLI flag, then an environment variable, then a literal default
//! (§6), using `clap`'s derive API the way the teacher's `main.rs` `Args`
//! struct does.

use clap::Parser;

/// Command-line arguments for the pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Cycle-accurate 8-bit three-stage pipeline simulator")]
pub struct Config {
    /// Path to the source assembly program.
    #[arg(short, long, env = "PIPESIM_INPUT", default_value = "program.txt")]
    pub input: String,

    /// Path to write the per-cycle trace to.
    #[arg(short, long, env = "PIPESIM_OUTPUT", default_value = "cycledata.txt")]
    pub output: String,

    /// Path to write the assembly/decode error log to.
    #[arg(short, long, env = "PIPESIM_ERRORS", default_value = "errorlog.txt")]
    pub errors: String,
}
