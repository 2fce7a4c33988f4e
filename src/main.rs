//! Pipeline simulator CLI.
//!
//! Parses arguments, prints a short configuration banner, runs the
//! simulation to completion, and prints the final statistics summary.

use clap::Parser;
use std::process;

extern crate pipesim;

use pipesim::config::Config;
use pipesim::sim;

fn main() {
    let config = Config::parse();

    println!("Pipeline Simulator");
    println!("------------------");
    println!("Input:  {}", config.input);
    println!("Output: {}", config.output);
    println!("Errors: {}", config.errors);
    println!("------------------");

    match sim::run(&config) {
        Ok(stats) => {
            stats.print();
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
