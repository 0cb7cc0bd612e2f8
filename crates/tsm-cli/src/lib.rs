//! Library half of the `tsm` binary: argument definitions, the two commands, report
//! rendering and exit-code mapping. Kept out of `main.rs` so it can be tested directly.

pub mod args;
pub mod commands;
pub mod exit;
pub mod report;

use std::io::Write;

pub use args::{Cli, Command};

/// Dispatch a parsed command line, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    match &cli.command {
        Command::Solve(args) => commands::run_solve(args, out),
        Command::Generate(args) => commands::run_generate(args, out),
    }
}
