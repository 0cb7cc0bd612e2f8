use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tsm_brute_force::Schedule;

/// Exhaustive solver for the shortest open path from city 0 through every city.
#[derive(Debug, Parser)]
#[command(name = "tsm", author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find the minimum-cost path through a distance matrix
    Solve(SolveArgs),
    /// Write a random distance matrix
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Distance matrix: whitespace-separated integers in row-major order, or a `.json` file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of cities; inferred from the file when omitted
    #[arg(short = 'n', long)]
    pub cities: Option<usize>,

    /// Worker threads [default: available parallelism]
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// How second-city branches are assigned to workers
    #[arg(long, default_value_t = Schedule::Static)]
    pub schedule: Schedule,

    /// Run the single-threaded search instead
    #[arg(long, conflicts_with = "threads")]
    pub sequential: bool,

    /// Print a JSON document instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of cities
    #[arg(value_name = "CITIES")]
    pub cities: usize,

    /// Seed for the random generator
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Largest off-diagonal weight
    #[arg(long, default_value_t = 100)]
    pub max_weight: u32,

    /// Make weight(i, j) equal weight(j, i)
    #[arg(long)]
    pub symmetric: bool,

    /// Output file (`.json` writes JSON); stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
