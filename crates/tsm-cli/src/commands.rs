use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tsm_brute_force::{solve, solve_sequential, SolverConfig};
use tsm_core::{random_matrix, read_matrix, write_matrix, GenerateOptions, MatrixRows};

use crate::args::{GenerateArgs, SolveArgs};
use crate::report::{render_json, render_text, Mode, Timings};

pub fn run_solve<W: Write>(args: &SolveArgs, out: &mut W) -> Result<()> {
    let started = Instant::now();

    let matrix = read_matrix(&args.file, args.cities)
        .with_context(|| format!("cannot load distance matrix from {}", args.file.display()))?;
    debug!("loaded {} cities from {}", matrix.len(), args.file.display());

    let (report, mode) = if args.sequential {
        (solve_sequential(&matrix)?, Mode::Sequential)
    } else {
        let mut config = SolverConfig::default().schedule(args.schedule);
        if let Some(threads) = args.threads {
            config.threads = threads;
        }
        (
            solve(&matrix, &config)?,
            Mode::Parallel {
                schedule: config.schedule,
            },
        )
    };

    let timings = Timings::new(started.elapsed(), report.stats.elapsed);
    if args.json {
        let json = render_json(&report, matrix.len(), mode, timings)?;
        writeln!(out, "{json}")?;
    } else {
        write!(out, "{}", render_text(&report, mode, &timings))?;
    }
    Ok(())
}

pub fn run_generate<W: Write>(args: &GenerateArgs, out: &mut W) -> Result<()> {
    let opts = GenerateOptions {
        cities: args.cities,
        max_weight: args.max_weight,
        symmetric: args.symmetric,
    };
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(args.seed);
    let matrix = random_matrix(&opts, &mut rng)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let is_json = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if is_json {
                serde_json::to_writer_pretty(&mut writer, &MatrixRows::from(matrix))?;
                writeln!(writer)?;
                writer.flush()?;
            } else {
                write_matrix(writer, &matrix)?;
            }
            info!(
                "wrote {} cities (seed {}) to {}",
                args.cities,
                args.seed,
                path.display()
            );
        }
        None => write_matrix(out, &matrix)?,
    }
    Ok(())
}
