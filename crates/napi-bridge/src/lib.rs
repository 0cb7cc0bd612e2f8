#![deny(clippy::all)]

use napi::{Error, Result};
use napi_derive::napi;
use tsm_brute_force::{Schedule, SearchReport, SolverConfig};
use tsm_core::DistanceMatrix;

#[napi(object)]
#[derive(Clone, Debug)]
pub struct TourSolution {
    pub path: Vec<u32>,
    pub cost: f64,
    pub tours_evaluated: f64,
    pub elapsed_ms: f64,
}

impl From<SearchReport> for TourSolution {
    fn from(report: SearchReport) -> Self {
        TourSolution {
            path: report.solution.path.iter().map(|&c| c as u32).collect(),
            // Exact for any cost below 2^53.
            cost: report.solution.cost as f64,
            tours_evaluated: report.stats.leaves as f64,
            elapsed_ms: report.stats.elapsed.as_secs_f64() * 1000.0,
        }
    }
}

fn to_js(err: tsm_core::Error) -> Error {
    Error::from_reason(err.to_string())
}

fn matrix(weights: Vec<Vec<u32>>) -> Result<DistanceMatrix> {
    DistanceMatrix::from_rows(weights).map_err(to_js)
}

#[napi]
pub fn solve_exhaustive(
    weights: Vec<Vec<u32>>,
    threads: u32,
    schedule: Option<String>,
) -> Result<TourSolution> {
    let schedule = match schedule {
        Some(s) => s.parse::<Schedule>().map_err(Error::from_reason)?,
        None => Schedule::default(),
    };
    let config = SolverConfig::with_threads(threads as usize).schedule(schedule);
    let report = tsm_brute_force::solve(&matrix(weights)?, &config).map_err(to_js)?;
    Ok(report.into())
}

#[napi]
pub fn solve_sequential(weights: Vec<Vec<u32>>) -> Result<TourSolution> {
    let report = tsm_brute_force::solve_sequential(&matrix(weights)?).map_err(to_js)?;
    Ok(report.into())
}
