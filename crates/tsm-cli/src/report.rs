//! Human and JSON renderings of a finished search.

use std::fmt::Write as _;
use std::time::Duration;

use serde::Serialize;
use tsm_brute_force::{Schedule, SearchReport};

/// Wall-clock breakdown of one `solve` invocation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Timings {
    pub total_secs: f64,
    pub search_secs: f64,
    /// Loading, validation and everything else outside the search.
    pub setup_secs: f64,
}

impl Timings {
    pub fn new(total: Duration, search: Duration) -> Self {
        Self {
            total_secs: total.as_secs_f64(),
            search_secs: search.as_secs_f64(),
            setup_secs: total.saturating_sub(search).as_secs_f64(),
        }
    }
}

/// Parallel run with its schedule, or the single-threaded baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Mode {
    Parallel { schedule: Schedule },
    Sequential,
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub cities: usize,
    #[serde(flatten)]
    pub mode: Mode,
    #[serde(flatten)]
    pub report: &'a SearchReport,
    pub timings: Timings,
}

pub fn render_text(report: &SearchReport, mode: Mode, timings: &Timings) -> String {
    let path: Vec<String> = report.solution.path.iter().map(usize::to_string).collect();
    let stats = &report.stats;
    let search_label = match mode {
        Mode::Parallel { .. } => "parallel",
        Mode::Sequential => "search",
    };

    let mut out = String::new();
    let _ = writeln!(out, "Best path: {}", path.join(" "));
    let _ = writeln!(out, "Distance: {}", report.solution.cost);
    match mode {
        Mode::Parallel { schedule } => {
            let _ = writeln!(
                out,
                "Workers: {} ({schedule} schedule), branches: {}, tours evaluated: {}",
                stats.workers, stats.branches, stats.leaves
            );
        }
        Mode::Sequential => {
            let _ = writeln!(out, "Tours evaluated: {}", stats.leaves);
        }
    }
    let _ = writeln!(
        out,
        "It took {:.6} seconds to execute the program.",
        timings.total_secs
    );
    let _ = writeln!(
        out,
        "It took {:.6} seconds to execute the sequential part.",
        timings.setup_secs
    );
    let _ = writeln!(
        out,
        "It took {:.6} seconds to execute the {search_label} part.",
        timings.search_secs
    );
    out
}

pub fn render_json(
    report: &SearchReport,
    cities: usize,
    mode: Mode,
    timings: Timings,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        cities,
        mode,
        report,
        timings,
    })
}
