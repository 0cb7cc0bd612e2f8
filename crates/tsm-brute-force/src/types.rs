use std::time::Duration;

use serde::{Deserialize, Serialize};
use tsm_core::Solution;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Threads that took part in the search.
    pub workers: usize,
    /// Second-city branches explored (`n - 1`).
    pub branches: usize,
    /// Complete tours evaluated across all workers.
    pub leaves: u64,
    /// Wall-clock time of the enumeration itself.
    pub elapsed: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub solution: Solution,
    pub stats: SearchStats,
}

/// What one worker did before its single merge.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct WorkerSummary {
    pub branches: usize,
    pub leaves: u64,
}
