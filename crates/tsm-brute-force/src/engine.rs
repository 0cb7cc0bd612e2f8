use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use log::{debug, info, warn};
use tsm_core::{identity_path, BestTour, DistanceMatrix, Error, Result};

use crate::config::SolverConfig;
use crate::partition::{assignments, branches, seed_branch, worker_count, Assignment};
use crate::permute::permute;
use crate::reduction::GlobalBest;
use crate::types::{SearchReport, SearchStats, WorkerSummary};

/// Path buffer and local best owned by one worker.
type WorkerBuffers = (Vec<usize>, BestTour);

fn worker_buffers(_id: usize, matrix: &DistanceMatrix) -> Result<WorkerBuffers> {
    let path = identity_path(matrix.len(), "worker path buffer")?;
    Ok((path, BestTour::initial(matrix, "worker best path")?))
}

/// Exhaustive parallel search.
///
/// Each worker owns a path buffer and a local best, explores the second-city branches
/// it is assigned, and merges into the shared best exactly once. The reported cost does
/// not depend on `config.threads` or `config.schedule`; when several tours tie for the
/// minimum, which one is reported may.
pub fn solve(matrix: &DistanceMatrix, config: &SolverConfig) -> Result<SearchReport> {
    search(matrix, config, worker_buffers)
}

fn search<A>(matrix: &DistanceMatrix, config: &SolverConfig, alloc: A) -> Result<SearchReport>
where
    A: Fn(usize, &DistanceMatrix) -> Result<WorkerBuffers> + Sync,
{
    config.validate()?;

    let n = matrix.len();
    let global = GlobalBest::new(BestTour::initial(matrix, "global best path")?);

    let range = branches(n);
    let branch_count = range.len();
    let workers = worker_count(config.threads, branch_count);
    info!("solving {n} cities on {workers} workers");
    debug!(
        "partition: {branch_count} branches, {} schedule",
        config.schedule
    );

    let plan = assignments(range, workers, config.schedule);
    let abort = AtomicBool::new(false);
    let start = Instant::now();

    let outcomes: Vec<Result<WorkerSummary>> = thread::scope(|s| {
        let mut handles = Vec::with_capacity(workers);
        let mut outcomes = Vec::with_capacity(workers);

        for (id, assignment) in plan.into_iter().enumerate() {
            let global = &global;
            let abort = &abort;
            let alloc = &alloc;
            let spawned = thread::Builder::new()
                .name(format!("tsm-worker-{id}"))
                .spawn_scoped(s, move || {
                    run_worker(id, matrix, assignment, alloc, global, abort)
                });
            match spawned {
                Ok(handle) => handles.push((id, handle)),
                Err(source) => {
                    warn!("failed to spawn worker {id}: {source}");
                    abort.store(true, Ordering::Relaxed);
                    outcomes.push(Err(Error::SpawnFailed { worker: id, source }));
                }
            }
        }

        for (id, handle) in handles {
            outcomes.push(
                handle
                    .join()
                    .unwrap_or_else(|_| Err(Error::WorkerFailed(id))),
            );
        }
        outcomes
    });
    let elapsed = start.elapsed();

    let mut stats = SearchStats {
        workers,
        elapsed,
        ..SearchStats::default()
    };
    for outcome in outcomes {
        let summary = outcome?;
        stats.branches += summary.branches;
        stats.leaves += summary.leaves;
    }
    debug_assert_eq!(stats.branches, branch_count);

    let best = global.into_inner();
    debug_assert!(best.is_found(), "complete search left the sentinel cost");
    info!(
        "best cost {} after {} leaves in {:.3?}",
        best.cost, stats.leaves, stats.elapsed
    );

    Ok(SearchReport {
        solution: best.into(),
        stats,
    })
}

fn run_worker<A>(
    id: usize,
    matrix: &DistanceMatrix,
    assignment: Assignment,
    alloc: &A,
    global: &GlobalBest,
    abort: &AtomicBool,
) -> Result<WorkerSummary>
where
    A: Fn(usize, &DistanceMatrix) -> Result<WorkerBuffers>,
{
    let (mut path, mut local) = match alloc(id, matrix) {
        Ok(buffers) => buffers,
        Err(e) => {
            warn!("worker {id}: {e}, aborting search");
            abort.store(true, Ordering::Relaxed);
            return Err(e);
        }
    };

    let last = matrix.len() - 1;
    let mut summary = WorkerSummary::default();

    for second in assignment {
        if abort.load(Ordering::Relaxed) {
            debug!(
                "worker {id}: search aborted after {} branches",
                summary.branches
            );
            return Ok(summary);
        }
        seed_branch(&mut path, second);
        summary.leaves += permute(matrix, &mut path, 2, last, &mut local);
        summary.branches += 1;
    }

    debug!(
        "worker {id}: {} branches, {} leaves, local best {}",
        summary.branches, summary.leaves, local.cost
    );
    global.merge(id, &local);
    Ok(summary)
}

/// Single-threaded search over positions `1..n` on one buffer.
///
/// Records straight into its own best; no partitioning and no reduction step.
pub fn solve_sequential(matrix: &DistanceMatrix) -> Result<SearchReport> {
    let n = matrix.len();
    let mut best = BestTour::initial(matrix, "best path")?;
    let mut path = identity_path(n, "path buffer")?;
    info!("solving {n} cities sequentially");

    let start = Instant::now();
    let leaves = permute(matrix, &mut path, 1, n - 1, &mut best);
    let elapsed = start.elapsed();

    debug_assert!(best.is_found(), "complete search left the sentinel cost");
    info!("best cost {} after {leaves} leaves in {elapsed:.3?}", best.cost);
    Ok(SearchReport {
        solution: best.into(),
        stats: SearchStats {
            workers: 1,
            branches: branches(n).len(),
            leaves,
            elapsed,
        },
    })
}
