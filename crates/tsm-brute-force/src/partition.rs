//! Splitting the search tree by second city.
//!
//! Branch `i` is the subtree of all tours with `path[1] == i`, for `i` in `1..n`. Each
//! branch is handed to exactly one worker, which then permutes positions `2..n`.

use std::ops::Range;

use crossbeam_channel::Receiver;

use crate::config::Schedule;

/// Second-city candidates for `n` cities. Empty for a single city.
pub fn branches(n: usize) -> Range<usize> {
    1..n.max(1)
}

/// Workers actually spawned: never more than there are branches, never zero.
pub fn worker_count(threads: usize, branch_count: usize) -> usize {
    threads.min(branch_count).max(1)
}

/// Split `range` into `workers` contiguous chunks whose lengths differ by at most one.
///
/// The first `len % workers` chunks take the extra branch. Trailing chunks may be empty
/// when there are more workers than branches.
pub fn static_chunks(range: Range<usize>, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let len = range.len();
    let base = len / workers;
    let extra = len % workers;

    let mut chunks = Vec::with_capacity(workers);
    let mut start = range.start;
    for w in 0..workers {
        let size = base + usize::from(w < extra);
        chunks.push(start..start + size);
        start += size;
    }
    chunks
}

/// Arrange `path` for branch `second`: `[0, second, rest ascending...]`.
pub fn seed_branch(path: &mut [usize], second: usize) {
    debug_assert!(second >= 1 && second < path.len());
    path[0] = 0;
    path[1] = second;
    let mut pos = 2;
    for city in 1..path.len() {
        if city != second {
            path[pos] = city;
            pos += 1;
        }
    }
}

/// The branches one worker is responsible for.
pub enum Assignment {
    Chunk(Range<usize>),
    Queue(Receiver<usize>),
}

impl Iterator for Assignment {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Assignment::Chunk(range) => range.next(),
            Assignment::Queue(rx) => rx.recv().ok(),
        }
    }
}

/// Build one assignment per worker for the given schedule.
pub fn assignments(range: Range<usize>, workers: usize, schedule: Schedule) -> Vec<Assignment> {
    match schedule {
        Schedule::Static => static_chunks(range, workers)
            .into_iter()
            .map(Assignment::Chunk)
            .collect(),
        Schedule::Dynamic => {
            let (tx, rx) = crossbeam_channel::bounded(range.len().max(1));
            for branch in range {
                // Capacity covers every branch and `rx` is alive, so this cannot block or fail.
                let _ = tx.send(branch);
            }
            drop(tx);
            (0..workers.max(1))
                .map(|_| Assignment::Queue(rx.clone()))
                .collect()
        }
    }
}
