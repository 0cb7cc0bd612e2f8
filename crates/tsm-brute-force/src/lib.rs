//! Exhaustive solver for the fixed-origin open-path routing problem.
//!
//! Every ordering of cities `1..n` behind city 0 is evaluated; there is no pruning and
//! no early exit. The parallel engine fixes the second city per branch, hands branches
//! to a scoped thread pool ([`Schedule::Static`] chunks or a [`Schedule::Dynamic`]
//! queue), and each worker merges its local best into a mutex-guarded [`GlobalBest`]
//! exactly once.
//!
//! ```
//! use tsm_brute_force::{solve, SolverConfig};
//! use tsm_core::DistanceMatrix;
//!
//! let m = DistanceMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]])?;
//! let report = solve(&m, &SolverConfig::with_threads(2))?;
//! assert_eq!(report.solution.cost, 4);
//! assert_eq!(report.solution.path, vec![0, 1, 2]);
//! # Ok::<(), tsm_core::Error>(())
//! ```

pub mod config;
pub mod engine;
pub mod partition;
pub mod permute;
pub mod reduction;
pub mod types;

pub use config::{Schedule, SolverConfig};
pub use engine::{solve, solve_sequential};
pub use permute::permute;
pub use reduction::GlobalBest;
pub use types::{SearchReport, SearchStats};
