use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;

/// Total cost of a tour. Wider than [`crate::Weight`] so sums never overflow.
pub type Cost = u64;

/// Sentinel for "nothing found yet".
pub const INFINITE_COST: Cost = Cost::MAX;

/// Cost of an open path: the sum of the N-1 traversed edges.
///
/// There is no return edge from the last city back to city 0.
#[inline(always)]
pub fn path_cost(matrix: &DistanceMatrix, path: &[usize]) -> Cost {
    path.windows(2)
        .map(|edge| Cost::from(matrix.weight(edge[0], edge[1])))
        .sum()
}

/// Cost the search starts from before any leaf is evaluated.
///
/// One city costs nothing and two cities have exactly one tour, so those are known up
/// front. Everything larger starts at [`INFINITE_COST`].
pub fn initial_cost(matrix: &DistanceMatrix) -> Cost {
    match matrix.len() {
        1 => 0,
        2 => Cost::from(matrix.weight(0, 1)),
        _ => INFINITE_COST,
    }
}

/// `[0, 1, .., n-1]`, reserved fallibly so an out-of-memory condition surfaces as
/// [`Error::Allocation`] instead of aborting the process.
pub fn identity_path(n: usize, what: &'static str) -> Result<Vec<usize>> {
    let mut path = Vec::new();
    path.try_reserve_exact(n)
        .map_err(|_| Error::Allocation { what, len: n })?;
    path.extend(0..n);
    Ok(path)
}

/// True if `path` visits each of `0..n` exactly once and starts at city 0.
pub fn is_valid_tour(path: &[usize], n: usize) -> bool {
    if path.len() != n || path.first() != Some(&0) {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in path {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// Running minimum over evaluated tours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BestTour {
    pub cost: Cost,
    pub path: Vec<usize>,
}

impl BestTour {
    /// Seeded with the trivial-case cost and the identity path.
    pub fn initial(matrix: &DistanceMatrix, what: &'static str) -> Result<Self> {
        Ok(Self {
            cost: initial_cost(matrix),
            path: identity_path(matrix.len(), what)?,
        })
    }

    /// Record `path` if `cost` is strictly better. Copies into the existing buffer.
    #[inline(always)]
    pub fn offer(&mut self, cost: Cost, path: &[usize]) -> bool {
        if cost < self.cost {
            self.cost = cost;
            self.path.copy_from_slice(path);
            true
        } else {
            false
        }
    }

    pub fn is_found(&self) -> bool {
        self.cost != INFINITE_COST
    }
}

/// A winning tour handed back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub path: Vec<usize>,
    pub cost: Cost,
}

impl From<BestTour> for Solution {
    fn from(best: BestTour) -> Self {
        Solution {
            path: best.path,
            cost: best.cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]]).unwrap()
    }

    #[test]
    fn open_path_has_no_return_edge() {
        let m = triangle();
        assert_eq!(path_cost(&m, &[0, 1, 2]), 4);
        assert_eq!(path_cost(&m, &[0, 2, 1]), 5);
    }

    #[test]
    fn single_city_costs_nothing() {
        let m = DistanceMatrix::from_flat(1, vec![42]).unwrap();
        assert_eq!(path_cost(&m, &[0]), 0);
        assert_eq!(initial_cost(&m), 0);
    }

    #[test]
    fn direction_matters() {
        let m = DistanceMatrix::from_rows(vec![vec![0, 5], vec![9, 0]]).unwrap();
        assert_eq!(path_cost(&m, &[0, 1]), 5);
        assert_eq!(path_cost(&m, &[1, 0]), 9);
        assert_eq!(initial_cost(&m), 5);
    }

    #[test]
    fn large_weights_do_not_overflow() {
        let w = u32::MAX;
        let m = DistanceMatrix::from_flat(3, vec![w; 9]).unwrap();
        assert_eq!(path_cost(&m, &[0, 1, 2]), 2 * u64::from(w));
    }

    #[test]
    fn initial_cost_is_infinite_beyond_two_cities() {
        assert_eq!(initial_cost(&triangle()), INFINITE_COST);
    }

    #[test]
    fn identity_path_counts_up() {
        assert_eq!(identity_path(4, "path").unwrap(), vec![0, 1, 2, 3]);
        assert!(identity_path(0, "path").unwrap().is_empty());
    }

    #[test]
    fn offer_is_strict() {
        let mut best = BestTour::initial(&triangle(), "best").unwrap();
        assert!(!best.is_found());
        assert!(best.offer(5, &[0, 2, 1]));
        assert!(!best.offer(5, &[0, 1, 2]));
        assert_eq!(best.path, vec![0, 2, 1]);
        assert!(best.offer(4, &[0, 1, 2]));
        assert_eq!(best.cost, 4);
        assert_eq!(best.path, vec![0, 1, 2]);
    }

    #[test]
    fn tour_validation() {
        assert!(is_valid_tour(&[0, 2, 1], 3));
        assert!(!is_valid_tour(&[1, 0, 2], 3));
        assert!(!is_valid_tour(&[0, 1, 1], 3));
        assert!(!is_valid_tour(&[0, 1, 3], 3));
        assert!(!is_valid_tour(&[0, 1], 3));
    }
}
