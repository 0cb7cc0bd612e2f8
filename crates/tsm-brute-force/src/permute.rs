use tsm_core::{path_cost, BestTour, DistanceMatrix};

/// Enumerate every ordering of `path[l..=r]`, evaluating each complete tour once.
///
/// Positions outside `l..=r` are left alone. Each step swaps `l` with a candidate,
/// recurses on the rest and swaps back, so on return `path` is exactly as it was on
/// entry and nothing is allocated along the way. `l > r` is an empty range.
///
/// Returns the number of leaves (complete tours) evaluated.
pub fn permute(
    matrix: &DistanceMatrix,
    path: &mut [usize],
    l: usize,
    r: usize,
    best: &mut BestTour,
) -> u64 {
    if l > r {
        return 0;
    }
    if l == r {
        let cost = path_cost(matrix, path);
        best.offer(cost, path);
        return 1;
    }

    let mut leaves = 0;
    for i in l..=r {
        path.swap(l, i);
        leaves += permute(matrix, path, l + 1, r, best);
        path.swap(l, i);
    }
    leaves
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tsm_core::{identity_path, INFINITE_COST};

    fn matrix(n: usize) -> DistanceMatrix {
        let weights = (0..n * n).map(|k| ((k * 7 + 3) % 11) as u32).collect();
        DistanceMatrix::from_flat(n, weights).unwrap()
    }

    fn factorial(k: u64) -> u64 {
        (1..=k).product()
    }

    #[test]
    fn buffer_is_restored() {
        for n in 1..=7 {
            let m = matrix(n);
            let mut path = identity_path(n, "test").unwrap();
            let before = path.clone();
            let mut best = BestTour::initial(&m, "test").unwrap();
            permute(&m, &mut path, 1, n - 1, &mut best);
            assert_eq!(path, before, "n = {n}");
        }
    }

    #[test]
    fn shuffled_buffer_is_restored() {
        let m = matrix(6);
        let mut path = vec![0, 4, 2, 5, 1, 3];
        let before = path.clone();
        let mut best = BestTour::initial(&m, "test").unwrap();
        permute(&m, &mut path, 2, 5, &mut best);
        assert_eq!(path, before);
    }

    #[test]
    fn leaf_count_is_factorial_of_range() {
        for n in 2..=8 {
            let m = matrix(n);
            let mut path = identity_path(n, "test").unwrap();
            let mut best = BestTour::initial(&m, "test").unwrap();
            let leaves = permute(&m, &mut path, 1, n - 1, &mut best);
            assert_eq!(leaves, factorial(n as u64 - 1), "n = {n}");
        }
    }

    #[test]
    fn empty_range_is_noop() {
        let m = matrix(3);
        let mut path = vec![0, 1, 2];
        let mut best = BestTour::initial(&m, "test").unwrap();
        assert_eq!(permute(&m, &mut path, 3, 2, &mut best), 0);
        assert_eq!(best.cost, INFINITE_COST);
    }

    #[test]
    fn single_position_is_one_leaf() {
        let m = DistanceMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]])
            .unwrap();
        let mut path = vec![0, 2, 1];
        let mut best = BestTour::initial(&m, "test").unwrap();
        assert_eq!(permute(&m, &mut path, 2, 2, &mut best), 1);
        assert_eq!(best.cost, 5);
        assert_eq!(best.path, vec![0, 2, 1]);
    }

    #[test]
    fn best_matches_minimum_over_all_orderings() {
        let n = 5;
        let m = matrix(n);

        fn extend(prefix: &mut Vec<usize>, n: usize, out: &mut HashSet<Vec<usize>>) {
            if prefix.len() == n {
                out.insert(prefix.clone());
                return;
            }
            for city in 1..n {
                if !prefix.contains(&city) {
                    prefix.push(city);
                    extend(prefix, n, out);
                    prefix.pop();
                }
            }
        }
        let mut all = HashSet::new();
        extend(&mut vec![0], n, &mut all);

        let mut path = identity_path(n, "test").unwrap();
        let mut best = BestTour::initial(&m, "test").unwrap();
        let leaves = permute(&m, &mut path, 1, n - 1, &mut best);
        assert_eq!(all.len() as u64, leaves);
        assert!(all.contains(&best.path));
        let min = all.iter().map(|p| path_cost(&m, p)).min().unwrap();
        assert_eq!(best.cost, min);
    }
}
