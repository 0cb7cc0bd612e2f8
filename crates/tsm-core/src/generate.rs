//! Random instance generation for benchmarks and cross-checks.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::matrix::{DistanceMatrix, Weight};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub cities: usize,
    /// Inclusive upper bound for off-diagonal weights; the lower bound is 1.
    pub max_weight: Weight,
    /// Mirror the upper triangle so `weight(i, j) == weight(j, i)`.
    pub symmetric: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            cities: 8,
            max_weight: 100,
            symmetric: false,
        }
    }
}

/// Random matrix with a zero diagonal and weights in `1..=max_weight` elsewhere.
pub fn random_matrix<R: Rng + ?Sized>(opts: &GenerateOptions, rng: &mut R) -> Result<DistanceMatrix> {
    let n = opts.cities;
    if n == 0 {
        return Err(Error::InvalidDimension(
            "city count must be at least 1".to_string(),
        ));
    }
    if opts.max_weight == 0 {
        return Err(Error::InvalidDimension(
            "max weight must be at least 1".to_string(),
        ));
    }

    let mut weights = vec![0; n * n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if opts.symmetric && j < i {
                weights[i * n + j] = weights[j * n + i];
            } else {
                weights[i * n + j] = rng.gen_range(1..=opts.max_weight);
            }
        }
    }
    DistanceMatrix::from_flat(n, weights)
}
