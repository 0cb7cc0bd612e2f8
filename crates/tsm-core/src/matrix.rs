use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Directed weight of a single edge.
pub type Weight = u32;

/// Immutable N×N directed distance matrix.
///
/// Stored flattened in row-major order for cache locality. Not required to be
/// symmetric; the diagonal is carried but never read by the cost model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRows", into = "MatrixRows")]
pub struct DistanceMatrix {
    n: usize,
    weights: Vec<Weight>,
}

/// Serialized shape of a matrix: `{"weights": [[0, 1], [1, 0]]}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatrixRows {
    pub weights: Vec<Vec<Weight>>,
}

impl DistanceMatrix {
    /// Build from a row-major flat buffer holding exactly `n * n` weights.
    pub fn from_flat(n: usize, weights: Vec<Weight>) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidDimension(
                "city count must be at least 1".to_string(),
            ));
        }
        let expected = n.checked_mul(n).ok_or_else(|| {
            Error::InvalidDimension(format!("{n} cities overflow the matrix size"))
        })?;
        if weights.len() != expected {
            return Err(Error::InvalidDimension(format!(
                "{n} cities need {expected} weights, got {}",
                weights.len()
            )));
        }
        Ok(Self { n, weights })
    }

    /// Build from nested rows; every row must have as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidDimension(format!(
                    "row {} has {} entries, expected {n}",
                    i + 1,
                    row.len()
                )));
            }
        }
        Self::from_flat(n, rows.into_iter().flatten().collect())
    }

    /// Number of cities.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: a matrix holds at least one city.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Directed cost from `from` to `to`.
    #[inline(always)]
    pub fn weight(&self, from: usize, to: usize) -> Weight {
        self.weights[from * self.n + to]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        self.weights.chunks_exact(self.n)
    }

    /// Check that this matrix describes `n` cities.
    pub fn expect_cities(&self, n: usize) -> Result<()> {
        if n != self.n {
            return Err(Error::InvalidDimension(format!(
                "expected {n} cities, matrix has {}",
                self.n
            )));
        }
        Ok(())
    }
}

impl TryFrom<MatrixRows> for DistanceMatrix {
    type Error = Error;

    fn try_from(value: MatrixRows) -> Result<Self> {
        Self::from_rows(value.weights)
    }
}

impl From<DistanceMatrix> for MatrixRows {
    fn from(value: DistanceMatrix) -> Self {
        MatrixRows {
            weights: value.rows().map(<[Weight]>::to_vec).collect(),
        }
    }
}
