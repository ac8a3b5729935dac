//! Pairwise dissimilarity matrix over encoded profile vectors.
//!
//! Each unordered pair is computed once and written to both cells, so
//! `d[i][j] == d[j][i]` holds bit-for-bit rather than up to rounding.

use ndarray::{Array1, Array2};

use crate::error::LayoutError;

/// Euclidean distance between two equal-length vectors.
pub fn euclidean(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Symmetric, zero-diagonal n×n distance matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    values: Array2<f64>,
}

impl DistanceMatrix {
    /// Build from encoded vectors. All vectors must share one length.
    pub fn from_vectors(vectors: &[Array1<f64>]) -> Result<Self, LayoutError> {
        let n = vectors.len();
        if let Some(first) = vectors.first() {
            let expected = first.len();
            if let Some((index, v)) = vectors
                .iter()
                .enumerate()
                .find(|(_, v)| v.len() != expected)
            {
                return Err(LayoutError::DimensionalityMismatch {
                    index,
                    expected,
                    got: v.len(),
                });
            }
        }

        let mut values = Array2::zeros((n, n));
        for i in 0..n {
            for j in (i + 1)..n {
                let d = euclidean(&vectors[i], &vectors[j]);
                values[[i, j]] = d;
                values[[j, i]] = d;
            }
        }
        Ok(Self { values })
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[[i, j]]
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.values
    }

    /// Largest pairwise distance, 0 for fewer than two profiles.
    pub fn max_distance(&self) -> f64 {
        self.values.iter().cloned().fold(0.0, f64::max)
    }

    /// Exact symmetry and zero diagonal.
    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| {
            self.values[[i, i]] == 0.0 && ((i + 1)..n).all(|j| self.values[[i, j]] == self.values[[j, i]])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_three_profile_scenario() {
        let vectors = vec![array![1.0, 0.0], array![0.0, 1.0], array![0.0, 0.0]];
        let m = DistanceMatrix::from_vectors(&vectors).expect("equal lengths");
        assert_eq!(m.len(), 3);
        assert_abs_diff_eq!(m.get(0, 1), 2f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(m.get(0, 2), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.get(1, 2), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.max_distance(), 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_symmetry_and_zero_diagonal() {
        let vectors: Vec<Array1<f64>> = (0..12)
            .map(|i| {
                Array1::from_vec(
                    (0..8)
                        .map(|k| (((i * 7 + k * 3) % 5) as f64) * 0.37)
                        .collect(),
                )
            })
            .collect();
        let m = DistanceMatrix::from_vectors(&vectors).expect("equal lengths");
        assert!(m.is_symmetric());
        for i in 0..m.len() {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..m.len() {
                assert_eq!(
                    m.get(i, j),
                    m.get(j, i),
                    "Distance not symmetric: d[{}][{}] != d[{}][{}]",
                    i,
                    j,
                    j,
                    i
                );
                assert!(m.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn test_length_mismatch_is_fatal() {
        let vectors = vec![array![1.0, 0.0, 1.0, 1.0], array![0.0, 1.0, 0.0, 0.0], array![0.0, 1.0]];
        let err = DistanceMatrix::from_vectors(&vectors).expect_err("mismatch must fail");
        assert_eq!(
            err,
            LayoutError::DimensionalityMismatch {
                index: 2,
                expected: 4,
                got: 2,
            }
        );
    }

    #[test]
    fn test_empty_and_single() {
        let empty = DistanceMatrix::from_vectors(&[]).expect("empty is fine");
        assert!(empty.is_empty());
        assert_eq!(empty.max_distance(), 0.0);

        let single = DistanceMatrix::from_vectors(&[array![1.0, 1.0]]).expect("single is fine");
        assert_eq!(single.len(), 1);
        assert_eq!(single.get(0, 0), 0.0);
    }
}
