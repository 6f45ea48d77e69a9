//! Similarity measures and neighborhood construction.
//!
//! Each subproblem mates and replaces only within the `T` subproblems
//! whose weight vectors are most similar to its own. Neighborhoods are
//! built once at initialization from the full weight-vector list and are
//! immutable for the rest of the run.
//!
//! A vector's own index may appear inside its neighborhood: the candidate
//! list includes the target itself, and under Euclidean distance the
//! self-distance of zero ranks it first. This mirrors the reference
//! algorithm and is intentional.

use crate::error::{MoeadError, Result};
use crate::weights::WeightVector;

/// Similarity measure between two weight vectors.
///
/// Exactly two measures are supported, so this is a closed enum rather
/// than open-ended dispatch. Whichever measure is chosen, the sort key
/// produced by [`closeness`](SimilarityMeasure::closeness) is normalized
/// so that smaller always means more similar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimilarityMeasure {
    /// Euclidean distance: `sqrt(sum((a_k - b_k)^2))`. Smaller = closer.
    #[default]
    Euclidean,

    /// Cosine similarity: `dot(a, b) / (|a| * |b|)`. Larger = closer, so
    /// the key is negated before comparison. Undefined for zero-norm
    /// vectors; construction fails with [`MoeadError::ZeroNorm`].
    Cosine,
}

impl SimilarityMeasure {
    /// Sort key for ranking `b` by similarity to `a`: ascending = closer.
    pub fn closeness(&self, a: &WeightVector, b: &WeightVector) -> Result<f64> {
        match self {
            SimilarityMeasure::Euclidean => a.euclidean_distance(b),
            SimilarityMeasure::Cosine => {
                let norms = a.l2_norm() * b.l2_norm();
                if norms == 0.0 {
                    return Err(MoeadError::ZeroNorm);
                }
                Ok(-(a.dot(b)? / norms))
            }
        }
    }
}

/// Returns the indices of the `size` candidates closest to `target`.
///
/// Every candidate is ranked by the measure's closeness key, ascending.
/// Candidates with equal keys are ordered by their index in `candidates`;
/// this tie-break is deterministic and part of the crate's contract.
///
/// # Errors
///
/// - [`MoeadError::MissingInput`] when `candidates` is empty
/// - [`MoeadError::NonPositive`] when `size` is zero
/// - [`MoeadError::SelectionExceedsCandidates`] when `size` exceeds the
///   candidate count
/// - [`MoeadError::DimensionMismatch`] / [`MoeadError::ZeroNorm`] from the
///   measure itself
pub fn create_neighborhood(
    measure: SimilarityMeasure,
    target: &WeightVector,
    candidates: &[WeightVector],
    size: usize,
) -> Result<Vec<usize>> {
    if candidates.is_empty() {
        return Err(MoeadError::MissingInput("candidates"));
    }
    if size == 0 {
        return Err(MoeadError::NonPositive {
            name: "size",
            value: size,
        });
    }
    if size > candidates.len() {
        return Err(MoeadError::SelectionExceedsCandidates {
            requested: size,
            available: candidates.len(),
        });
    }

    let mut ranked: Vec<(f64, usize)> = Vec::with_capacity(candidates.len());
    for (i, c) in candidates.iter().enumerate() {
        ranked.push((measure.closeness(target, c)?, i));
    }
    ranked.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    Ok(ranked.into_iter().take(size).map(|(_, i)| i).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wv(entries: &[f64]) -> WeightVector {
        WeightVector::new(entries.to_vec())
    }

    /// 8 grid points around the target in a square, row-major, skipping
    /// the center:
    /// ```text
    /// 5 6 7
    /// 3 v 4
    /// 0 1 2
    /// ```
    fn grid_without_center(lo: i32, hi: i32, center: (i32, i32)) -> Vec<WeightVector> {
        let mut candidates = Vec::new();
        for i in lo..hi {
            for j in lo..hi {
                if (i, j) != center {
                    candidates.push(wv(&[i as f64, j as f64]));
                }
            }
        }
        candidates
    }

    #[test]
    fn test_square_center_euclidean() {
        let target = wv(&[1.0, 1.0]);
        let candidates = grid_without_center(0, 3, (1, 1));

        let actual =
            create_neighborhood(SimilarityMeasure::Euclidean, &target, &candidates, 4).unwrap();
        // The four axis-aligned unit-distance neighbors.
        assert_eq!(actual, vec![1, 3, 4, 6]);
    }

    #[test]
    fn test_square_center_cosine() {
        let target = wv(&[2.0, 2.0]);
        let candidates = grid_without_center(1, 4, (2, 2));

        let actual =
            create_neighborhood(SimilarityMeasure::Cosine, &target, &candidates, 4).unwrap();
        // (1,1) and (3,3) point in exactly the target's direction; (2,3)
        // and (3,2) are the next-closest angles. Ties go to the lower
        // index, so the two exact matches come out as 0 then 7.
        assert_eq!(actual, vec![0, 7, 4, 6]);

        let mut as_set = actual.clone();
        as_set.sort_unstable();
        assert_eq!(as_set, vec![0, 4, 6, 7]);
    }

    #[test]
    fn test_target_ranks_first_in_own_neighborhood() {
        let candidates = vec![wv(&[0.5, 0.5]), wv(&[0.9, 0.1]), wv(&[0.1, 0.9])];
        let actual =
            create_neighborhood(SimilarityMeasure::Euclidean, &candidates[0], &candidates, 2)
                .unwrap();
        assert_eq!(actual[0], 0);
    }

    #[test]
    fn test_size_greater_than_candidates() {
        let target = wv(&[1.0, 1.0]);
        let candidates = vec![wv(&[2.0, 2.0])];
        assert!(matches!(
            create_neighborhood(SimilarityMeasure::Euclidean, &target, &candidates, 4),
            Err(MoeadError::SelectionExceedsCandidates {
                requested: 4,
                available: 1
            })
        ));
    }

    #[test]
    fn test_size_zero() {
        let target = wv(&[1.0, 1.0]);
        let candidates = grid_without_center(0, 3, (1, 1));
        assert!(matches!(
            create_neighborhood(SimilarityMeasure::Euclidean, &target, &candidates, 0),
            Err(MoeadError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_empty_candidates() {
        let target = wv(&[1.0, 1.0]);
        assert!(matches!(
            create_neighborhood(SimilarityMeasure::Euclidean, &target, &[], 1),
            Err(MoeadError::MissingInput("candidates"))
        ));
    }

    #[test]
    fn test_cosine_zero_norm_guard() {
        let target = wv(&[0.0, 0.0]);
        let candidates = vec![wv(&[1.0, 0.0]), wv(&[0.0, 1.0])];
        assert!(matches!(
            create_neighborhood(SimilarityMeasure::Cosine, &target, &candidates, 1),
            Err(MoeadError::ZeroNorm)
        ));
    }

    #[test]
    fn test_dimension_mismatch_propagates() {
        let target = wv(&[1.0, 1.0]);
        let candidates = vec![wv(&[1.0, 0.0, 0.0])];
        assert!(matches!(
            create_neighborhood(SimilarityMeasure::Euclidean, &target, &candidates, 1),
            Err(MoeadError::DimensionMismatch { .. })
        ));
    }
}
