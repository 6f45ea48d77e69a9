//! Weight vectors and simplex decomposition.
//!
//! MOEA/D converts a multi-objective problem into `N` scalar subproblems,
//! each defined by one weight vector on the unit simplex. This module
//! provides the vector type itself, uniform simplex sampling, and the
//! sparse subset selection that picks a well-spread set of `N` vectors
//! from an oversampled pool.
//!
//! # References
//!
//! - Zhang & Li (2007), "MOEA/D: A Multiobjective Evolutionary Algorithm
//!   Based on Decomposition"
//! - Deb, Bandaru & Seada (2019), "Generating Uniformly Distributed Points
//!   on a Unit Simplex for Evolutionary Many-Objective Optimization"

use crate::error::{MoeadError, Result};
use rand::Rng;

/// A fixed-length vector of non-negative weights over the objectives.
///
/// Weight vectors are created by the sampling routines in this module and
/// are immutable afterwards; entries are never re-normalized after
/// construction. The decomposition loop references them by index rather
/// than copying them around.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    entries: Vec<f64>,
}

impl WeightVector {
    /// Creates a weight vector from raw entries.
    pub fn new(entries: Vec<f64>) -> Self {
        Self { entries }
    }

    /// Number of entries (the number of objectives).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.entries
            .get(index)
            .copied()
            .ok_or(MoeadError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            })
    }

    /// Borrows the entries as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.entries
    }

    /// L2-norm of the vector.
    pub fn l2_norm(&self) -> f64 {
        self.entries.iter().map(|e| e * e).sum::<f64>().sqrt()
    }

    /// Dot product with another vector of the same length.
    pub fn dot(&self, other: &WeightVector) -> Result<f64> {
        self.check_same_len(other)?;
        Ok(self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean distance to another vector of the same length.
    pub fn euclidean_distance(&self, other: &WeightVector) -> Result<f64> {
        self.check_same_len(other)?;
        Ok(self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt())
    }

    fn check_same_len(&self, other: &WeightVector) -> Result<()> {
        if self.entries.len() != other.entries.len() {
            return Err(MoeadError::DimensionMismatch {
                expected: self.entries.len(),
                actual: other.entries.len(),
            });
        }
        Ok(())
    }
}

/// Samples `count` points uniformly at random on the unit simplex in
/// `num_objectives` dimensions.
///
/// Each point is produced by drawing `num_objectives` independent
/// uniform(0,1] samples, mapping each through `-ln(u)` (a standard
/// exponential variate), and normalizing the result to sum to 1. The
/// resulting points are uniformly distributed over the simplex.
pub fn fill_simplex<R: Rng>(
    count: usize,
    num_objectives: usize,
    rng: &mut R,
) -> Result<Vec<WeightVector>> {
    if count == 0 {
        return Err(MoeadError::NonPositive {
            name: "count",
            value: count,
        });
    }
    if num_objectives == 0 {
        return Err(MoeadError::NonPositive {
            name: "num_objectives",
            value: num_objectives,
        });
    }

    let mut vectors = Vec::with_capacity(count);
    for _ in 0..count {
        let mut entries: Vec<f64> = (0..num_objectives)
            // 1 - u lies in (0, 1], keeping the logarithm finite
            .map(|_| -(1.0 - rng.random::<f64>()).ln())
            .collect();
        let total: f64 = entries.iter().sum();
        for e in &mut entries {
            *e /= total;
        }
        vectors.push(WeightVector::new(entries));
    }
    Ok(vectors)
}

/// Greedily selects `target` candidates that are maximally spread apart.
///
/// Farthest-point (max-min) selection: the selected set starts with the
/// first candidate; each round adds the remaining candidate whose minimum
/// Euclidean distance to the already-selected set is largest, ties broken
/// by candidate order. Spread is always measured with Euclidean distance,
/// independent of the similarity measure later used for neighborhoods.
pub fn select_sparse(candidates: &[WeightVector], target: usize) -> Result<Vec<WeightVector>> {
    if target == 0 {
        return Err(MoeadError::NonPositive {
            name: "target",
            value: target,
        });
    }
    if target > candidates.len() {
        return Err(MoeadError::SelectionExceedsCandidates {
            requested: target,
            available: candidates.len(),
        });
    }

    let n = candidates.len();
    let mut selected = Vec::with_capacity(target);
    let mut taken = vec![false; n];

    selected.push(candidates[0].clone());
    taken[0] = true;

    // min_dist[i] = distance from candidate i to the closest selected vector
    let mut min_dist = vec![f64::INFINITY; n];
    for i in 1..n {
        min_dist[i] = candidates[i].euclidean_distance(&candidates[0])?;
    }

    while selected.len() < target {
        let mut best_idx = None;
        let mut best_dist = f64::NEG_INFINITY;
        for i in 0..n {
            if !taken[i] && min_dist[i] > best_dist {
                best_dist = min_dist[i];
                best_idx = Some(i);
            }
        }
        // target <= n guarantees an untaken candidate remains
        let next = best_idx.expect("candidate pool exhausted before target reached");
        taken[next] = true;
        for i in 0..n {
            if !taken[i] {
                let d = candidates[i].euclidean_distance(&candidates[next])?;
                if d < min_dist[i] {
                    min_dist[i] = d;
                }
            }
        }
        selected.push(candidates[next].clone());
    }

    Ok(selected)
}

/// Produces exactly `num_problems` well-spread weight vectors.
///
/// Oversamples the simplex with `overfill * num_problems` random points,
/// then keeps a maximally sparse subset of `num_problems` of them. This is
/// the sole entry point the decomposition loop uses for weight-vector
/// generation; given a seeded rng the output is fully reproducible.
pub fn decompose<R: Rng>(
    num_problems: usize,
    num_objectives: usize,
    overfill: usize,
    rng: &mut R,
) -> Result<Vec<WeightVector>> {
    if num_problems == 0 {
        return Err(MoeadError::NonPositive {
            name: "num_problems",
            value: num_problems,
        });
    }
    if num_objectives == 0 {
        return Err(MoeadError::NonPositive {
            name: "num_objectives",
            value: num_objectives,
        });
    }
    if overfill == 0 {
        return Err(MoeadError::NonPositive {
            name: "overfill",
            value: overfill,
        });
    }

    let candidates = fill_simplex(overfill * num_problems, num_objectives, rng)?;
    select_sparse(&candidates, num_problems)
}
