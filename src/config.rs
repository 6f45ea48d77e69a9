//! MOEA/D configuration.
//!
//! [`MoeadConfig`] holds every parameter the decomposition loop needs.
//! All validation happens up front in [`MoeadConfig::validate`] — an
//! invalid configuration is a fatal error raised before any state is
//! created, never retried.

use crate::error::{MoeadError, Result};
use crate::neighborhood::SimilarityMeasure;

/// Configuration for the decomposition loop.
///
/// # Defaults
///
/// ```
/// use moead::MoeadConfig;
///
/// let config = MoeadConfig::default();
/// assert_eq!(config.num_objectives, 5);
/// assert_eq!(config.num_problems, 20);
/// assert_eq!(config.neighborhood_size, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use moead::{MoeadConfig, SimilarityMeasure};
///
/// let config = MoeadConfig::default()
///     .with_num_objectives(3)
///     .with_num_problems(50)
///     .with_neighborhood_size(8)
///     .with_similarity(SimilarityMeasure::Cosine)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoeadConfig {
    /// Number of objectives, i.e. the length of every weight vector.
    pub num_objectives: usize,

    /// Number of scalar subproblems (and of weight vectors).
    pub num_problems: usize,

    /// Number of weight vectors in each subproblem's neighborhood.
    ///
    /// Must not exceed `num_problems`: neighborhoods are drawn from the
    /// full weight-vector list, the vector itself included.
    pub neighborhood_size: usize,

    /// Number of parents mated per subproblem per generation.
    ///
    /// Parent selection itself requires at least 2; a value of 1 passes
    /// construction but fails on the first step.
    pub number_of_parents: usize,

    /// Number of offspring produced per subproblem per generation.
    pub new_individuals: usize,

    /// Oversampling factor for weight-vector generation: the sparse
    /// subset of `num_problems` vectors is picked from
    /// `overfill * num_problems` random simplex points.
    pub overfill: usize,

    /// Similarity measure used for neighborhood construction.
    pub similarity: SimilarityMeasure,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MoeadConfig {
    fn default() -> Self {
        Self {
            num_objectives: 5,
            num_problems: 20,
            neighborhood_size: 10,
            number_of_parents: 2,
            new_individuals: 1,
            overfill: 10,
            similarity: SimilarityMeasure::default(),
            seed: None,
        }
    }
}

impl MoeadConfig {
    /// Sets the number of objectives.
    pub fn with_num_objectives(mut self, n: usize) -> Self {
        self.num_objectives = n;
        self
    }

    /// Sets the number of subproblems.
    pub fn with_num_problems(mut self, n: usize) -> Self {
        self.num_problems = n;
        self
    }

    /// Sets the neighborhood size.
    pub fn with_neighborhood_size(mut self, n: usize) -> Self {
        self.neighborhood_size = n;
        self
    }

    /// Sets the number of parents per mating.
    pub fn with_number_of_parents(mut self, n: usize) -> Self {
        self.number_of_parents = n;
        self
    }

    /// Sets the number of offspring per subproblem per generation.
    pub fn with_new_individuals(mut self, n: usize) -> Self {
        self.new_individuals = n;
        self
    }

    /// Sets the weight-vector oversampling factor.
    pub fn with_overfill(mut self, n: usize) -> Self {
        self.overfill = n;
        self
    }

    /// Sets the similarity measure for neighborhoods.
    pub fn with_similarity(mut self, measure: SimilarityMeasure) -> Self {
        self.similarity = measure;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the configuration for consistency.
    ///
    /// Every count must be at least 1, the neighborhood must fit inside
    /// the weight-vector list, and parent selection must fit inside the
    /// neighborhood.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("num_objectives", self.num_objectives),
            ("num_problems", self.num_problems),
            ("neighborhood_size", self.neighborhood_size),
            ("new_individuals", self.new_individuals),
            ("overfill", self.overfill),
        ] {
            if value == 0 {
                return Err(MoeadError::NonPositive { name, value });
            }
        }
        if self.number_of_parents < 1 {
            return Err(MoeadError::TooFewParents {
                requested: self.number_of_parents,
                minimum: 1,
            });
        }
        if self.neighborhood_size > self.num_problems {
            return Err(MoeadError::SelectionExceedsCandidates {
                requested: self.neighborhood_size,
                available: self.num_problems,
            });
        }
        if self.number_of_parents > self.neighborhood_size {
            return Err(MoeadError::SelectionExceedsCandidates {
                requested: self.number_of_parents,
                available: self.neighborhood_size,
            });
        }
        Ok(())
    }
}
