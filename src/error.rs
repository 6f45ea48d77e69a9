//! Error types for the decomposition engine.
//!
//! Configuration and argument errors are raised at the point of detection
//! and are never retried; failures coming from the problem-side
//! collaborators (mating, repair, evaluation) are passed through
//! unmodified so the hosting driver can decide on a recovery policy.

use thiserror::Error;

/// Errors produced by the MOEA/D core.
#[derive(Debug, Error)]
pub enum MoeadError {
    /// A count parameter that must be at least 1 was zero.
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: usize },

    /// Two weight vectors of different lengths were combined.
    #[error("weight vector length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// More items were requested than the candidate pool contains.
    #[error("cannot select {requested} items from {available} candidate(s)")]
    SelectionExceedsCandidates { requested: usize, available: usize },

    /// A neighborhood with fewer than two entries cannot supply parents.
    #[error("neighborhood must contain at least 2 entries, got {0}")]
    NeighborhoodTooSmall(usize),

    /// Parent selection needs at least two parents.
    #[error("number of parents must be at least {minimum}, got {requested}")]
    TooFewParents { requested: usize, minimum: usize },

    /// Cosine similarity is undefined for a zero-norm weight vector.
    #[error("cosine similarity is undefined for a zero-norm weight vector")]
    ZeroNorm,

    /// An index did not refer to a valid position.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A required input was absent (e.g. stepping before initialization,
    /// or an empty candidate list where at least one entry is required).
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    /// A failure raised by a problem-side collaborator, propagated as-is.
    #[error(transparent)]
    Collaborator(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl MoeadError {
    /// Wraps a collaborator failure for propagation through the loop.
    pub fn collaborator<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        MoeadError::Collaborator(Box::new(err))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MoeadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MoeadError::NonPositive {
            name: "num_problems",
            value: 0,
        };
        assert_eq!(err.to_string(), "num_problems must be positive, got 0");

        let err = MoeadError::SelectionExceedsCandidates {
            requested: 5,
            available: 3,
        };
        assert_eq!(err.to_string(), "cannot select 5 items from 3 candidate(s)");
    }

    #[test]
    fn test_collaborator_error_is_transparent() {
        let inner = std::io::Error::other("evaluation backend down");
        let err = MoeadError::collaborator(inner);
        assert_eq!(err.to_string(), "evaluation backend down");
    }
}
