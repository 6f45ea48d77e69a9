//! Core trait definitions and shared containers.
//!
//! The decomposition engine never looks inside a candidate solution. It
//! interacts with the problem side through two seams:
//!
//! - [`Individual`] / [`Objectives`]: read access to a solution's
//!   evaluated objective values and the weak-dominance comparison between
//!   them. Weak dominance is owned by the implementor — it is asymmetric,
//!   not necessarily transitive, and the engine never assumes it forms a
//!   total order.
//! - [`MoeadProblem`]: the collaborator bundle — solution factory,
//!   objective evaluation, mating, and repair. All four are fallible and
//!   their errors propagate through the loop unmodified.
//!
//! The module also provides the containers the loop maintains:
//! [`Population`] (the working set, always mirroring the representative
//! array) and [`UnboundedArchive`] (the non-dominated frontier).

use rand::Rng;

/// Identifier the runner assigns to each solution it has ever created.
///
/// Replacement propagates one offspring into several representative
/// slots; the id is what lets the population stay a set of distinct
/// solutions while the representative array freely shares entries.
pub type SolutionId = u64;

/// Evaluated objective values of a solution.
///
/// The comparison contract is intentionally loose: `a.weakly_dominates(b)`
/// answers "is `a` an acceptable replacement for `b`", with the exact
/// tie-break policy owned by the implementor.
pub trait Objectives {
    /// Returns `true` when `self` is no worse than `other` on every
    /// objective. Asymmetric; not guaranteed transitive.
    fn weakly_dominates(&self, other: &Self) -> bool;
}

/// A minimizing objective vector, provided for the common case.
///
/// An empty vector means "not evaluated yet" and never dominates
/// anything, nor is it dominated. Vectors of different lengths are
/// incomparable.
///
/// # Examples
///
/// ```
/// use moead::{ObjectiveVector, Objectives};
///
/// let a = ObjectiveVector::new(vec![1.0, 2.0]);
/// let b = ObjectiveVector::new(vec![2.0, 2.0]);
/// assert!(a.weakly_dominates(&b));
/// assert!(!b.weakly_dominates(&a));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectiveVector {
    values: Vec<f64>,
}

impl ObjectiveVector {
    /// Wraps evaluated objective values (all minimized).
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// An unevaluated placeholder.
    pub fn unevaluated() -> Self {
        Self { values: Vec::new() }
    }

    /// The objective values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns `true` once objective values are present.
    pub fn is_evaluated(&self) -> bool {
        !self.values.is_empty()
    }
}

impl Objectives for ObjectiveVector {
    fn weakly_dominates(&self, other: &Self) -> bool {
        if self.values.is_empty() || self.values.len() != other.values.len() {
            return false;
        }
        self.values
            .iter()
            .zip(&other.values)
            .all(|(a, b)| a <= b)
    }
}

/// A candidate solution as seen by the decomposition engine.
pub trait Individual: Clone {
    /// The evaluated-objectives type this solution carries.
    type Objectives: Objectives;

    /// The solution's current objectives. Only meaningful once
    /// [`is_evaluated`](Individual::is_evaluated) returns `true`; the
    /// engine completes every solution before comparing any.
    fn objectives(&self) -> &Self::Objectives;

    /// Whether this solution's objectives are current.
    fn is_evaluated(&self) -> bool;
}

/// The problem-side collaborators of the decomposition loop.
///
/// Implementors supply solution creation, objective evaluation, mating
/// and repair. The engine drives these strictly sequentially and never
/// retries: any error aborts the in-progress generation and is handed
/// back to the caller as-is.
pub trait MoeadProblem {
    /// The solution representation.
    type Individual: Individual;

    /// The collaborator failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates a fresh (unevaluated) solution. Used to top the population
    /// up to the number of subproblems at initialization.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Result<Self::Individual, Self::Error>;

    /// Computes and stores the solution's objectives.
    ///
    /// The engine skips solutions that are already evaluated, so a batch
    /// pass over the population is idempotent.
    fn evaluate(&self, individual: &mut Self::Individual) -> Result<(), Self::Error>;

    /// Produces exactly `count` offspring from the given parents.
    fn offspring<R: Rng>(
        &self,
        count: usize,
        parents: &[&Self::Individual],
        rng: &mut R,
    ) -> Result<Vec<Self::Individual>, Self::Error>;

    /// Problem-specific local improvement of a new solution before it
    /// competes with its neighbors. The default is a no-op.
    fn repair(&self, individual: Self::Individual) -> Result<Self::Individual, Self::Error> {
        Ok(individual)
    }
}

/// The working set of representative solutions.
///
/// An insertion-ordered set of distinct solutions keyed by
/// [`SolutionId`]. The runner keeps it in lockstep with the
/// representative array: at any point the population contains exactly the
/// solutions some representative slot refers to.
#[derive(Debug, Clone, Default)]
pub struct Population<I> {
    members: Vec<(SolutionId, I)>,
}

impl<I> Population<I> {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: SolutionId) -> bool {
        self.members.iter().any(|(m, _)| *m == id)
    }

    /// Adds a solution under `id`. Returns `false` (and leaves the
    /// population unchanged) when the id is already present.
    pub fn insert(&mut self, id: SolutionId, individual: I) -> bool {
        if self.contains(id) {
            return false;
        }
        self.members.push((id, individual));
        true
    }

    /// Removes and returns the solution stored under `id`.
    pub fn remove(&mut self, id: SolutionId) -> Option<I> {
        let pos = self.members.iter().position(|(m, _)| *m == id)?;
        Some(self.members.remove(pos).1)
    }

    pub fn get(&self, id: SolutionId) -> Option<&I> {
        self.members.iter().find(|(m, _)| *m == id).map(|(_, i)| i)
    }

    /// Iterates members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (SolutionId, &I)> {
        self.members.iter().map(|(id, i)| (*id, i))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SolutionId, &mut I)> {
        self.members.iter_mut().map(|(id, i)| (*id, i))
    }

    /// Member ids in insertion order.
    pub fn ids(&self) -> Vec<SolutionId> {
        self.members.iter().map(|(id, _)| *id).collect()
    }
}

/// An unbounded archive of mutually non-dominated solutions.
///
/// [`update`](UnboundedArchive::update) maintains the invariant: a
/// candidate weakly dominated by any member is rejected; otherwise every
/// member the candidate weakly dominates is evicted and the candidate is
/// inserted. At no point do two members weakly dominate each other.
#[derive(Debug, Clone, Default)]
pub struct UnboundedArchive<I> {
    members: Vec<I>,
}

impl<I: Individual> UnboundedArchive<I> {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &I> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[I] {
        &self.members
    }

    /// Offers a candidate to the archive. Returns `true` when it was
    /// inserted.
    pub fn update(&mut self, candidate: &I) -> bool {
        if self
            .members
            .iter()
            .any(|m| m.objectives().weakly_dominates(candidate.objectives()))
        {
            return false;
        }
        self.members
            .retain(|m| !candidate.objectives().weakly_dominates(m.objectives()));
        self.members.push(candidate.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct TestInd {
        objectives: ObjectiveVector,
    }

    impl TestInd {
        fn new(values: &[f64]) -> Self {
            Self {
                objectives: ObjectiveVector::new(values.to_vec()),
            }
        }
    }

    impl Individual for TestInd {
        type Objectives = ObjectiveVector;

        fn objectives(&self) -> &ObjectiveVector {
            &self.objectives
        }

        fn is_evaluated(&self) -> bool {
            self.objectives.is_evaluated()
        }
    }

    #[test]
    fn test_weak_dominance_includes_equality() {
        let a = ObjectiveVector::new(vec![1.0, 2.0]);
        let b = ObjectiveVector::new(vec![1.0, 2.0]);
        assert!(a.weakly_dominates(&b));
        assert!(b.weakly_dominates(&a));
    }

    #[test]
    fn test_weak_dominance_strict_case() {
        let a = ObjectiveVector::new(vec![1.0, 2.0]);
        let b = ObjectiveVector::new(vec![1.0, 3.0]);
        assert!(a.weakly_dominates(&b));
        assert!(!b.weakly_dominates(&a));
    }

    #[test]
    fn test_weak_dominance_incomparable() {
        let a = ObjectiveVector::new(vec![1.0, 3.0]);
        let b = ObjectiveVector::new(vec![3.0, 1.0]);
        assert!(!a.weakly_dominates(&b));
        assert!(!b.weakly_dominates(&a));
    }

    #[test]
    fn test_unevaluated_never_dominates() {
        let empty = ObjectiveVector::unevaluated();
        let full = ObjectiveVector::new(vec![1.0]);
        assert!(!empty.weakly_dominates(&empty));
        assert!(!empty.weakly_dominates(&full));
        assert!(!full.weakly_dominates(&empty));
    }

    #[test]
    fn test_population_is_an_ordered_set() {
        let mut pop = Population::new();
        assert!(pop.insert(3, TestInd::new(&[1.0])));
        assert!(pop.insert(1, TestInd::new(&[2.0])));
        assert!(!pop.insert(3, TestInd::new(&[9.0])), "duplicate id rejected");
        assert_eq!(pop.len(), 2);
        assert_eq!(pop.ids(), vec![3, 1]);

        assert!(pop.remove(3).is_some());
        assert!(pop.remove(3).is_none());
        assert_eq!(pop.ids(), vec![1]);
    }

    #[test]
    fn test_archive_rejects_dominated_candidate() {
        let mut archive = UnboundedArchive::new();
        assert!(archive.update(&TestInd::new(&[1.0, 1.0])));
        assert!(!archive.update(&TestInd::new(&[2.0, 2.0])));
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_archive_evicts_dominated_members() {
        let mut archive = UnboundedArchive::new();
        archive.update(&TestInd::new(&[3.0, 1.0]));
        archive.update(&TestInd::new(&[1.0, 3.0]));
        assert_eq!(archive.len(), 2);

        // Dominates both existing members.
        assert!(archive.update(&TestInd::new(&[0.5, 0.5])));
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_archive_rejects_duplicates() {
        let mut archive = UnboundedArchive::new();
        assert!(archive.update(&TestInd::new(&[1.0, 2.0])));
        assert!(!archive.update(&TestInd::new(&[1.0, 2.0])));
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_archive_stays_mutually_non_dominated() {
        let mut archive = UnboundedArchive::new();
        for vals in [
            [5.0, 1.0],
            [1.0, 5.0],
            [3.0, 3.0],
            [2.0, 4.0],
            [4.0, 4.0],
            [0.5, 6.0],
        ] {
            archive.update(&TestInd::new(&vals));
        }
        for a in archive.iter() {
            for b in archive.iter() {
                if !std::ptr::eq(a, b) {
                    assert!(!a.objectives().weakly_dominates(b.objectives()));
                }
            }
        }
    }
}
