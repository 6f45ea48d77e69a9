//! Decomposition-based multi-objective evolutionary optimization (MOEA/D).
//!
//! MOEA/D converts a multi-objective problem into a family of scalar
//! subproblems, one per weight vector spread over the objective simplex,
//! and improves one representative solution per subproblem using only
//! neighborhood-local information:
//!
//! - **Weight generation**: uniform simplex sampling plus greedy
//!   maximally-sparse subset selection ([`weights`]).
//! - **Neighborhoods**: for each weight vector, the `T` closest peers
//!   under a pluggable similarity measure ([`neighborhood`]).
//! - **The decomposition loop**: per generation, per subproblem —
//!   neighborhood-local mating, order-dependent best-offspring selection
//!   under weak dominance, repair, neighbor replacement, and archive
//!   maintenance ([`runner`]).
//!
//! Solution encoding, objective evaluation, mating and repair are owned
//! by the caller behind the [`MoeadProblem`] trait; dominance comparison
//! is owned by the caller behind [`Objectives`]. The engine is strictly
//! sequential and synchronous: replacement in subproblem `i` must be
//! visible to subproblem `i + 1`.
//!
//! # Example
//!
//! ```ignore
//! use moead::{Moead, MoeadConfig, SimilarityMeasure};
//!
//! let config = MoeadConfig::default()
//!     .with_num_objectives(2)
//!     .with_num_problems(50)
//!     .with_similarity(SimilarityMeasure::Euclidean)
//!     .with_seed(42);
//!
//! let mut moead = Moead::new(config)?;
//! let result = moead.run(&my_problem, 250)?;
//! for solution in &result.front {
//!     // the non-dominated frontier
//! }
//! ```
//!
//! # References
//!
//! - Zhang & Li (2007), "MOEA/D: A Multiobjective Evolutionary Algorithm
//!   Based on Decomposition"
//! - Deb, Bandaru & Seada (2019), "Generating Uniformly Distributed Points
//!   on a Unit Simplex for Evolutionary Many-Objective Optimization"

pub mod config;
pub mod error;
pub mod neighborhood;
pub mod runner;
pub mod selection;
pub mod types;
pub mod weights;

pub use config::MoeadConfig;
pub use error::{MoeadError, Result};
pub use neighborhood::{create_neighborhood, SimilarityMeasure};
pub use runner::{Moead, MoeadResult};
pub use selection::select_parents;
pub use types::{
    Individual, MoeadProblem, ObjectiveVector, Objectives, Population, SolutionId,
    UnboundedArchive,
};
pub use weights::{decompose, fill_simplex, select_sparse, WeightVector};
