//! The generational decomposition loop.
//!
//! [`Moead`] wires the pieces together: weight vectors are decomposed
//! once, neighborhoods are built once, and every generation each
//! subproblem mates within its neighborhood, picks its best offspring,
//! repairs it, and propagates it into every neighboring slot it weakly
//! dominates.
//!
//! The loop is strictly sequential: subproblem `i` may replace
//! representatives that subproblem `i + 1` reads (neighborhoods overlap),
//! so updates must be visible in order. Termination is owned by the
//! caller, which invokes [`step`](Moead::step) once per generation;
//! [`run`](Moead::run) is a convenience driver for a fixed generation
//! count.

use crate::config::MoeadConfig;
use crate::error::{MoeadError, Result};
use crate::neighborhood::create_neighborhood;
use crate::selection::select_parents;
use crate::types::{
    Individual, MoeadProblem, Objectives, Population, SolutionId, UnboundedArchive,
};
use crate::weights::{decompose, WeightVector};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Outcome of a [`Moead::run`] call.
#[derive(Debug, Clone)]
pub struct MoeadResult<I> {
    /// Snapshot of the non-dominated archive after the last generation.
    pub front: Vec<I>,

    /// Number of generations executed by this call.
    pub generations: usize,

    /// Archive size at the end of each generation.
    pub archive_history: Vec<usize>,
}

/// The MOEA/D optimizer state.
///
/// # Usage
///
/// ```ignore
/// let config = MoeadConfig::default().with_num_objectives(2).with_seed(42);
/// let mut moead = Moead::new(config)?;
/// moead.initialize(&problem)?;
/// for _ in 0..250 {
///     moead.step(&problem)?;
/// }
/// let front = moead.archive().as_slice();
/// ```
pub struct Moead<P: MoeadProblem> {
    config: MoeadConfig,
    rng: StdRng,
    weights: Vec<WeightVector>,
    neighborhoods: Vec<Vec<usize>>,
    /// One representative per subproblem, by solution id. Slots may share
    /// an id after replacement.
    x: Vec<SolutionId>,
    population: Population<P::Individual>,
    archive: UnboundedArchive<P::Individual>,
    next_id: SolutionId,
    generation: usize,
    initialized: bool,
}

impl<P: MoeadProblem> Moead<P> {
    /// Creates an optimizer from a validated configuration.
    ///
    /// Configuration errors are fatal: they are raised here, before any
    /// state exists, and are never retried.
    pub fn new(config: MoeadConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            config,
            rng,
            weights: Vec::new(),
            neighborhoods: Vec::new(),
            x: Vec::new(),
            population: Population::new(),
            archive: UnboundedArchive::new(),
            next_id: 0,
            generation: 0,
            initialized: false,
        })
    }

    /// Pre-seeds the population with existing solutions.
    ///
    /// Must be called before [`initialize`](Moead::initialize). If fewer
    /// solutions than subproblems are provided, the factory fills the
    /// rest; any surplus beyond the subproblem count is dropped at
    /// initialization so the population keeps mirroring the
    /// representative array exactly.
    pub fn seed_population(&mut self, individuals: Vec<P::Individual>) {
        for individual in individuals {
            let id = self.alloc_id();
            self.population.insert(id, individual);
        }
    }

    /// Builds the run-constant state and the initial representatives.
    ///
    /// 1. Decomposes the objective simplex into one weight vector per
    ///    subproblem.
    /// 2. Starts an empty unbounded archive.
    /// 3. Builds each subproblem's neighborhood from the full
    ///    weight-vector list (self included).
    /// 4. Tops the population up to the subproblem count via the factory.
    /// 5. Takes the first `num_problems` population members, in the
    ///    population's own iteration order, as representatives.
    pub fn initialize(&mut self, problem: &P) -> Result<()> {
        self.weights = decompose(
            self.config.num_problems,
            self.config.num_objectives,
            self.config.overfill,
            &mut self.rng,
        )?;

        self.archive = UnboundedArchive::new();

        self.neighborhoods = Vec::with_capacity(self.config.num_problems);
        for i in 0..self.config.num_problems {
            self.neighborhoods.push(create_neighborhood(
                self.config.similarity,
                &self.weights[i],
                &self.weights,
                self.config.neighborhood_size,
            )?);
        }

        while self.population.len() < self.config.num_problems {
            let individual = problem
                .create_individual(&mut self.rng)
                .map_err(MoeadError::collaborator)?;
            let id = self.alloc_id();
            self.population.insert(id, individual);
        }

        self.x = self.population.ids();
        for surplus in self.x.split_off(self.config.num_problems) {
            self.population.remove(surplus);
        }

        self.generation = 0;
        self.initialized = true;
        Ok(())
    }

    /// Executes one generation.
    ///
    /// Collaborator failures abort the generation where they occur; the
    /// representatives, population and archive keep whatever partially
    /// updated state existed at that point (no rollback).
    pub fn step(&mut self, problem: &P) -> Result<()> {
        if !self.initialized {
            return Err(MoeadError::MissingInput("initialize must run before step"));
        }

        // Objectives must be current before any dominance comparison.
        for (_, individual) in self.population.iter_mut() {
            if !individual.is_evaluated() {
                problem
                    .evaluate(individual)
                    .map_err(MoeadError::collaborator)?;
            }
        }

        for i in 0..self.config.num_problems {
            // Reproduction: mate parents drawn from the neighborhood.
            let parent_slots = select_parents(
                &self.neighborhoods[i],
                self.config.number_of_parents,
                &mut self.rng,
            )?;
            let parents: Vec<&P::Individual> = parent_slots
                .iter()
                .map(|&slot| {
                    self.population
                        .get(self.x[slot])
                        .expect("population out of sync with representative array")
                })
                .collect();

            let mut offspring = problem
                .offspring(self.config.new_individuals, &parents, &mut self.rng)
                .map_err(MoeadError::collaborator)?;

            for child in &mut offspring {
                if !child.is_evaluated() {
                    problem.evaluate(child).map_err(MoeadError::collaborator)?;
                }
            }

            let best = best_offspring(offspring)?;

            // Improvement: problem-specific repair of the chosen child.
            let best = problem.repair(best).map_err(MoeadError::collaborator)?;

            // Replacement: propagate into every dominated neighbor slot.
            let best_id = self.alloc_id();
            let mut placed = false;
            for idx in 0..self.config.neighborhood_size {
                let slot = self.neighborhoods[i][idx];
                let displaced_id = self.x[slot];
                if displaced_id == best_id {
                    continue;
                }
                let displaced = self
                    .population
                    .get(displaced_id)
                    .expect("population out of sync with representative array");
                if best.objectives().weakly_dominates(displaced.objectives()) {
                    self.x[slot] = best_id;
                    if !placed {
                        self.population.insert(best_id, best.clone());
                        placed = true;
                    }
                    if !self.x.contains(&displaced_id) {
                        self.population.remove(displaced_id);
                    }
                }
            }

            self.archive.update(&best);
        }

        self.generation += 1;
        Ok(())
    }

    /// Initializes (when needed) and runs a fixed number of generations.
    pub fn run(&mut self, problem: &P, generations: usize) -> Result<MoeadResult<P::Individual>> {
        if !self.initialized {
            self.initialize(problem)?;
        }
        let mut archive_history = Vec::with_capacity(generations);
        for _ in 0..generations {
            self.step(problem)?;
            archive_history.push(self.archive.len());
        }
        Ok(MoeadResult {
            front: self.archive.as_slice().to_vec(),
            generations,
            archive_history,
        })
    }

    /// The decomposed weight vectors (empty before initialization).
    pub fn weights(&self) -> &[WeightVector] {
        &self.weights
    }

    /// Per-subproblem neighborhoods (empty before initialization).
    pub fn neighborhoods(&self) -> &[Vec<usize>] {
        &self.neighborhoods
    }

    /// Representative ids, one per subproblem.
    pub fn representative_ids(&self) -> &[SolutionId] {
        &self.x
    }

    /// Current representative solutions, one per subproblem.
    pub fn representatives(&self) -> Vec<&P::Individual> {
        self.x
            .iter()
            .map(|&id| {
                self.population
                    .get(id)
                    .expect("population out of sync with representative array")
            })
            .collect()
    }

    /// The working population.
    pub fn population(&self) -> &Population<P::Individual> {
        &self.population
    }

    /// The non-dominated archive.
    pub fn archive(&self) -> &UnboundedArchive<P::Individual> {
        &self.archive
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether [`initialize`](Moead::initialize) has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn alloc_id(&mut self) -> SolutionId {
        self.next_id += 1;
        self.next_id
    }
}

/// Left-to-right scan for the best offspring.
///
/// Starts at the first offspring and replaces the running best whenever a
/// later offspring weakly dominates it. Weak dominance is not a total
/// order, so the result is order-dependent: an incomparable later
/// offspring never displaces the running best. This mirrors the reference
/// algorithm and is deliberate — it is not a best-of-set search.
fn best_offspring<I: Individual>(offspring: Vec<I>) -> Result<I> {
    let mut iter = offspring.into_iter();
    let mut best = iter
        .next()
        .ok_or(MoeadError::MissingInput("offspring"))?;
    for candidate in iter {
        if candidate.objectives().weakly_dominates(best.objectives()) {
            best = candidate;
        }
    }
    Ok(best)
}
