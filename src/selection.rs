//! Random parent selection from a neighborhood.
//!
//! Reproduction in MOEA/D is neighborhood-local: parents for subproblem
//! `i` are drawn only from the indices in `i`'s neighborhood.

use crate::error::{MoeadError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Draws `number_of_parents` distinct entries from `neighborhood`.
///
/// When the whole neighborhood is requested, the entries are returned in
/// their original order. Otherwise the result is a uniformly random
/// subset without replacement (shuffle, then take a prefix); no ordering
/// guarantee is given beyond that.
///
/// # Errors
///
/// - [`MoeadError::NeighborhoodTooSmall`] when `neighborhood` has fewer
///   than 2 entries
/// - [`MoeadError::TooFewParents`] when `number_of_parents < 2`
/// - [`MoeadError::SelectionExceedsCandidates`] when more parents are
///   requested than the neighborhood contains
pub fn select_parents<R: Rng>(
    neighborhood: &[usize],
    number_of_parents: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if neighborhood.len() < 2 {
        return Err(MoeadError::NeighborhoodTooSmall(neighborhood.len()));
    }
    if number_of_parents < 2 {
        return Err(MoeadError::TooFewParents {
            requested: number_of_parents,
            minimum: 2,
        });
    }
    if number_of_parents > neighborhood.len() {
        return Err(MoeadError::SelectionExceedsCandidates {
            requested: number_of_parents,
            available: neighborhood.len(),
        });
    }

    if number_of_parents == neighborhood.len() {
        return Ok(neighborhood.to_vec());
    }

    let mut pool = neighborhood.to_vec();
    pool.shuffle(rng);
    pool.truncate(number_of_parents);
    Ok(pool)
}
