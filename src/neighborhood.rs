//! Unit moves used by the annealing search.

use crate::solution::Solution;
use rand::Rng;

/// The move that produced a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// The shop at `position` was dropped.
    Remove { position: usize, vertex: usize },
    /// A new shop was appended.
    Add { vertex: usize },
    /// The drawn vertex was already a shop; the neighbor equals the current
    /// solution.
    Unchanged { vertex: usize },
}

/// Produce one neighbor of `current` by a single random move.
///
/// With a non-empty solution a fair coin picks between removing a uniformly
/// chosen shop and adding a uniformly chosen vertex from `0..vertex_count`;
/// an empty solution always adds. The neighbor is not checked for coverage.
///
/// `vertex_count` must be positive whenever `current` is empty.
pub fn generate_neighbor<R: Rng + ?Sized>(
    current: &Solution,
    vertex_count: usize,
    rng: &mut R,
) -> (Solution, Move) {
    let mut neighbor = current.clone();

    if !neighbor.is_empty() && rng.gen_bool(0.5) {
        let position = rng.gen_range(0..neighbor.energy());
        let vertex = neighbor.remove_at(position);
        return (neighbor, Move::Remove { position, vertex });
    }

    let vertex = rng.gen_range(0..vertex_count);
    let mv = if neighbor.insert(vertex) {
        Move::Add { vertex }
    } else {
        Move::Unchanged { vertex }
    };
    (neighbor, mv)
}
