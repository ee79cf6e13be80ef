//! Coverage evaluation for candidate solutions.

use crate::distance::DistanceIndex;
use crate::solution::Solution;

/// Mark every vertex within the radius of some shop.
pub fn mark_covered(index: &DistanceIndex, solution: &Solution) -> Vec<bool> {
    let mut covered = vec![false; index.vertex_count()];
    for shop in solution.iter() {
        for &vertex in index.within(shop) {
            covered[vertex] = true;
        }
    }
    covered
}

/// Count the vertices left uncovered.
pub fn count_uncovered(covered: &[bool]) -> usize {
    covered.iter().filter(|&&c| !c).count()
}

/// A solution is feasible when it covers every vertex.
pub fn is_feasible(index: &DistanceIndex, solution: &Solution) -> bool {
    mark_covered(index, solution).iter().all(|&c| c)
}
