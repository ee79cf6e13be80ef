//! Greedy construction of the starting solution.

use crate::distance::DistanceIndex;
use crate::solution::Solution;

/// Scan vertices in increasing id order, opening a shop at each vertex that
/// is still uncovered when reached.
///
/// Every vertex is either chosen itself or covered by an earlier shop, so the
/// result is always feasible. No randomness is involved.
pub fn build_greedily(index: &DistanceIndex) -> Solution {
    let mut solution = Solution::new();
    let mut covered = vec![false; index.vertex_count()];

    for vertex in 0..index.vertex_count() {
        if covered[vertex] {
            continue;
        }

        solution.insert(vertex);
        for &close in index.within(vertex) {
            covered[close] = true;
        }
    }

    solution
}
