//! Precomputed hop-distance neighborhoods.
//!
//! For every vertex `s` the index stores the vertices reachable from `s` in at
//! most `radius` hops, in breadth-first discovery order with `s` first. The
//! index is built once per radius and read-only afterwards.

use crate::graph::Graph;
use std::collections::VecDeque;

/// Vertices within the covering radius of each vertex.
#[derive(Debug, Clone)]
pub struct DistanceIndex {
    radius: usize,
    close: Vec<Vec<usize>>,
}

impl DistanceIndex {
    /// Run a bounded breadth-first search from every vertex.
    pub fn build(graph: &Graph, radius: usize) -> Self {
        let n = graph.vertex_count();
        let mut close = Vec::with_capacity(n);

        // Stamp of the last search that reached each vertex, so the visited
        // marks don't need clearing between sources.
        let mut seen = vec![usize::MAX; n];
        let mut queue = VecDeque::new();

        for source in 0..n {
            let mut reached = Vec::new();

            queue.clear();
            queue.push_back((source, 0));
            seen[source] = source;

            while let Some((vertex, distance)) = queue.pop_front() {
                if distance > radius {
                    continue;
                }
                reached.push(vertex);

                // Nothing past the radius is ever recorded
                if distance == radius {
                    continue;
                }

                for neighbor in graph.neighbors(vertex) {
                    if seen[neighbor] != source {
                        seen[neighbor] = source;
                        queue.push_back((neighbor, distance + 1));
                    }
                }
            }

            close.push(reached);
        }

        DistanceIndex { radius, close }
    }

    /// The vertices within the radius of `source`, including `source` itself.
    ///
    /// Panics if `source` is not below [`DistanceIndex::vertex_count`].
    pub fn within(&self, source: usize) -> &[usize] {
        &self.close[source]
    }

    /// Whether a shop at `source` covers `vertex`.
    ///
    /// Panics if `source` is out of range.
    pub fn covers(&self, source: usize, vertex: usize) -> bool {
        self.close[source].contains(&vertex)
    }

    /// The radius the index was built for.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Number of vertices indexed.
    pub fn vertex_count(&self) -> usize {
        self.close.len()
    }

    /// Total number of (source, vertex) pairs stored.
    pub fn total_entries(&self) -> usize {
        self.close.iter().map(Vec::len).sum()
    }
}
