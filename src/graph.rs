//! Undirected, unweighted graph on which shops are placed.

use anyhow::{bail, Result};
use petgraph::graph::{NodeIndex, UnGraph};

/// Largest vertex or edge count the graph's `u32` indices can hold.
pub const MAX_ELEMENTS: usize = u32::MAX as usize;

/// An undirected graph over vertices `0..vertex_count`.
///
/// Edges are stored exactly as given: parallel edges and self-loops are kept
/// and counted, since neither can change which vertices lie within a given
/// hop distance.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraph<(), ()>,
    /// Number of edge endpoints at each vertex (a self-loop counts twice)
    degree: Vec<usize>,
    self_loops: usize,
    duplicate_edges: usize,
}

impl Graph {
    /// Create a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count, 0)
    }

    /// Create a graph with `vertex_count` vertices and room for `edge_count` edges.
    ///
    /// Both counts are trusted; use [`Graph::check_counts`] first on untrusted input.
    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        let mut inner = UnGraph::with_capacity(vertex_count, edge_count);
        for _ in 0..vertex_count {
            inner.add_node(());
        }

        Graph {
            inner,
            degree: vec![0; vertex_count],
            self_loops: 0,
            duplicate_edges: 0,
        }
    }

    /// Fail if a graph of this size cannot be indexed.
    pub fn check_counts(vertex_count: usize, edge_count: usize) -> Result<()> {
        if vertex_count > MAX_ELEMENTS {
            bail!("vertex count {vertex_count} exceeds the supported maximum of {MAX_ELEMENTS}");
        }
        if edge_count > MAX_ELEMENTS {
            bail!("edge count {edge_count} exceeds the supported maximum of {MAX_ELEMENTS}");
        }
        Ok(())
    }

    /// Build a graph from an edge list.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        Self::check_counts(vertex_count, edges.len())?;
        let mut graph = Graph::with_capacity(vertex_count, edges.len());
        for &(a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Add an undirected edge between `a` and `b`.
    ///
    /// Fails if either endpoint is not a vertex of the graph.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<()> {
        let n = self.vertex_count();
        if a >= n || b >= n {
            bail!("edge ({a}, {b}) references a vertex outside 0..{n}");
        }

        let (na, nb) = (NodeIndex::new(a), NodeIndex::new(b));
        if a == b {
            self.self_loops += 1;
        } else if self.inner.find_edge(na, nb).is_some() {
            self.duplicate_edges += 1;
        }

        self.inner.add_edge(na, nb, ());
        self.degree[a] += 1;
        self.degree[b] += 1;
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges, duplicates and self-loops included.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Degree of a vertex.
    ///
    /// Panics if `vertex` is not below [`Graph::vertex_count`].
    pub fn degree(&self, vertex: usize) -> usize {
        self.degree[vertex]
    }

    /// Iterate over the vertices adjacent to `vertex`.
    ///
    /// A vertex outside the graph has no neighbors.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.inner
            .neighbors(NodeIndex::new(vertex))
            .map(|node| node.index())
    }

    /// Number of self-loops that were added.
    pub fn self_loop_count(&self) -> usize {
        self.self_loops
    }

    /// Number of edges that repeated an already present vertex pair.
    pub fn duplicate_edge_count(&self) -> usize {
        self.duplicate_edges
    }

    /// Vertices with no incident edges.
    pub fn isolated_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&v| self.degree[v] == 0)
            .collect()
    }
}
