//! Problem definition and input parsing.
//!
//! The input is a whitespace-separated token stream:
//!
//! ```text
//! C R
//! c1 c2      (R lines, one undirected edge each)
//! d
//! ```

use anyhow::{bail, Context, Result};
use log::warn;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::graph::Graph;

/// A shop placement instance: the graph plus the covering radius.
#[derive(Debug, Clone)]
pub struct Problem {
    pub graph: Graph,
    /// Maximum hop distance at which a shop covers a vertex
    pub radius: usize,
}

impl Problem {
    /// Create a new problem.
    pub fn new(graph: Graph, radius: usize) -> Self {
        Problem { graph, radius }
    }

    /// Number of vertices in the instance.
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Parse a problem from its textual form.
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = input.split_whitespace();

        let vertex_count = next_number(&mut tokens, "vertex count")?;
        let edge_count = next_number(&mut tokens, "edge count")?;

        Graph::check_counts(vertex_count, edge_count)?;

        // The edge count is unchecked against the input length, so edges are
        // not preallocated from it
        let mut graph = Graph::new(vertex_count);
        for i in 0..edge_count {
            let what = format!("endpoint of edge #{}", i + 1);
            let a = next_number(&mut tokens, &what)?;
            let b = next_number(&mut tokens, &what)?;
            graph
                .add_edge(a, b)
                .with_context(|| format!("invalid edge #{}", i + 1))?;
        }

        let radius = next_number(&mut tokens, "covering radius")?;

        let trailing = tokens.count();
        if trailing > 0 {
            warn!("ignoring {trailing} trailing token(s) after the covering radius");
        }
        if graph.self_loop_count() > 0 || graph.duplicate_edge_count() > 0 {
            warn!(
                "input contains {} self-loop(s) and {} duplicate edge(s); keeping them as given",
                graph.self_loop_count(),
                graph.duplicate_edge_count()
            );
        }

        Ok(Problem::new(graph, radius))
    }

    /// Read and parse a problem from any reader (e.g. stdin).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .context("failed to read problem input")?;
        Self::parse(&input)
    }

    /// Load a problem from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)
            .with_context(|| format!("failed to read problem file {}", path.display()))?;
        Self::parse(&input)
    }
}

/// Pull the next token and parse it as a non-negative integer.
fn next_number<'a, I>(tokens: &mut I, what: &str) -> Result<usize>
where
    I: Iterator<Item = &'a str>,
{
    let Some(token) = tokens.next() else {
        bail!("unexpected end of input while reading {what}");
    };
    token
        .parse::<usize>()
        .with_context(|| format!("expected a non-negative integer for {what}, found {token:?}"))
}
