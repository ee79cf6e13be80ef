//! Output helpers and run reporting.

use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use crate::annealing::{AnnealingResult, StopReason};
use crate::problem::Problem;
use crate::solution::Solution;

/// Format a duration as minutes, seconds and milliseconds.
pub fn format_duration(duration: Duration) -> String {
    let total_millis = duration.as_millis();
    let minutes = total_millis / 60_000;
    let seconds = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;

    format!("{}m {:02}.{:03}s", minutes, seconds, millis)
}

/// Write a solution in the plain output format: the number of shops on the
/// first line, the shop ids in insertion order on the second.
pub fn write_solution<W: Write>(solution: &Solution, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", solution)
}

/// Save a solution to a file in the plain output format.
pub fn save_solution<P: AsRef<Path>>(solution: &Solution, path: P) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_solution(solution, &mut writer)?;
    writer.flush()
}

/// Summary of a finished search.
pub struct SearchStatistics {
    pub vertices: usize,
    pub edges: usize,
    pub radius: usize,
    pub seed: u64,
    pub runtime: Duration,
    pub greedy_energy: usize,
    pub best_energy: usize,
    pub iterations: u64,
    pub evaluated: u64,
    pub infeasible: u64,
    pub accepted_moves: u64,
    pub improving_moves: u64,
    pub final_temperature: f64,
    pub stop_reason: StopReason,
}

impl SearchStatistics {
    pub fn new(problem: &Problem, result: &AnnealingResult, seed: u64, runtime: Duration) -> Self {
        SearchStatistics {
            vertices: problem.vertex_count(),
            edges: problem.graph.edge_count(),
            radius: problem.radius,
            seed,
            runtime,
            greedy_energy: result.initial_energy,
            best_energy: result.best_energy,
            iterations: result.iterations,
            evaluated: result.evaluated,
            infeasible: result.infeasible,
            accepted_moves: result.accepted_moves,
            improving_moves: result.improving_moves,
            final_temperature: result.final_temperature,
            stop_reason: result.stop_reason,
        }
    }

    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Search Statistics:
- Graph: {} vertices, {} edges, radius {}
- Seed: {}
- Runtime: {}
- Greedy Shops: {}
- Best Shops: {}
- Iterations: {} ({} evaluated, {} infeasible)
- Accepted Moves: {} ({} improving)
- Final Temperature: {:.4}
- Stopped By: {:?}",
            self.vertices,
            self.edges,
            self.radius,
            self.seed,
            format_duration(self.runtime),
            self.greedy_energy,
            self.best_energy,
            self.iterations,
            self.evaluated,
            self.infeasible,
            self.accepted_moves,
            self.improving_moves,
            self.final_temperature,
            self.stop_reason
        )
    }
}

/// Machine-readable report of a run, printed with `--json`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub size: usize,
    pub shops: &'a [usize],
    pub radius: usize,
    pub seed: u64,
    pub runtime_ms: u64,
    pub search: &'a AnnealingResult,
}

impl<'a> RunReport<'a> {
    pub fn new(
        problem: &Problem,
        result: &'a AnnealingResult,
        seed: u64,
        runtime: Duration,
    ) -> Self {
        RunReport {
            size: result.best_energy,
            shops: result.best.shops(),
            radius: problem.radius,
            seed,
            runtime_ms: runtime.as_millis() as u64,
            search: result,
        }
    }
}
