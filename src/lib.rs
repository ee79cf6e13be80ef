//! # radius-cover
//!
//! Approximates a minimum radius-d covering set on an unweighted, undirected
//! graph: the fewest vertices ("shops") such that every vertex lies within
//! `d` hops of some shop.
//!
//! The search runs in three phases:
//!
//! 1. a bounded breadth-first search from every vertex builds the
//!    [`DistanceIndex`](distance::DistanceIndex),
//! 2. a deterministic greedy scan produces a feasible starting solution,
//! 3. simulated annealing over single add/remove moves refines it until a
//!    wall-clock deadline or a temperature floor is reached.
//!
//! The reported solution always covers every vertex.

pub mod annealing;
pub mod config;
pub mod coverage;
pub mod distance;
pub mod graph;
pub mod greedy;
pub mod neighborhood;
pub mod problem;
pub mod solution;
pub mod utils;

use crate::annealing::{AnnealingResult, AnnealingRunner, Clock, SystemClock};
use crate::config::Config;
use crate::distance::DistanceIndex;
use crate::problem::Problem;
use crate::solution::Solution;

use anyhow::{bail, Result};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// The main algorithm structure that orchestrates the covering search.
pub struct CoverAlgorithm {
    pub problem: Problem,
    pub config: Config,
    /// Seed of the random stream shared by all phases of the run
    pub seed: u64,
    pub index: Option<DistanceIndex>,
    pub greedy_solution: Option<Solution>,
    pub result: Option<AnnealingResult>,
    pub run_time: Duration,
}

impl CoverAlgorithm {
    /// Create a new instance, fixing the random seed.
    pub fn new(problem: Problem, config: Config) -> Self {
        let seed = config.resolve_seed();
        CoverAlgorithm {
            problem,
            config,
            seed,
            index: None,
            greedy_solution: None,
            result: None,
            run_time: Duration::from_secs(0),
        }
    }

    /// Build the distance index and the greedy starting solution.
    pub fn initialize(&mut self) -> &Solution {
        let index = DistanceIndex::build(&self.problem.graph, self.problem.radius);
        info!(
            "distance index built: {} vertices, radius {}, {} entries",
            index.vertex_count(),
            index.radius(),
            index.total_entries()
        );

        let greedy = greedy::build_greedily(&index);
        info!("greedy solution uses {} shops", greedy.energy());

        self.index = Some(index);
        self.greedy_solution.insert(greedy)
    }

    /// Run the full search against the wall clock.
    ///
    /// The deadline covers index construction as well as the annealing itself.
    pub fn run(&mut self) -> Result<&AnnealingResult> {
        self.run_with_clock(SystemClock::start())
    }

    /// Run the full search, measuring the deadline with `clock`.
    pub fn run_with_clock<C: Clock>(&mut self, clock: C) -> Result<&AnnealingResult> {
        let start_time = Instant::now();
        self.config.validate()?;
        info!("starting search with seed {}", self.seed);

        let initial = self.initialize().clone();
        let Some(index) = self.index.as_ref() else {
            bail!("distance index missing after initialization");
        };

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let runner = AnnealingRunner::new(index, &self.config, clock);
        let result = runner.run(initial, &mut rng);

        if !coverage::is_feasible(index, &result.best) {
            bail!(
                "search returned a solution that leaves {} vertices uncovered",
                coverage::count_uncovered(&coverage::mark_covered(index, &result.best))
            );
        }

        self.run_time = start_time.elapsed();
        Ok(&*self.result.insert(result))
    }

    /// The best solution of the last run, if any.
    pub fn best_solution(&self) -> Option<&Solution> {
        self.result.as_ref().map(|result| &result.best)
    }
}
