//! Simulated annealing over feasible covering sets.
//!
//! The search starts from a feasible solution and only ever moves to feasible
//! neighbors, so the best solution it reports covers every vertex. Neighbors
//! that leave a vertex uncovered are discarded without touching the
//! temperature; every evaluated (feasible) neighbor costs one cooling step,
//! whether it is accepted or not.
//!
//! The clock and the random source are both injected. A single random stream
//! is used for the neighbor move and then the acceptance draw, in that order.

use log::{debug, info, trace};
use rand::distributions::Open01;
use rand::Rng;
use serde::Serialize;
use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::coverage::{count_uncovered, mark_covered};
use crate::distance::DistanceIndex;
use crate::neighborhood::generate_neighbor;
use crate::solution::Solution;

/// Source of elapsed time since the start of a run.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

/// Wall-clock time measured with a monotonic [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Start measuring from now.
    pub fn start() -> Self {
        SystemClock {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// A deterministic clock that advances by a fixed tick on every reading.
///
/// The first reading returns zero. A zero tick freezes time entirely.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Duration>,
    tick: Duration,
}

impl ManualClock {
    pub fn new(tick: Duration) -> Self {
        ManualClock {
            now: Cell::new(Duration::ZERO),
            tick,
        }
    }

    /// A clock on which no time ever passes.
    pub fn frozen() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        let now = self.now.get();
        self.now.set(now + self.tick);
        now
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// The time limit was reached.
    Deadline,
    /// The temperature fell to the configured floor.
    Frozen,
    /// The configured iteration cap was reached.
    IterationLimit,
    /// The graph has no vertices, so there is nothing to search.
    EmptyGraph,
}

/// Mutable state of one annealing run.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub current: Solution,
    pub current_energy: usize,
    pub best: Solution,
    pub best_energy: usize,
    pub temperature: f64,
}

impl SearchState {
    /// Start from a feasible solution at the given temperature.
    pub fn new(initial: Solution, temperature: f64) -> Self {
        let energy = initial.energy();
        SearchState {
            best: initial.clone(),
            best_energy: energy,
            current: initial,
            current_energy: energy,
            temperature,
        }
    }

    /// Replace the current solution, recording it as best if it improves.
    /// Returns `true` on a new best.
    fn accept(&mut self, neighbor: Solution, energy: usize) -> bool {
        self.current = neighbor;
        self.current_energy = energy;

        if self.current_energy < self.best_energy {
            self.best_energy = self.current_energy;
            self.best = self.current.clone();
            return true;
        }
        false
    }
}

/// Result of an annealing run.
#[derive(Debug, Clone, Serialize)]
pub struct AnnealingResult {
    /// The best feasible solution found.
    pub best: Solution,
    pub best_energy: usize,
    /// Energy of the starting solution.
    pub initial_energy: usize,
    /// Neighbors generated.
    pub iterations: u64,
    /// Neighbors that covered every vertex and went through the acceptance test.
    pub evaluated: u64,
    /// Neighbors discarded for leaving a vertex uncovered.
    pub infeasible: u64,
    /// Accepted moves of any kind.
    pub accepted_moves: u64,
    /// Accepted moves that lowered the energy.
    pub improving_moves: u64,
    /// Accepted moves that kept the energy (including no-op additions).
    pub lateral_moves: u64,
    pub final_temperature: f64,
    /// Clock reading when the search stopped.
    pub elapsed: Duration,
    pub stop_reason: StopReason,
    /// Best energy sampled every `history_interval` evaluated iterations.
    pub energy_history: Vec<usize>,
}

/// Metropolis acceptance for an energy change at `temperature`.
///
/// Strict improvements are accepted without drawing a random number. Other
/// moves are accepted when `exp((current - neighbor) / T)` exceeds a uniform
/// draw from the open interval `(0, 1)`, so equal-energy moves are always accepted.
pub fn metropolis_accepts<R: Rng + ?Sized>(
    current_energy: usize,
    neighbor_energy: usize,
    temperature: f64,
    rng: &mut R,
) -> bool {
    if neighbor_energy < current_energy {
        return true;
    }
    let delta = current_energy as f64 - neighbor_energy as f64;
    let threshold: f64 = rng.sample(Open01);
    (delta / temperature).exp() > threshold
}

/// Drives the annealing loop over a fixed distance index.
pub struct AnnealingRunner<'a, C: Clock> {
    index: &'a DistanceIndex,
    config: &'a Config,
    clock: C,
}

impl<'a, C: Clock> AnnealingRunner<'a, C> {
    pub fn new(index: &'a DistanceIndex, config: &'a Config, clock: C) -> Self {
        AnnealingRunner {
            index,
            config,
            clock,
        }
    }

    /// Anneal from `initial`, which must be feasible.
    pub fn run<R: Rng + ?Sized>(&self, initial: Solution, rng: &mut R) -> AnnealingResult {
        let vertex_count = self.index.vertex_count();
        let config = self.config;

        let mut state = SearchState::new(initial, config.initial_temperature);
        let initial_energy = state.best_energy;

        let mut iterations = 0u64;
        let mut evaluated = 0u64;
        let mut infeasible = 0u64;
        let mut accepted_moves = 0u64;
        let mut improving_moves = 0u64;
        let mut lateral_moves = 0u64;

        let mut energy_history = vec![initial_energy];

        let (stop_reason, elapsed) = loop {
            let now = self.clock.elapsed();
            if vertex_count == 0 {
                break (StopReason::EmptyGraph, now);
            }
            if now >= config.time_limit {
                break (StopReason::Deadline, now);
            }
            if state.temperature <= config.min_temperature {
                break (StopReason::Frozen, now);
            }
            if config.max_iterations.is_some_and(|cap| iterations >= cap) {
                break (StopReason::IterationLimit, now);
            }

            iterations += 1;
            let (neighbor, _) = generate_neighbor(&state.current, vertex_count, rng);

            if count_uncovered(&mark_covered(self.index, &neighbor)) > 0 {
                infeasible += 1;
                continue;
            }

            evaluated += 1;
            let neighbor_energy = neighbor.energy();
            let current_energy = state.current_energy;

            if metropolis_accepts(current_energy, neighbor_energy, state.temperature, rng) {
                accepted_moves += 1;
                if neighbor_energy < current_energy {
                    improving_moves += 1;
                } else if neighbor_energy == current_energy {
                    lateral_moves += 1;
                }

                if state.accept(neighbor, neighbor_energy) {
                    debug!(
                        "new best energy {} at iteration {} (T = {:.4})",
                        state.best_energy, iterations, state.temperature
                    );
                }
            }

            state.temperature *= config.cooling_rate;

            if config.history_interval > 0 && evaluated % config.history_interval == 0 {
                energy_history.push(state.best_energy);
                trace!(
                    "iteration {}: current {}, best {}, T = {:.4}",
                    iterations,
                    state.current_energy,
                    state.best_energy,
                    state.temperature
                );
            }
        };

        if energy_history.last() != Some(&state.best_energy) {
            energy_history.push(state.best_energy);
        }

        info!(
            "annealing stopped ({:?}) after {} iterations: best energy {} (started at {})",
            stop_reason, iterations, state.best_energy, initial_energy
        );

        AnnealingResult {
            best: state.best,
            best_energy: state.best_energy,
            initial_energy,
            iterations,
            evaluated,
            infeasible,
            accepted_moves,
            improving_moves,
            lateral_moves,
            final_temperature: state.temperature,
            elapsed,
            stop_reason,
            energy_history,
        }
    }
}
