//! Configuration parameters for the annealing search.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Configuration settings for the covering search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Starting temperature (T0)
    pub initial_temperature: f64,
    /// Factor applied to the temperature after each evaluated neighbor
    pub cooling_rate: f64,
    /// The search stops once the temperature is at or below this floor
    pub min_temperature: f64,
    /// Wall-clock budget measured from the start of the run
    pub time_limit: Duration,
    /// Optional hard cap on search iterations
    pub max_iterations: Option<u64>,
    /// Random seed; taken from the clock when unset
    pub seed: Option<u64>,
    /// Evaluated iterations between samples of the best energy
    pub history_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_temperature: 3000.0,
            cooling_rate: 0.9999,
            min_temperature: 0.01,
            time_limit: Duration::from_secs(26),
            max_iterations: None,
            seed: None,
            history_interval: 1000,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the initial temperature.
    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    /// Set the geometric cooling rate.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Set the temperature floor.
    pub fn with_min_temperature(mut self, temperature: f64) -> Self {
        self.min_temperature = temperature;
        self
    }

    /// Set the time limit.
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = duration;
        self
    }

    /// Cap the number of search iterations.
    pub fn with_max_iterations(mut self, iterations: u64) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Fix the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_history_interval(mut self, interval: u64) -> Self {
        self.history_interval = interval;
        self
    }

    /// The seed to use for this run: the configured one, or the current
    /// clock reading in nanoseconds.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        })
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            bail!(
                "initial temperature must be positive and finite, got {}",
                self.initial_temperature
            );
        }
        if !(self.min_temperature > 0.0) {
            bail!(
                "minimum temperature must be positive, got {}",
                self.min_temperature
            );
        }
        if self.min_temperature >= self.initial_temperature {
            bail!(
                "minimum temperature {} must be below the initial temperature {}",
                self.min_temperature,
                self.initial_temperature
            );
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            bail!("cooling rate must be in (0, 1), got {}", self.cooling_rate);
        }
        if self.history_interval == 0 {
            bail!("history interval must be at least 1");
        }
        Ok(())
    }
}
