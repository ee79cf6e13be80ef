use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use radius_cover::config::Config;
use radius_cover::problem::Problem;
use radius_cover::utils::{save_solution, write_solution, RunReport, SearchStatistics};
use radius_cover::CoverAlgorithm;

#[derive(Parser, Debug)]
#[command(name = "radius-cover")]
#[command(
    about = "Place the fewest shops so every vertex is within d hops of one",
    long_about = None
)]
struct Args {
    /// Problem input path ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Wall-clock budget in seconds, index construction included
    #[arg(short, long, default_value_t = 26.0)]
    time_limit: f64,

    /// Random seed (defaults to a clock reading)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting annealing temperature
    #[arg(long, default_value_t = 3000.0)]
    initial_temperature: f64,

    /// Geometric cooling factor applied per evaluated neighbor
    #[arg(long, default_value_t = 0.9999)]
    cooling_rate: f64,

    /// Temperature floor at which the search stops
    #[arg(long, default_value_t = 0.01)]
    min_temperature: f64,

    /// Print a JSON report instead of the plain two-line answer
    #[arg(long)]
    json: bool,

    /// Also write the plain answer to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print search statistics to stderr
    #[arg(long)]
    stats: bool,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let time_limit = Duration::try_from_secs_f64(self.time_limit)
            .with_context(|| format!("invalid time limit {}", self.time_limit))?;

        let mut config = Config::new()
            .with_time_limit(time_limit)
            .with_initial_temperature(self.initial_temperature)
            .with_cooling_rate(self.cooling_rate)
            .with_min_temperature(self.min_temperature);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.config()?;

    let problem = if args.input == "-" {
        Problem::from_reader(io::stdin().lock())?
    } else {
        Problem::from_file(&args.input)?
    };

    let mut algorithm = CoverAlgorithm::new(problem, config);
    let seed = algorithm.seed;
    algorithm.run()?;

    let Some(result) = algorithm.result.as_ref() else {
        bail!("search finished without a result");
    };
    let problem = &algorithm.problem;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.json {
        let report = RunReport::new(problem, result, seed, algorithm.run_time);
        serde_json::to_writer_pretty(&mut out, &report).context("failed to write report")?;
        writeln!(out)?;
    } else {
        write_solution(&result.best, &mut out)?;
    }
    out.flush()?;

    if let Some(path) = &args.output {
        save_solution(&result.best, path)
            .with_context(|| format!("failed to write solution to {}", path.display()))?;
    }

    if args.stats {
        let stats = SearchStatistics::new(problem, result, seed, algorithm.run_time);
        eprintln!("{}", stats.format());
    }

    Ok(())
}
