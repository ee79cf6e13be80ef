//! Integration tests for the full covering search.

use radius_cover::annealing::{ManualClock, StopReason};
use radius_cover::config::Config;
use radius_cover::coverage::is_feasible;
use radius_cover::problem::Problem;
use radius_cover::utils::{write_solution, RunReport, SearchStatistics};
use radius_cover::CoverAlgorithm;
use std::time::Duration;

const PATH_INPUT: &str = "5 4\n0 1\n1 2\n2 3\n3 4\n1\n";

/// A 20x20 grid graph with the given covering radius, in input format.
fn create_grid_input(radius: usize) -> String {
    let side = 20;
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            if col + 1 < side {
                edges.push(format!("{} {}", v, v + 1));
            }
            if row + 1 < side {
                edges.push(format!("{} {}", v, v + side));
            }
        }
    }
    format!(
        "{} {}\n{}\n{}\n",
        side * side,
        edges.len(),
        edges.join("\n"),
        radius
    )
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!((config.initial_temperature - 3000.0).abs() < 1e-10);
    assert!((config.cooling_rate - 0.9999).abs() < 1e-12);
    assert!((config.min_temperature - 0.01).abs() < 1e-12);
    assert_eq!(config.time_limit, Duration::from_secs(26));
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_config_is_rejected() {
    assert!(Config::new().with_cooling_rate(1.0).validate().is_err());
    assert!(Config::new().with_cooling_rate(0.0).validate().is_err());
    assert!(Config::new().with_initial_temperature(-1.0).validate().is_err());
    assert!(Config::new().with_min_temperature(0.0).validate().is_err());
    assert!(Config::new()
        .with_initial_temperature(1.0)
        .with_min_temperature(2.0)
        .validate()
        .is_err());

    let problem = Problem::parse(PATH_INPUT).unwrap();
    let mut algorithm = CoverAlgorithm::new(problem, Config::new().with_cooling_rate(1.5));
    assert!(algorithm.run().is_err());
    assert!(algorithm.best_solution().is_none());
}

#[test]
fn test_algorithm_initialization() {
    let problem = Problem::parse(PATH_INPUT).unwrap();
    let mut algorithm = CoverAlgorithm::new(problem, Config::new().with_seed(1));

    let greedy = algorithm.initialize();
    assert_eq!(greedy.shops(), &[0, 2, 4]);
    assert!(algorithm.index.is_some());
    assert_eq!(algorithm.seed, 1);
}

#[test]
fn test_path_end_to_end() {
    let problem = Problem::parse(PATH_INPUT).unwrap();
    let config = Config::new().with_seed(7);

    let mut algorithm = CoverAlgorithm::new(problem, config);
    let result = algorithm.run_with_clock(ManualClock::frozen()).unwrap();

    assert_eq!(result.initial_energy, 3);
    assert_eq!(result.best_energy, 2);

    let best = algorithm.best_solution().unwrap();
    let index = algorithm.index.as_ref().unwrap();
    assert!(is_feasible(index, best));
}

#[test]
fn test_short_run_with_wall_clock() {
    let problem = Problem::parse(&create_grid_input(2)).unwrap();
    let time_limit = Duration::from_millis(200);
    let config = Config::new().with_seed(3).with_time_limit(time_limit);

    let mut algorithm = CoverAlgorithm::new(problem, config);
    let result = algorithm.run().unwrap();

    assert!(result.best_energy <= result.initial_energy);
    if result.stop_reason == StopReason::Deadline {
        assert!(result.elapsed >= time_limit);
    }

    // Overrun is bounded by one iteration on a 400-vertex grid
    assert!(
        algorithm.run_time < time_limit + Duration::from_secs(1),
        "run took {:?}",
        algorithm.run_time
    );

    let index = algorithm.index.as_ref().unwrap();
    assert!(is_feasible(index, algorithm.best_solution().unwrap()));
}

#[test]
fn test_deadline_includes_short_budget() {
    let problem = Problem::parse(&create_grid_input(1)).unwrap();
    let config = Config::new()
        .with_seed(5)
        .with_time_limit(Duration::from_millis(20));

    let mut algorithm = CoverAlgorithm::new(problem, config);
    let result = algorithm
        .run_with_clock(ManualClock::new(Duration::from_millis(1)))
        .unwrap();

    assert_eq!(result.stop_reason, StopReason::Deadline);
    assert_eq!(result.iterations, 20);
    assert_eq!(result.elapsed, Duration::from_millis(20));
}

#[test]
fn test_same_seed_is_reproducible() {
    let input = create_grid_input(1);
    let config = Config::new().with_seed(11).with_max_iterations(30_000);

    let mut first = CoverAlgorithm::new(Problem::parse(&input).unwrap(), config.clone());
    let mut second = CoverAlgorithm::new(Problem::parse(&input).unwrap(), config);

    let a = first.run_with_clock(ManualClock::frozen()).unwrap().clone();
    let b = second.run_with_clock(ManualClock::frozen()).unwrap().clone();

    assert_eq!(a.best, b.best);
    assert_eq!(a.iterations, b.iterations);
    assert_eq!(a.energy_history, b.energy_history);
}

#[test]
fn test_radius_zero_end_to_end() {
    let problem = Problem::parse("4 2\n0 1\n2 3\n0\n").unwrap();
    let config = Config::new().with_seed(2).with_max_iterations(1000);
    let mut algorithm = CoverAlgorithm::new(problem, config);

    let result = algorithm.run_with_clock(ManualClock::frozen()).unwrap();
    assert_eq!(result.best.shops(), &[0, 1, 2, 3]);
}

#[test]
fn test_isolated_vertices_always_chosen() {
    // Vertices 3 and 6 have no edges
    let problem = Problem::parse("7 4\n0 1\n1 2\n4 5\n5 4\n2\n").unwrap();
    let mut algorithm = CoverAlgorithm::new(problem, Config::new().with_seed(9));

    let result = algorithm.run_with_clock(ManualClock::frozen()).unwrap();
    assert!(result.best.contains(3));
    assert!(result.best.contains(6));
    assert_eq!(result.best_energy, 4);
}

#[test]
fn test_empty_graph_end_to_end() {
    let problem = Problem::parse("0 0\n1\n").unwrap();
    let mut algorithm = CoverAlgorithm::new(problem, Config::new().with_seed(1));

    let result = algorithm.run().unwrap();
    assert_eq!(result.stop_reason, StopReason::EmptyGraph);

    let mut buffer = Vec::new();
    write_solution(&result.best, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap().lines().next(), Some("0"));
}

#[test]
fn test_reports() {
    let problem = Problem::parse(PATH_INPUT).unwrap();
    let mut algorithm = CoverAlgorithm::new(problem, Config::new().with_seed(4));
    algorithm.run_with_clock(ManualClock::frozen()).unwrap();

    let result = algorithm.result.as_ref().unwrap();

    let report = RunReport::new(
        &algorithm.problem,
        result,
        algorithm.seed,
        algorithm.run_time,
    );
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["size"], 2);
    assert_eq!(json["seed"], 4);
    assert_eq!(json["shops"].as_array().unwrap().len(), 2);
    assert_eq!(json["search"]["stop_reason"], "Frozen");

    let stats =
        SearchStatistics::new(&algorithm.problem, result, algorithm.seed, algorithm.run_time);
    let text = stats.format();
    assert!(text.contains("Best Shops: 2"));
    assert!(text.contains("Greedy Shops: 3"));
}
