//! Side-by-side runs of every search strategy.

use std::time::{Duration, Instant};

use log::debug;

use crate::{Algorithm, PathFinder};

/// Outcome of one algorithm in a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmRun {
    /// Strategy that produced this run.
    pub algorithm: Algorithm,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
    /// The route, when one exists.
    pub path: Option<Vec<String>>,
    /// Total travel time of `path` in minutes; infinite without a route.
    pub route_time: f64,
}

impl AlgorithmRun {
    /// Whether the search reached the destination.
    #[must_use]
    pub const fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of intersections on the route; zero without one.
    #[must_use]
    pub fn path_length(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }
}

/// Every run of a comparison, in [`Algorithm::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// Origin intersection.
    pub start: String,
    /// Destination intersection.
    pub end: String,
    /// One entry per algorithm.
    pub runs: Vec<AlgorithmRun>,
}

impl ComparisonReport {
    /// The run with the fastest route.
    ///
    /// Runs without a route are ignored. Equal route times fall back to
    /// the quicker search, then to run order. `None` when nothing found a
    /// route.
    #[must_use]
    pub fn best(&self) -> Option<&AlgorithmRun> {
        self.runs
            .iter()
            .filter(|run| run.found())
            .reduce(|best, run| {
                let faster = run
                    .route_time
                    .total_cmp(&best.route_time)
                    .then_with(|| run.elapsed.cmp(&best.elapsed))
                    .is_lt();
                if faster { run } else { best }
            })
    }

    /// Look up the run for one algorithm.
    #[must_use]
    pub fn run(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|run| run.algorithm == algorithm)
    }
}

impl PathFinder<'_> {
    /// Run every algorithm from `start` to `end` and time each one.
    ///
    /// Each run is logged at debug level.
    #[must_use]
    pub fn compare_algorithms(&self, start: &str, end: &str) -> ComparisonReport {
        let runs = Algorithm::ALL
            .iter()
            .map(|&algorithm| self.timed_run(algorithm, start, end))
            .collect();
        ComparisonReport {
            start: start.to_owned(),
            end: end.to_owned(),
            runs,
        }
    }

    fn timed_run(&self, algorithm: Algorithm, start: &str, end: &str) -> AlgorithmRun {
        let started = Instant::now();
        let path = self.find(algorithm, start, end);
        let elapsed = started.elapsed();
        let route_time = path
            .as_deref()
            .map_or(f64::INFINITY, |route| self.route_time(route));
        debug!(
            "{algorithm} {start} -> {end}: found={} nodes={} minutes={route_time} in {elapsed:?}",
            path.is_some(),
            path.as_ref().map_or(0, Vec::len),
        );
        AlgorithmRun {
            algorithm,
            elapsed,
            path,
            route_time,
        }
    }
}
