//! Seeded random workload generation.
//!
//! Produces reproducible process sets for exploring disciplines and for
//! property-style tests. The same configuration and seed always yield the
//! same processes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Configuration for a random process set.
///
/// Arrivals are drawn uniformly from `[0, arrival_span]`, durations from
/// `[min_duration, max_duration]` and priorities from
/// `[min_priority, max_priority]`. Processes are named `P0..Pn` in
/// generation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival.
    pub arrival_span: i64,
    /// Shortest burst.
    pub min_duration: i64,
    /// Longest burst.
    pub max_duration: i64,
    /// Lowest priority.
    pub min_priority: i32,
    /// Highest priority.
    pub max_priority: i32,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival_span: 20,
            min_duration: 1,
            max_duration: 10,
            min_priority: 0,
            max_priority: 5,
            seed: 0,
        }
    }

    /// Sets the latest possible arrival.
    pub fn with_arrival_span(mut self, span: i64) -> Self {
        self.arrival_span = span.max(0);
        self
    }

    /// Sets the burst range (inclusive). Bounds are clamped to be non-negative.
    pub fn with_duration_range(mut self, min: i64, max: i64) -> Self {
        self.min_duration = min.max(0);
        self.max_duration = max.max(self.min_duration);
        self
    }

    /// Sets the priority range (inclusive). Bounds are clamped to be non-negative.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min.max(0);
        self.max_priority = max.max(self.min_priority);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the process set.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let span = self.arrival_span.max(0);
        let min_duration = self.min_duration.max(0);
        let max_duration = self.max_duration.max(min_duration);
        let min_priority = self.min_priority.max(0);
        let max_priority = self.max_priority.max(min_priority);

        (0..self.count)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(0..=span),
                    rng.random_range(min_duration..=max_duration),
                    rng.random_range(min_priority..=max_priority),
                )
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(10)
    }
}
