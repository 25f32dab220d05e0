//! Simulation quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Wait | Mean time spent ready but not running |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Max Wait | Largest single wait |
//! | Avg Response | Mean of first dispatch - arrival |
//! | Makespan | Last completion - first arrival |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Completed processes per tick |
//! | Context Switches | CPU handovers between different processes |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::SimulationResult;

/// Run performance indicators.
///
/// All time values are in simulated ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationKpi {
    /// Mean wait time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Largest wait of any single process.
    pub max_wait: i64,
    /// Mean time from arrival to first dispatch.
    pub average_response: f64,
    /// Time from first arrival to last completion.
    pub makespan: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Number of handovers from one process to a different one.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(result: &SimulationResult) -> Self {
        let completed = result.completed();
        let count = completed.len();

        let max_wait = completed.iter().map(|p| p.wait).max().unwrap_or(0);

        // Zero-length processes never appear in the timeline; they are
        // dispatched at completion.
        let total_response: f64 = completed
            .iter()
            .map(|p| {
                let first_start = result
                    .slices_for(&p.id)
                    .next()
                    .map(|s| s.start)
                    .or(p.completed_at)
                    .unwrap_or(p.arrival);
                (first_start - p.arrival) as f64
            })
            .sum();

        let first_arrival = completed.iter().map(|p| p.arrival).min().unwrap_or(0);
        let makespan = if count == 0 {
            0
        } else {
            result.makespan() - first_arrival
        };

        let busy: i64 = result
            .timeline
            .iter()
            .filter(|s| !s.is_idle())
            .map(|s| s.len())
            .sum();

        let mut context_switches = 0;
        let mut previous: Option<&str> = None;
        for slice in result.timeline.iter().filter(|s| !s.is_idle()) {
            let current = slice.process_id.as_deref();
            if previous.is_some() && previous != current {
                context_switches += 1;
            }
            previous = current;
        }

        let (average_response, cpu_utilization, throughput) = if count == 0 {
            (0.0, 0.0, 0.0)
        } else if makespan == 0 {
            (total_response / count as f64, 0.0, 0.0)
        } else {
            (
                total_response / count as f64,
                busy as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        Self {
            average_wait: result.average_wait,
            average_turnaround: result.average_turnaround,
            max_wait,
            average_response,
            makespan,
            cpu_utilization,
            throughput,
            context_switches,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_average_wait: f64, min_utilization: f64) -> bool {
        self.average_wait <= max_average_wait && self.cpu_utilization >= min_utilization
    }
}
