//! Simulation outcome model.
//!
//! A [`SimulationResult`] is the complete record of one run: the processes
//! in completion order, the two system averages, and the execution timeline
//! (Gantt data) from which response times and utilization are derived.

use serde::{Deserialize, Serialize};

use super::Process;
use crate::scheduler::Algorithm;

/// A contiguous interval on the simulated CPU.
///
/// `process_id` is `None` for idle gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process holding the CPU, or `None` when idle.
    pub process_id: Option<String>,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a slice in which `process_id` holds the CPU.
    pub fn busy(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: Some(process_id.into()),
            start,
            end,
        }
    }

    /// Creates an idle slice.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            process_id: None,
            start,
            end,
        }
    }

    /// Length of the slice in ticks.
    #[inline]
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the slice is zero-length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether the CPU is idle during this slice.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }
}

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Discipline that produced this result.
    pub algorithm: Algorithm,
    /// Processes in completion order, annotated with wait and turnaround.
    pub completed: Vec<Process>,
    /// Mean wait time over `completed`.
    pub average_wait: f64,
    /// Mean turnaround time over `completed`.
    pub average_turnaround: f64,
    /// CPU timeline, in clock order.
    pub timeline: Vec<ExecutionSlice>,
}

impl SimulationResult {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            completed: Vec::new(),
            average_wait: 0.0,
            average_turnaround: 0.0,
            timeline: Vec::new(),
        }
    }

    /// Appends a CPU interval, merging it into the previous slice when the
    /// same process (or idleness) continues without a gap.
    pub(crate) fn record_slice(&mut self, process_id: Option<&str>, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.timeline.last_mut() {
            if last.end == start && last.process_id.as_deref() == process_id {
                last.end = end;
                return;
            }
        }
        self.timeline.push(ExecutionSlice {
            process_id: process_id.map(str::to_string),
            start,
            end,
        });
    }

    /// Processes in completion order.
    pub fn completed(&self) -> &[Process] {
        &self.completed
    }

    /// Processes ordered by identifier.
    pub fn sorted_by_id(&self) -> Vec<Process> {
        crate::dispatching::sort_processes(&self.completed, crate::dispatching::OrderingKey::Id)
    }

    /// Looks up a completed process by id.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.completed.iter().find(|p| p.id == id)
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.completed.iter().map(|p| p.id.as_str()).collect()
    }

    /// Number of completed processes.
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    /// Whether no process completed.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Latest completion tick, or 0 if nothing completed.
    pub fn makespan(&self) -> i64 {
        self.completed
            .iter()
            .filter_map(|p| p.completed_at)
            .max()
            .unwrap_or(0)
    }

    /// Slices belonging to `process_id`, in clock order.
    pub fn slices_for(&self, process_id: &str) -> impl Iterator<Item = &ExecutionSlice> + '_ {
        let id = process_id.to_string();
        self.timeline
            .iter()
            .filter(move |s| s.process_id.as_deref() == Some(id.as_str()))
    }
}
