//! Ready-queue ordering and dispatch policies.
//!
//! Provides the ordering keys used to rank ready processes, the ready queues
//! built on them (FIFO and binary heap), and the per-discipline dispatch
//! policy (queue order, preemption test, CPU grant).
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{sort_processes, OrderingKey};
//! use cpu_sched_sim::models::Process;
//!
//! let processes = vec![
//!     Process::new("long", 0, 8, 1),
//!     Process::new("short", 2, 3, 4),
//! ];
//! let sorted = sort_processes(&processes, OrderingKey::Duration);
//! assert_eq!(sorted[0].id, "short");
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod policy;
mod queue;

pub use policy::{Grant, Policy, Preemption};
pub use queue::ReadyQueue;

use std::cmp::Ordering;

use crate::models::Process;

/// Axis along which processes are ranked.
///
/// `compare` returns `Less` for the process that should be dispatched first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderingKey {
    /// Earliest arrival first.
    Arrival,
    /// Shortest remaining duration first.
    Duration,
    /// Highest priority first.
    Priority,
    /// Lexicographically smallest id first.
    Id,
}

impl OrderingKey {
    /// Compares two processes on this key only.
    pub fn compare(self, a: &Process, b: &Process) -> Ordering {
        match self {
            Self::Arrival => a.arrival.cmp(&b.arrival),
            Self::Duration => a.duration.cmp(&b.duration),
            Self::Priority => b.priority.cmp(&a.priority),
            Self::Id => a.id.cmp(&b.id),
        }
    }

    /// Compares on this key, then breaks ties by arrival, then by id.
    pub fn compare_with_tie_break(self, a: &Process, b: &Process) -> Ordering {
        self.compare(a, b)
            .then_with(|| a.arrival.cmp(&b.arrival))
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Returns a copy of `processes` stably sorted by `key`.
///
/// Processes with equal keys keep their relative input order.
pub fn sort_processes(processes: &[Process], key: OrderingKey) -> Vec<Process> {
    let mut sorted = processes.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}
