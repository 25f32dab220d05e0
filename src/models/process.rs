//! Process (job) model.
//!
//! A process is a single, indivisible CPU burst that becomes schedulable at
//! its arrival time. Preemptive disciplines may interrupt and resume it, but
//! it never blocks.
//!
//! # Time Representation
//! All times are integer ticks of a simulated clock. The clock starts at the
//! earliest arrival of a run; there is no wall-clock mapping.

use serde::{Deserialize, Serialize};

/// A process to be scheduled, together with its simulation state.
///
/// The identity fields (`id`, `arrival`, `duration`, `priority`) are fixed by
/// the caller. The state fields (`wait`, `turnaround`, `preempted_at`,
/// `completed_at`) are only mutated by the simulator, which starts every run
/// from [`Process::fresh`] copies of its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProcessRecord")]
pub struct Process {
    /// Unique process identifier (tie-break key, lexicographic).
    pub id: String,
    /// Tick at which the process becomes schedulable.
    pub arrival: i64,
    /// Remaining CPU time. Equals `burst` until the process first runs.
    pub duration: i64,
    /// Scheduling priority (higher = more important).
    pub priority: i32,
    /// Total CPU time requested at creation.
    pub burst: i64,
    /// Accumulated ready-but-not-running time.
    pub wait: i64,
    /// Completion time minus arrival. Set once, at completion.
    pub turnaround: i64,
    /// Tick at which the process was last taken off the CPU.
    pub preempted_at: Option<i64>,
    /// Tick at which the process completed.
    pub completed_at: Option<i64>,
}

/// Serialized form of [`Process`]. Only the identity fields are required;
/// a missing `burst` defaults to `duration`.
#[derive(Deserialize)]
struct ProcessRecord {
    id: String,
    arrival: i64,
    duration: i64,
    priority: i32,
    #[serde(default)]
    burst: Option<i64>,
    #[serde(default)]
    wait: i64,
    #[serde(default)]
    turnaround: i64,
    #[serde(default)]
    preempted_at: Option<i64>,
    #[serde(default)]
    completed_at: Option<i64>,
}

impl From<ProcessRecord> for Process {
    fn from(record: ProcessRecord) -> Self {
        Self {
            burst: record.burst.unwrap_or(record.duration),
            id: record.id,
            arrival: record.arrival,
            duration: record.duration,
            priority: record.priority,
            wait: record.wait,
            turnaround: record.turnaround,
            preempted_at: record.preempted_at,
            completed_at: record.completed_at,
        }
    }
}

impl Process {
    /// Creates a new process with zeroed simulation state.
    pub fn new(id: impl Into<String>, arrival: i64, duration: i64, priority: i32) -> Self {
        Self {
            id: id.into(),
            arrival,
            duration,
            priority,
            burst: duration,
            wait: 0,
            turnaround: 0,
            preempted_at: None,
            completed_at: None,
        }
    }

    /// Copy with the same identity and zeroed simulation state.
    ///
    /// The current `duration` becomes the burst.
    pub fn fresh(&self) -> Self {
        Self::new(self.id.clone(), self.arrival, self.duration, self.priority)
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst length (resets the remaining duration).
    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self.burst = duration;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Runs the process for up to `amount` ticks.
    ///
    /// The remaining duration is clamped at zero. Returns the number of
    /// ticks actually consumed.
    pub fn consume(&mut self, amount: i64) -> i64 {
        let used = amount.clamp(0, self.duration.max(0));
        self.duration -= used;
        used
    }

    /// Whether the process has no CPU time left.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.duration == 0
    }

    /// Tick from which the current ready period is counted.
    ///
    /// The last preemption time if the process has run before, otherwise
    /// its arrival.
    #[inline]
    pub fn ready_since(&self) -> i64 {
        self.preempted_at.unwrap_or(self.arrival)
    }

    pub(crate) fn mark_dispatched(&mut self, now: i64) {
        self.wait += now - self.ready_since();
    }

    pub(crate) fn mark_preempted(&mut self, now: i64) {
        self.preempted_at = Some(now);
    }

    pub(crate) fn mark_completed(&mut self, now: i64) {
        self.completed_at = Some(now);
        self.turnaround = now - self.arrival;
    }
}
