//! Per-discipline dispatch policy.
//!
//! | Algorithm | Ready order | Preemption | Grant |
//! |-----------|-------------|------------|-------|
//! | FCFS | FIFO (arrival) | never | to completion |
//! | SJF | remaining duration | never | to completion |
//! | SRT | remaining duration | shorter candidate | 1 tick |
//! | Priority NP | priority | never | to completion |
//! | Priority P | priority | higher-priority candidate | 1 tick |
//! | Round Robin | FIFO | any candidate | `min(remaining, quantum)` |

use super::OrderingKey;
use crate::models::Process;
use crate::scheduler::Algorithm;

/// When a ready candidate takes the CPU from the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preemption {
    /// The running process keeps the CPU until it completes.
    Never,
    /// Candidate has strictly less remaining time.
    ShorterRemaining,
    /// Candidate has strictly higher priority.
    HigherPriority,
    /// Any waiting candidate preempts (time slicing).
    Always,
}

/// CPU time granted per dispatch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    /// All remaining time.
    ToCompletion,
    /// One tick, so arrivals are re-examined every tick.
    Unit,
    /// At most the given quantum.
    Quantum(i64),
}

/// Ready-queue order, preemption test and grant size of a discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Ready-queue ranking; `None` is FIFO.
    pub order: Option<OrderingKey>,
    pub preemption: Preemption,
    pub grant: Grant,
}

impl Policy {
    /// Returns the policy implementing `algorithm`.
    pub fn for_algorithm(algorithm: &Algorithm) -> Self {
        match *algorithm {
            Algorithm::Fcfs => Self {
                order: None,
                preemption: Preemption::Never,
                grant: Grant::ToCompletion,
            },
            Algorithm::Sjf => Self {
                order: Some(OrderingKey::Duration),
                preemption: Preemption::Never,
                grant: Grant::ToCompletion,
            },
            Algorithm::Srt => Self {
                order: Some(OrderingKey::Duration),
                preemption: Preemption::ShorterRemaining,
                grant: Grant::Unit,
            },
            Algorithm::PriorityNonPreemptive => Self {
                order: Some(OrderingKey::Priority),
                preemption: Preemption::Never,
                grant: Grant::ToCompletion,
            },
            Algorithm::PriorityPreemptive => Self {
                order: Some(OrderingKey::Priority),
                preemption: Preemption::HigherPriority,
                grant: Grant::Unit,
            },
            Algorithm::RoundRobin { quantum } => Self {
                order: None,
                preemption: Preemption::Always,
                grant: Grant::Quantum(quantum),
            },
        }
    }

    /// Whether `candidate`, at the head of the ready queue, takes the CPU
    /// from `running`.
    pub fn should_preempt(&self, running: &Process, candidate: &Process) -> bool {
        match self.preemption {
            Preemption::Never => false,
            Preemption::ShorterRemaining => running.duration > candidate.duration,
            Preemption::HigherPriority => running.priority < candidate.priority,
            Preemption::Always => true,
        }
    }

    /// CPU time to grant `running` in the next step.
    pub fn grant(&self, running: &Process) -> i64 {
        let remaining = running.duration.max(0);
        match self.grant {
            Grant::ToCompletion => remaining,
            Grant::Unit => remaining.min(1),
            Grant::Quantum(quantum) => remaining.min(quantum.max(1)),
        }
    }
}
