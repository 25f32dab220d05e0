//! Discrete-event loop shared by all disciplines.
//!
//! # Algorithm
//!
//! 1. Sort the input by arrival and start the clock at the first arrival.
//! 2. While anything is pending, ready or running:
//!    a. Move every process with `arrival <= clock` into the ready queue.
//!    b. If nothing is ready or running, jump the clock to the next arrival.
//!    c. Otherwise let the policy preempt the running process, dispatch the
//!       head of the ready queue if the CPU is free, and grant CPU time.
//!       A process whose remaining duration reaches zero is finalized.
//! 3. Average the accumulated wait and turnaround over completed processes.
//!
//! Wait time is charged on every ready → running transition as
//! `clock - ready_since`, where `ready_since` is the last preemption time,
//! or the arrival for a first dispatch.
//!
//! # Termination
//! Every working step either consumes at least one tick of remaining work or
//! completes a zero-length process, and every idle step moves the clock to a
//! strictly later arrival.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::Algorithm;
use crate::dispatching::{sort_processes, OrderingKey, Policy, ReadyQueue};
use crate::models::{Process, SimulationResult};

/// Runs `algorithm` over `processes`.
///
/// `processes` must already be validated and carry fresh state; all state
/// is local to this call.
pub(crate) fn simulate(processes: Vec<Process>, algorithm: Algorithm) -> SimulationResult {
    let policy = Policy::for_algorithm(&algorithm);
    let mut result = SimulationResult::new(algorithm);

    let mut arrivals: VecDeque<Process> = sort_processes(&processes, OrderingKey::Arrival).into();
    let mut ready = ReadyQueue::for_order(policy.order);
    let mut running: Option<Process> = None;

    let Some(mut clock) = arrivals.front().map(|p| p.arrival) else {
        return result;
    };
    // Each value fits in i64 after validation; their sums need not.
    let mut wait_sum = 0.0;
    let mut turnaround_sum = 0.0;

    while !arrivals.is_empty() || !ready.is_empty() || running.is_some() {
        while arrivals.front().is_some_and(|p| p.arrival <= clock) {
            if let Some(arrived) = arrivals.pop_front() {
                trace!(process = %arrived.id, clock, "arrived");
                ready.push(arrived);
            }
        }

        if ready.is_empty() && running.is_none() {
            if let Some(next_arrival) = arrivals.front().map(|p| p.arrival) {
                trace!(from = clock, to = next_arrival, "cpu idle");
                result.record_slice(None, clock, next_arrival);
                clock = next_arrival;
            }
            continue;
        }

        let current = match running.take() {
            Some(mut current)
                if ready
                    .peek()
                    .is_some_and(|candidate| policy.should_preempt(&current, candidate)) =>
            {
                debug!(process = %current.id, remaining = current.duration, clock, "preempted");
                current.mark_preempted(clock);
                ready.push(current);
                dispatch(&mut ready, clock)
            }
            Some(current) => Some(current),
            None => dispatch(&mut ready, clock),
        };
        let Some(mut current) = current else {
            continue;
        };

        let granted = current.consume(policy.grant(&current));
        result.record_slice(Some(current.id.as_str()), clock, clock + granted);
        clock += granted;

        if current.is_complete() {
            current.mark_completed(clock);
            debug!(
                process = %current.id,
                clock,
                wait = current.wait,
                turnaround = current.turnaround,
                "completed"
            );
            wait_sum += current.wait as f64;
            turnaround_sum += current.turnaround as f64;
            result.completed.push(current);
        } else {
            running = Some(current);
        }
    }

    let count = result.completed.len();
    if count > 0 {
        result.average_wait = wait_sum / count as f64;
        result.average_turnaround = turnaround_sum / count as f64;
    }

    debug!(
        algorithm = %algorithm,
        completed = count,
        average_wait = result.average_wait,
        average_turnaround = result.average_turnaround,
        "simulation finished"
    );

    result
}

/// Moves the head of the ready queue onto the CPU, charging its wait.
fn dispatch(ready: &mut ReadyQueue, clock: i64) -> Option<Process> {
    let mut next = ready.pop()?;
    next.mark_dispatched(clock);
    debug!(process = %next.id, clock, wait = next.wait, "dispatched");
    Some(next)
}
