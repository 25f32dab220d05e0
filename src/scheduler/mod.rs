//! CPU scheduling simulator and run metrics.
//!
//! Provides the simulator entry points for the six disciplines and
//! KPI evaluation over a finished run.
//!
//! # Algorithm
//!
//! Every discipline runs the same discrete-event loop (see `engine`):
//! arrivals are moved into a ready queue as the clock passes them, the
//! policy decides whether the head of the ready queue preempts the running
//! process, and the running process is granted CPU time. Idle gaps jump the
//! clock to the next arrival.
//!
//! # Concurrency
//!
//! A [`Simulator`] holds only an immutable, validated copy of its input.
//! Each run builds its queues locally and returns a [`SimulationResult`]
//! value, so runs never interfere with each other and the simulator can be
//! shared across threads.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod engine;
mod kpi;

pub use kpi::SimulationKpi;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Process, SimulationResult};
use crate::validation::{validate_processes, validate_quantum, ValidationError};

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time, preemptive.
    Srt,
    /// Highest priority first, non-preemptive.
    PriorityNonPreemptive,
    /// Highest priority first, preemptive.
    PriorityPreemptive,
    /// Time-sliced FIFO with the given quantum.
    RoundRobin { quantum: i64 },
}

impl Algorithm {
    /// All six disciplines, Round Robin using `quantum`.
    pub fn all(quantum: i64) -> [Algorithm; 6] {
        [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Srt,
            Algorithm::PriorityNonPreemptive,
            Algorithm::PriorityPreemptive,
            Algorithm::RoundRobin { quantum },
        ]
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srt => "SRT",
            Algorithm::PriorityNonPreemptive => "Priority (non-preemptive)",
            Algorithm::PriorityPreemptive => "Priority (preemptive)",
            Algorithm::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether a running process can lose the CPU before completing.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::Srt | Algorithm::PriorityPreemptive | Algorithm::RoundRobin { .. }
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::RoundRobin { quantum } => write!(f, "Round Robin (q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Why a simulation was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process set failed validation.
    InvalidInput(Vec<ValidationError>),
    /// Round Robin was requested with a non-positive quantum.
    InvalidQuantum(i64),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "invalid input: {}", messages.join("; "))
            }
            SimulationError::InvalidQuantum(quantum) => {
                write!(f, "invalid quantum: {quantum} (must be positive)")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Discipline to simulate.
    pub algorithm: Algorithm,
}

impl SimulationRequest {
    /// Creates a new request (FCFS by default).
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            algorithm: Algorithm::Fcfs,
        }
    }

    /// Sets the discipline.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }
}

/// Discrete-event CPU scheduling simulator.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::Simulator;
///
/// let processes = vec![
///     Process::new("P0", 0, 5, 1),
///     Process::new("P1", 1, 3, 2),
///     Process::new("P2", 2, 1, 3),
/// ];
/// let simulator = Simulator::new(&processes).unwrap();
///
/// let result = simulator.fcfs().unwrap();
/// assert_eq!(result.completion_order(), vec!["P0", "P1", "P2"]);
/// assert!((result.average_wait - 10.0 / 3.0).abs() < 1e-9);
///
/// // The caller's records are never mutated.
/// assert_eq!(processes[0].duration, 5);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    processes: Vec<Process>,
}

impl Simulator {
    /// Validates `processes` and stores a private copy.
    ///
    /// Any simulation state already on the records is discarded; each copy
    /// starts fresh with its current `duration` as the burst.
    pub fn new(processes: &[Process]) -> Result<Self, SimulationError> {
        validate_processes(processes)?;
        Ok(Self {
            processes: processes.iter().map(Process::fresh).collect(),
        })
    }

    /// The validated input.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Simulates `algorithm` over a fresh copy of the input.
    pub fn run(&self, algorithm: &Algorithm) -> Result<SimulationResult, SimulationError> {
        if let Algorithm::RoundRobin { quantum } = *algorithm {
            validate_quantum(quantum).map_err(|_| SimulationError::InvalidQuantum(quantum))?;
        }
        Ok(engine::simulate(self.processes.clone(), *algorithm))
    }

    /// First-Come-First-Served.
    pub fn fcfs(&self) -> Result<SimulationResult, SimulationError> {
        self.run(&Algorithm::Fcfs)
    }

    /// Shortest-Job-First (non-preemptive).
    pub fn sjf(&self) -> Result<SimulationResult, SimulationError> {
        self.run(&Algorithm::Sjf)
    }

    /// Shortest-Remaining-Time (preemptive).
    pub fn srt(&self) -> Result<SimulationResult, SimulationError> {
        self.run(&Algorithm::Srt)
    }

    /// Priority, non-preemptive.
    pub fn priority_non_preemptive(&self) -> Result<SimulationResult, SimulationError> {
        self.run(&Algorithm::PriorityNonPreemptive)
    }

    /// Priority, preemptive.
    pub fn priority_preemptive(&self) -> Result<SimulationResult, SimulationError> {
        self.run(&Algorithm::PriorityPreemptive)
    }

    /// Round Robin with the given quantum.
    pub fn round_robin(&self, quantum: i64) -> Result<SimulationResult, SimulationError> {
        self.run(&Algorithm::RoundRobin { quantum })
    }
}

/// Validates `processes` and simulates `algorithm` over them.
pub fn simulate(
    processes: &[Process],
    algorithm: &Algorithm,
) -> Result<SimulationResult, SimulationError> {
    Simulator::new(processes)?.run(algorithm)
}

/// Validates and runs a request.
pub fn simulate_request(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
    simulate(&request.processes, &request.algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("P0", 0, 5, 1),
            Process::new("P1", 1, 3, 2),
            Process::new("P2", 2, 1, 3),
        ]
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = Simulator::new(&[]).unwrap_err();
        match err {
            SimulationError::InvalidInput(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_any_negative_record() {
        let mut processes = sample();
        processes[1].priority = -1;
        assert!(Simulator::new(&processes).is_err());
        for algorithm in Algorithm::all(2) {
            assert!(simulate(&processes, &algorithm).is_err(), "{algorithm}");
        }
    }

    #[test]
    fn test_round_robin_rejects_non_positive_quantum() {
        let simulator = Simulator::new(&sample()).unwrap();
        assert_eq!(
            simulator.round_robin(0).unwrap_err(),
            SimulationError::InvalidQuantum(0)
        );
        assert_eq!(
            simulator.round_robin(-3).unwrap_err(),
            SimulationError::InvalidQuantum(-3)
        );
        assert!(simulator.round_robin(1).is_ok());
    }

    #[test]
    fn test_runs_do_not_share_state() {
        let simulator = Simulator::new(&sample()).unwrap();
        let first = simulator.srt().unwrap();
        let _ = simulator.round_robin(1).unwrap();
        let again = simulator.srt().unwrap();

        assert_eq!(first, again);
        assert_eq!(simulator.processes(), sample().as_slice());
    }

    #[test]
    fn test_entry_points_match_run() {
        let simulator = Simulator::new(&sample()).unwrap();
        assert_eq!(simulator.fcfs().unwrap(), simulator.run(&Algorithm::Fcfs).unwrap());
        assert_eq!(simulator.sjf().unwrap().algorithm, Algorithm::Sjf);
        assert_eq!(
            simulator.priority_non_preemptive().unwrap().algorithm,
            Algorithm::PriorityNonPreemptive
        );
        assert_eq!(
            simulator.priority_preemptive().unwrap().algorithm,
            Algorithm::PriorityPreemptive
        );
        assert_eq!(
            simulator.round_robin(3).unwrap().algorithm,
            Algorithm::RoundRobin { quantum: 3 }
        );
    }

    #[test]
    fn test_simulator_is_shareable_across_threads() {
        let simulator = std::sync::Arc::new(Simulator::new(&sample()).unwrap());
        let handles: Vec<_> = Algorithm::all(2)
            .into_iter()
            .map(|algorithm| {
                let simulator = std::sync::Arc::clone(&simulator);
                std::thread::spawn(move || simulator.run(&algorithm).map(|r| r.len()))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(3));
        }
    }

    #[test]
    fn test_simulate_request() {
        let request = SimulationRequest::new(sample())
            .with_process(Process::new("P3", 20, 2, 0))
            .with_algorithm(Algorithm::RoundRobin { quantum: 2 });

        let result = simulate_request(&request).unwrap();
        assert_eq!(result.len(), 4);
        assert_eq!(result.algorithm, Algorithm::RoundRobin { quantum: 2 });
    }

    #[test]
    fn test_request_json() {
        let json = r#"{
            "processes": [
                {"id": "A", "arrival": 0, "duration": 4, "priority": 1},
                {"id": "B", "arrival": 1, "duration": 2, "priority": 0}
            ],
            "algorithm": {"round_robin": {"quantum": 2}}
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.algorithm, Algorithm::RoundRobin { quantum: 2 });

        let result = simulate_request(&request).unwrap();
        assert_eq!(result.completion_order(), vec!["B", "A"]);

        let encoded = serde_json::to_string(&Algorithm::PriorityPreemptive).unwrap();
        assert_eq!(encoded, r#""priority_preemptive""#);
    }

    #[test]
    fn test_new_discards_prior_state() {
        let mut processes = sample();
        processes[0].wait = 10;
        processes[0].preempted_at = Some(2);
        processes[1].turnaround = 99;
        processes[1].completed_at = Some(4);
        processes[2].burst = 9;

        let simulator = Simulator::new(&processes).unwrap();
        assert_eq!(simulator.processes(), sample().as_slice());

        for algorithm in Algorithm::all(2) {
            let result = simulator.run(&algorithm).unwrap();
            for p in &result.completed {
                assert!(p.wait <= p.turnaround, "{algorithm} {}", p.id);
                assert_eq!(p.turnaround - p.wait, p.burst, "{algorithm} {}", p.id);
            }
        }
        let fcfs = simulator.fcfs().unwrap();
        assert_eq!(fcfs.process("P0").map(|p| p.wait), Some(0));
    }

    #[test]
    fn test_json_burst_is_taken_from_duration() {
        let json = r#"{"id": "A", "arrival": 0, "duration": 4, "priority": 0, "burst": 9}"#;
        let process: Process = serde_json::from_str(json).unwrap();

        let result = simulate(&[process], &Algorithm::Fcfs).unwrap();
        let a = &result.completed[0];
        assert_eq!(a.burst, 4);
        assert_eq!(a.turnaround - a.wait, 4);
    }

    #[test]
    fn test_clock_overflow_is_rejected() {
        let err = Simulator::new(&[Process::new("A", i64::MAX - 1, 5, 0)]).unwrap_err();
        match err {
            SimulationError::InvalidInput(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::ClockOverflow)
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let simulator = Simulator::new(&[
            Process::new("A", i64::MAX - 6, 5, 0),
            Process::new("B", i64::MAX - 6, 1, 0),
        ])
        .unwrap();
        for algorithm in Algorithm::all(2) {
            let result = simulator.run(&algorithm).unwrap();
            assert_eq!(result.makespan(), i64::MAX, "{algorithm}");
        }
    }

    #[test]
    fn test_algorithm_metadata() {
        let preemptive: Vec<_> = Algorithm::all(4)
            .iter()
            .filter(|a| a.is_preemptive())
            .map(|a| a.name())
            .collect();
        assert_eq!(
            preemptive,
            vec!["SRT", "Priority (preemptive)", "Round Robin"]
        );
        assert_eq!(
            Algorithm::RoundRobin { quantum: 4 }.to_string(),
            "Round Robin (q=4)"
        );
        assert_eq!(Algorithm::Fcfs.to_string(), "FCFS");
    }

    #[test]
    fn test_error_display() {
        let err = Simulator::new(&[Process::new("X", -1, 1, 0)]).unwrap_err();
        assert_eq!(err.to_string(), "invalid input: Process 'X' has negative arrival -1");
        assert_eq!(
            SimulationError::InvalidQuantum(0).to_string(),
            "invalid quantum: 0 (must be positive)"
        );
    }
}
