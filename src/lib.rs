//! Discrete-event CPU scheduling simulator.
//!
//! Simulates how a uniprocessor scheduler dispatches a fixed, known-in-advance
//! set of processes and reports per-process wait and turnaround times plus
//! system-wide averages. Time is a simulated integer clock; nothing here
//! touches real threads or timers.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `SimulationResult`, `ExecutionSlice`
//! - **`validation`**: Input integrity checks (empty input, negative fields, duplicate IDs)
//! - **`dispatching`**: Ordering keys, ready queues and per-discipline dispatch policies
//! - **`scheduler`**: `Simulator` entry points (FCFS, SJF, SRT, Priority, Round Robin) and KPIs
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::scheduler::{Algorithm, Simulator, SimulationKpi};
//!
//! let simulator = Simulator::new(&[
//!     Process::new("P0", 0, 5, 1),
//!     Process::new("P1", 1, 3, 2),
//!     Process::new("P2", 2, 1, 3),
//! ])
//! .unwrap();
//!
//! for algorithm in Algorithm::all(2) {
//!     let result = simulator.run(&algorithm).unwrap();
//!     let kpi = SimulationKpi::calculate(&result);
//!     assert_eq!(result.len(), 3);
//!     assert!(kpi.cpu_utilization > 0.0);
//! }
//! ```
//!
//! # Logging
//!
//! The simulator emits `tracing` events (`debug` for dispatch, preemption and
//! completion, `trace` for arrivals and idle gaps). Install a subscriber to
//! see them.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use models::{ExecutionSlice, Process, SimulationResult};
pub use scheduler::{simulate, simulate_request, Algorithm, SimulationError, Simulator};
