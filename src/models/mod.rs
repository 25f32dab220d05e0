//! Simulation domain models.
//!
//! Provides the data types for describing a CPU scheduling workload and
//! the outcome of simulating it.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | One CPU burst and its simulation state |
//! | `SimulationResult` | Completion-ordered processes, averages, timeline |
//! | `ExecutionSlice` | One contiguous CPU interval (Gantt data) |

mod outcome;
mod process;

pub use outcome::{ExecutionSlice, SimulationResult};
pub use process::Process;
