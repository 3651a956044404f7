//! CPU scheduling simulation.
//!
//! Simulates a single CPU under First-Come-First-Served, non-preemptive
//! Shortest-Job-First and Round-Robin, and derives per-process waiting and
//! turnaround times with their averages.
//!
//! # Modules
//!
//! - **`models`**: `ProcessSpec`, `Process`, `Timeline`, `Slice`
//! - **`dispatching`**: `Algorithm` selector and dispatch-order rules
//! - **`scheduler`**: engines, `simulate`, `SimulationReport`
//! - **`validation`**: boundary checks (workload, quantum, numeric input)
//! - **`workload`**: random workload generation
//!
//! # Example
//!
//! ```
//! use u_cpusched::{simulate, Algorithm, ProcessSpec};
//!
//! let specs = ProcessSpec::numbered(&[4, 7]);
//! let report = simulate(&specs, Algorithm::RoundRobin, Some(3)).unwrap();
//!
//! assert_eq!(report.process("P1").unwrap().end_time, Some(7));
//! assert_eq!(report.process("P2").unwrap().end_time, Some(11));
//! ```
//!
//! Presentation (tables, charts) is left to the caller.

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use dispatching::Algorithm;
pub use error::SimulationError;
pub use models::{Process, ProcessSpec};
pub use scheduler::{simulate, SimulationReport, SimulationRequest};
