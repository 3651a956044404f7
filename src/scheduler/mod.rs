//! Scheduling engines and simulation metrics.
//!
//! Provides FCFS, non-preemptive SJF and Round-Robin engines over a single
//! CPU, plus waiting/turnaround metrics.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::Algorithm;
//! use u_cpusched::models::ProcessSpec;
//! use u_cpusched::scheduler::simulate;
//!
//! let specs = ProcessSpec::numbered(&[5, 3, 8]);
//! let report = simulate(&specs, Algorithm::Sjf, None).unwrap();
//!
//! assert_eq!(report.timeline.dispatch_order(), vec!["P2", "P1", "P3"]);
//! assert_eq!(report.makespan(), 16);
//! ```
//!
//! # Concurrency
//!
//! Engines are synchronous and run to completion. A record slice must not
//! be simulated by two engines at once; `&mut` borrows enforce this.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod engine;
mod metrics;

pub use engine::{fcfs, round_robin, schedule, simulate, sjf, SimulationRequest};
pub use metrics::{nan_mean, ProcessMetrics, SimulationReport};
