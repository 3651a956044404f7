//! Single-CPU scheduling engines.
//!
//! # Algorithms
//!
//! - **FCFS**: one pass in submission order, each process runs to completion.
//! - **SJF**: one pass in stable ascending burst order, no re-evaluation.
//! - **Round-Robin**: repeated passes over the submission list, each visit
//!   runs at most one quantum.
//!
//! All processes are assumed present at t=0; `arrival_time` does not gate
//! dispatch. Processes with zero burst are never dispatched.
//!
//! # Complexity
//! FCFS O(n), SJF O(n log n), Round-Robin O(n * max_burst / quantum).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::metrics::SimulationReport;
use crate::dispatching::{rules, sort_indices, Algorithm, DispatchingRule};
use crate::error::SimulationError;
use crate::models::{Process, ProcessSpec, Slice, Timeline};
use crate::validation::{validate_processes, validate_quantum};

/// Input container for a simulation run.
///
/// Deserializes from JSON such as
/// `{"processes": [{"name": "P1", "burst_time": 4}], "algorithm": "RR", "quantum": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes in submission order.
    pub processes: Vec<ProcessSpec>,
    /// Discipline to simulate.
    pub algorithm: Algorithm,
    /// Round-Robin quantum. Ignored by FCFS and SJF.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request without a quantum.
    pub fn new(processes: Vec<ProcessSpec>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: None,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<SimulationReport, SimulationError> {
        simulate(&self.processes, self.algorithm, self.quantum)
    }
}

/// Per-run simulation state: the clock and the dispatch log.
#[derive(Debug, Default)]
struct SimulationContext {
    current_time: i64,
    timeline: Timeline,
}

impl SimulationContext {
    fn new() -> Self {
        Self::default()
    }

    /// Gives `process` the CPU for `run_for` units and advances the clock.
    fn dispatch(&mut self, process: &mut Process, run_for: i64) {
        if process.start_time.is_none() {
            process.start_time = Some(self.current_time);
        }
        let start = self.current_time;
        self.current_time = self.current_time.saturating_add(run_for);
        debug!(
            process = %process.name,
            start,
            end = self.current_time,
            "dispatch"
        );
        self.timeline
            .push(Slice::new(process.name.as_str(), start, self.current_time));
    }
}

/// Validates the workload and simulates it under `algorithm`.
///
/// Builds fresh process records from `specs`, so the caller's input is
/// never mutated and the same specs can be simulated repeatedly.
///
/// # Errors
/// - `InvalidInput` if the workload fails validation.
/// - `InvalidParameter` if `algorithm` is Round-Robin and `quantum` is
///   missing or <= 0.
#[instrument(level = "debug", skip(specs), fields(count = specs.len()))]
pub fn simulate(
    specs: &[ProcessSpec],
    algorithm: Algorithm,
    quantum: Option<i64>,
) -> Result<SimulationReport, SimulationError> {
    if let Err(errors) = validate_processes(specs) {
        warn!(errors = errors.len(), "rejected workload");
        return Err(errors.into());
    }

    let quantum = if algorithm.is_preemptive() {
        match validate_quantum(quantum) {
            Ok(q) => Some(q),
            Err(e) => {
                warn!(error = %e, "rejected quantum");
                return Err(e);
            }
        }
    } else {
        None
    };

    let mut processes: Vec<Process> = specs.iter().map(Process::from).collect();
    let timeline = schedule(&mut processes, algorithm, quantum)?;
    let report = SimulationReport::calculate(algorithm, quantum, &processes, timeline);

    info!(
        %algorithm,
        processes = processes.len(),
        makespan = report.makespan(),
        "simulation complete"
    );
    Ok(report)
}

/// Runs `algorithm` over existing records in place.
///
/// Every engine resets the records first, so the same slice can be re-run
/// under another algorithm.
pub fn schedule(
    processes: &mut [Process],
    algorithm: Algorithm,
    quantum: Option<i64>,
) -> Result<Timeline, SimulationError> {
    match algorithm {
        Algorithm::Fcfs => Ok(fcfs(processes)),
        Algorithm::Sjf => Ok(sjf(processes)),
        Algorithm::RoundRobin => round_robin(processes, validate_quantum(quantum)?),
    }
}

/// First-Come-First-Served.
///
/// Completion order equals submission order.
pub fn fcfs(processes: &mut [Process]) -> Timeline {
    run_non_preemptive(processes, &rules::Fifo)
}

/// Shortest-Job-First (non-preemptive).
///
/// Dispatch order is a stable sort by original burst time, fixed up front.
pub fn sjf(processes: &mut [Process]) -> Timeline {
    run_non_preemptive(processes, &rules::Spt)
}

/// Round-Robin with a fixed quantum.
///
/// Passes over the records in submission order until all remaining bursts
/// reach zero. `start_time` is set on the first visit only; `end_time` is
/// set when the last slice finishes. Records are reset before the run.
///
/// # Errors
/// `InvalidParameter` if `quantum <= 0`.
pub fn round_robin(processes: &mut [Process], quantum: i64) -> Result<Timeline, SimulationError> {
    let quantum = validate_quantum(Some(quantum))?;
    let mut ctx = SimulationContext::new();

    for process in processes.iter_mut() {
        process.reset();
        if process.is_finished() {
            debug!(process = %process.name, "skipping zero-burst process");
        }
    }

    while processes.iter().any(|p| !p.is_finished()) {
        for process in processes.iter_mut() {
            if process.is_finished() {
                continue;
            }

            if process.remaining_burst <= quantum {
                let run_for = process.remaining_burst;
                ctx.dispatch(process, run_for);
                process.remaining_burst = 0;
                process.end_time = Some(ctx.current_time);
            } else {
                ctx.dispatch(process, quantum);
                process.remaining_burst -= quantum;
            }
        }
    }

    Ok(ctx.timeline)
}

fn run_non_preemptive(processes: &mut [Process], rule: &dyn DispatchingRule) -> Timeline {
    processes.iter_mut().for_each(Process::reset);
    let order = sort_indices(processes, rule);
    let mut ctx = SimulationContext::new();

    for idx in order {
        let process = &mut processes[idx];
        if process.burst_time <= 0 {
            debug!(process = %process.name, rule = rule.name(), "skipping zero-burst process");
            continue;
        }

        let burst = process.burst_time;
        ctx.dispatch(process, burst);
        process.end_time = Some(ctx.current_time);
    }

    ctx.timeline
}
