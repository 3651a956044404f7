//! Simulation metrics.
//!
//! Derives per-process and aggregate timing from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Waiting time | start_time - arrival_time |
//! | Turnaround time | end_time - arrival_time |
//! | Average waiting | Mean over defined waiting times |
//! | Average turnaround | Mean over defined turnaround times |
//! | Makespan | Latest completion time |
//!
//! A process that never ran has no waiting or turnaround time. It is left
//! out of the averages rather than counted as zero.

use serde::{Deserialize, Serialize};

use crate::dispatching::Algorithm;
use crate::models::{Process, Timeline};

/// Timing results for a single process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process name.
    pub name: String,
    /// Original burst time.
    pub burst_time: i64,
    /// Arrival time.
    pub arrival_time: i64,
    /// First dispatch.
    pub start_time: Option<i64>,
    /// Completion.
    pub end_time: Option<i64>,
    /// start_time - arrival_time.
    pub waiting_time: Option<i64>,
    /// end_time - arrival_time.
    pub turnaround_time: Option<i64>,
}

impl ProcessMetrics {
    /// Derives metrics from a simulated process record.
    pub fn from_process(process: &Process) -> Self {
        Self {
            name: process.name.clone(),
            burst_time: process.burst_time,
            arrival_time: process.arrival_time,
            start_time: process.start_time,
            end_time: process.end_time,
            waiting_time: process.start_time.map(|s| s - process.arrival_time),
            turnaround_time: process.end_time.map(|e| e - process.arrival_time),
        }
    }
}

/// Full result of one simulation run.
///
/// `processes` is in submission order regardless of the dispatch order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Discipline used.
    pub algorithm: Algorithm,
    /// Quantum used (Round-Robin only).
    pub quantum: Option<i64>,
    /// Per-process results, submission order.
    pub processes: Vec<ProcessMetrics>,
    /// Every CPU slice handed out.
    pub timeline: Timeline,
    /// Mean of defined waiting times.
    pub avg_waiting_time: Option<f64>,
    /// Mean of defined turnaround times.
    pub avg_turnaround_time: Option<f64>,
}

impl SimulationReport {
    /// Builds a report from simulated records and their timeline.
    pub fn calculate(
        algorithm: Algorithm,
        quantum: Option<i64>,
        processes: &[Process],
        timeline: Timeline,
    ) -> Self {
        let metrics: Vec<ProcessMetrics> =
            processes.iter().map(ProcessMetrics::from_process).collect();
        let avg_waiting_time = nan_mean(metrics.iter().map(|m| m.waiting_time));
        let avg_turnaround_time = nan_mean(metrics.iter().map(|m| m.turnaround_time));

        Self {
            algorithm,
            quantum,
            processes: metrics,
            timeline,
            avg_waiting_time,
            avg_turnaround_time,
        }
    }

    /// Latest completion time, 0 when nothing ran.
    pub fn makespan(&self) -> i64 {
        self.timeline.makespan()
    }

    /// Number of processes that ran to completion.
    pub fn completed_count(&self) -> usize {
        self.processes
            .iter()
            .filter(|m| m.end_time.is_some())
            .count()
    }

    /// Finds metrics by process name.
    pub fn process(&self, name: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.name == name)
    }
}

/// Arithmetic mean of the defined values.
///
/// `None` entries are skipped. Returns `None` when no value is defined.
pub fn nan_mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<i64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0i128, 0usize), |(sum, count), v| (sum + i128::from(v), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slice;

    fn finished(name: &str, burst: i64, start: i64, end: i64) -> Process {
        let mut p = Process::new(name, burst);
        p.start_time = Some(start);
        p.end_time = Some(end);
        p
    }

    #[test]
    fn test_process_metrics() {
        let m = ProcessMetrics::from_process(&finished("P2", 3, 5, 8));
        assert_eq!(m.waiting_time, Some(5));
        assert_eq!(m.turnaround_time, Some(8));
    }

    #[test]
    fn test_process_metrics_with_arrival() {
        let p = finished("P1", 4, 6, 10).with_arrival_time(2);
        let m = ProcessMetrics::from_process(&p);
        assert_eq!(m.waiting_time, Some(4));
        assert_eq!(m.turnaround_time, Some(8));
    }

    #[test]
    fn test_unscheduled_process_has_no_metrics() {
        let m = ProcessMetrics::from_process(&Process::new("idle", 0));
        assert!(m.waiting_time.is_none());
        assert!(m.turnaround_time.is_none());
    }

    #[test]
    fn test_nan_mean() {
        assert_eq!(nan_mean(vec![Some(0), Some(5), Some(8)]), Some(13.0 / 3.0));
        assert_eq!(nan_mean(vec![Some(4), None, Some(6)]), Some(5.0));
        assert_eq!(nan_mean(vec![None, None]), None);
        assert_eq!(nan_mean(Vec::<Option<i64>>::new()), None);
    }

    #[test]
    fn test_nan_mean_large_values() {
        let mean = nan_mean(vec![Some(i64::MAX), Some(i64::MAX)]).unwrap();
        assert!((mean - i64::MAX as f64).abs() < 1.0e4);
    }

    #[test]
    fn test_report_averages_skip_undefined() {
        let processes = vec![
            finished("P1", 5, 0, 5),
            Process::new("P2", 0),
            finished("P3", 3, 5, 8),
        ];
        let mut timeline = Timeline::new();
        timeline.push(Slice::new("P1", 0, 5));
        timeline.push(Slice::new("P3", 5, 8));

        let report = SimulationReport::calculate(Algorithm::Fcfs, None, &processes, timeline);
        assert!((report.avg_waiting_time.unwrap() - 2.5).abs() < 1e-10); // (0+5)/2
        assert!((report.avg_turnaround_time.unwrap() - 6.5).abs() < 1e-10); // (5+8)/2
        assert_eq!(report.completed_count(), 2);
        assert_eq!(report.makespan(), 8);
        assert!(report.process("P2").unwrap().waiting_time.is_none());
    }

    #[test]
    fn test_report_all_undefined() {
        let processes = vec![Process::new("P1", 0), Process::new("P2", 0)];
        let report =
            SimulationReport::calculate(Algorithm::Sjf, None, &processes, Timeline::new());
        assert!(report.avg_waiting_time.is_none());
        assert!(report.avg_turnaround_time.is_none());
        assert_eq!(report.makespan(), 0);
        assert_eq!(report.completed_count(), 0);
    }
}
