//! Process record model.
//!
//! A process is a unit of CPU work identified by name, with a total
//! burst time and an arrival time. The scheduler fills in the first
//! dispatch and completion timestamps.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Caller-supplied description of a process to simulate.
///
/// This is the boundary input type: it carries only what a user declares.
/// Use [`Process::from_spec`] to turn it into a schedulable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process name (e.g., "P1").
    pub name: String,
    /// Total CPU time required (time units).
    pub burst_time: i64,
    /// Time at which the process becomes eligible to run.
    #[serde(default)]
    pub arrival_time: i64,
}

impl ProcessSpec {
    /// Creates a spec arriving at t=0.
    pub fn new(name: impl Into<String>, burst_time: i64) -> Self {
        Self {
            name: name.into(),
            burst_time,
            arrival_time: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Builds `P1..Pn` from burst times in submission order.
    pub fn numbered(burst_times: &[i64]) -> Vec<Self> {
        burst_times
            .iter()
            .enumerate()
            .map(|(i, &burst)| Self::new(format!("P{}", i + 1), burst))
            .collect()
    }
}

/// A process record during and after a simulation run.
///
/// `burst_time` is the declared total and never changes. `remaining_burst`
/// is consumed by preemptive scheduling only; non-preemptive runs leave it
/// untouched.
///
/// # Timestamps
/// - `start_time`: first dispatch. Set once, never moved afterwards.
/// - `end_time`: completion. `None` until the process finishes.
///
/// Records are not safe to simulate concurrently: one engine call owns the
/// slice for the duration of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process name.
    pub name: String,
    /// Original total burst time.
    pub burst_time: i64,
    /// Burst time not yet executed.
    pub remaining_burst: i64,
    /// Arrival time (stored, not used for dispatch).
    pub arrival_time: i64,
    /// Time of first dispatch.
    pub start_time: Option<i64>,
    /// Time of completion.
    pub end_time: Option<i64>,
}

impl Process {
    /// Creates a fresh record arriving at t=0.
    pub fn new(name: impl Into<String>, burst_time: i64) -> Self {
        Self {
            name: name.into(),
            burst_time,
            remaining_burst: burst_time,
            arrival_time: 0,
            start_time: None,
            end_time: None,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Creates a fresh record from a boundary spec.
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self::new(spec.name.clone(), spec.burst_time).with_arrival_time(spec.arrival_time)
    }

    /// Clears timestamps and restores the remaining burst.
    ///
    /// Allows the same records to be re-run under a different algorithm.
    pub fn reset(&mut self) {
        self.remaining_burst = self.burst_time;
        self.start_time = None;
        self.end_time = None;
    }

    /// Whether no work remains.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_burst <= 0
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }
}

impl From<&ProcessSpec> for Process {
    fn from(spec: &ProcessSpec) -> Self {
        Self::from_spec(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new("P1", 5);
        assert_eq!(p.name, "P1");
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.remaining_burst, 5);
        assert_eq!(p.arrival_time, 0);
        assert!(p.start_time.is_none());
        assert!(p.end_time.is_none());
        assert!(!p.is_finished());
        assert!(!p.has_started());
    }

    #[test]
    fn test_process_from_spec() {
        let spec = ProcessSpec::new("A", 7).with_arrival_time(2);
        let p = Process::from(&spec);
        assert_eq!(p.name, "A");
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.remaining_burst, 7);
        assert_eq!(p.arrival_time, 2);
    }

    #[test]
    fn test_process_reset() {
        let mut p = Process::new("P1", 4);
        p.remaining_burst = 0;
        p.start_time = Some(3);
        p.end_time = Some(10);
        assert!(p.is_finished());

        p.reset();
        assert_eq!(p.remaining_burst, 4);
        assert!(p.start_time.is_none());
        assert!(p.end_time.is_none());
    }

    #[test]
    fn test_zero_burst_is_finished() {
        assert!(Process::new("idle", 0).is_finished());
    }

    #[test]
    fn test_numbered_specs() {
        let specs = ProcessSpec::numbered(&[5, 3, 8]);
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2", "P3"]);
        assert_eq!(specs[2].burst_time, 8);
        assert!(specs.iter().all(|s| s.arrival_time == 0));
    }
}
