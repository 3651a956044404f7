//! Dispatching rules and algorithm selection.
//!
//! Non-preemptive disciplines differ only in the order they hand out the
//! CPU. That order comes from a [`DispatchingRule`]: FCFS uses [`rules::Fifo`],
//! SJF uses [`rules::Spt`].
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, sort_indices};
//! use u_cpusched::models::Process;
//!
//! let processes = vec![Process::new("P1", 5), Process::new("P2", 3)];
//! assert_eq!(sort_indices(&processes, &rules::Spt), vec![1, 0]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod algorithm;
pub mod rules;

pub use algorithm::Algorithm;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched earlier.
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** `position` is the process's index in
/// submission order.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process.
    fn evaluate(&self, process: &Process, position: usize) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Sorts submission indices by rule score.
///
/// The sort is stable: equal scores keep submission order.
pub fn sort_indices(processes: &[Process], rule: &dyn DispatchingRule) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| rule.evaluate(&processes[i], i));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(bursts: &[i64]) -> Vec<Process> {
        bursts
            .iter()
            .enumerate()
            .map(|(i, &b)| Process::new(format!("P{}", i + 1), b))
            .collect()
    }

    #[test]
    fn test_fifo_keeps_submission_order() {
        let processes = make(&[8, 1, 4]);
        assert_eq!(sort_indices(&processes, &rules::Fifo), vec![0, 1, 2]);
    }

    #[test]
    fn test_spt_ordering() {
        let processes = make(&[5, 3, 8]);
        assert_eq!(sort_indices(&processes, &rules::Spt), vec![1, 0, 2]);
    }

    #[test]
    fn test_spt_ties_are_stable() {
        let processes = make(&[4, 2, 4, 2]);
        assert_eq!(sort_indices(&processes, &rules::Spt), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_empty() {
        assert!(sort_indices(&[], &rules::Spt).is_empty());
    }
}
