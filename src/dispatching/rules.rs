//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// First-In-First-Out.
///
/// Dispatches in submission order. Drives FCFS.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, _process: &Process, position: usize) -> RuleScore {
        position as RuleScore
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}

/// Shortest Processing Time.
///
/// Prioritizes processes with shorter original burst time. Drives SJF.
/// Minimizes average waiting time when all processes arrive together.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process, _position: usize) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_scores_by_position() {
        let p = Process::new("P1", 100);
        assert_eq!(Fifo.evaluate(&p, 0), 0);
        assert_eq!(Fifo.evaluate(&p, 4), 4);
    }

    #[test]
    fn test_spt_ignores_remaining_burst() {
        let mut p = Process::new("P1", 8);
        p.remaining_burst = 2;
        assert_eq!(Spt.evaluate(&p, 3), 8);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Fifo.name(), "FIFO");
        assert_eq!(Spt.description(), "Shortest Processing Time");
    }
}
