//! Scheduling discipline selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served: submission order, no preemption.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive, static order.
    #[serde(rename = "SJF")]
    Sjf,
    /// Round-Robin with a fixed quantum.
    #[serde(rename = "RR")]
    RoundRobin,
}

impl Algorithm {
    /// All disciplines, in display order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::RoundRobin];

    /// Short name ("FCFS", "SJF", "RR").
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin => "RR",
        }
    }

    /// Whether the discipline needs a quantum.
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            _ => Err(SimulationError::InvalidInput(vec![ValidationError::new(
                ValidationErrorKind::UnknownAlgorithm,
                format!("Unknown algorithm '{s}'. Valid: FCFS, SJF, RR"),
            )])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("FCFS".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("sjf".parse::<Algorithm>(), Ok(Algorithm::Sjf));
        assert_eq!(" RR ".parse::<Algorithm>(), Ok(Algorithm::RoundRobin));
        assert_eq!("round_robin".parse::<Algorithm>(), Ok(Algorithm::RoundRobin));
    }

    #[test]
    fn test_parse_unknown_algorithm() {
        let err = "SRTF".parse::<Algorithm>().unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::UnknownAlgorithm
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_serde_short_names() {
        assert_eq!(serde_json::to_string(&Algorithm::RoundRobin).unwrap(), "\"RR\"");
        let parsed: Algorithm = serde_json::from_str("\"SJF\"").unwrap();
        assert_eq!(parsed, Algorithm::Sjf);
    }

    #[test]
    fn test_only_rr_is_preemptive() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(Algorithm::RoundRobin.is_preemptive());
    }
}
