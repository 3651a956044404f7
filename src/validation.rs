//! Input validation for simulation runs.
//!
//! Checks the workload and algorithm parameters before any scheduling
//! decision is made. Detects:
//! - Empty workloads (process count <= 0)
//! - Negative burst or arrival times
//! - Total burst time that overflows the simulation clock
//! - Empty or duplicate process names
//! - Non-integer burst input
//! - Missing or non-positive Round-Robin quantum
//!
//! Zero burst times are valid: such processes are simply never dispatched.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyWorkload,
    /// A burst time is below zero.
    NegativeBurst,
    /// An arrival time is below zero.
    NegativeArrival,
    /// The sum of all burst times does not fit the clock.
    BurstOverflow,
    /// A process has an empty name.
    EmptyName,
    /// Two processes share the same name.
    DuplicateName,
    /// A token could not be read as an integer.
    NotAnInteger,
    /// An algorithm name was not recognized.
    UnknownAlgorithm,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a workload.
///
/// Checks:
/// 1. At least one process
/// 2. Non-empty, unique names
/// 3. Burst times >= 0
/// 4. Arrival times >= 0
/// 5. Total burst time fits in `i64` (the makespan of every discipline)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Number of processes must be positive",
        ));
    }

    let mut names = HashSet::new();
    let mut total_burst: Option<i64> = Some(0);
    for (i, p) in processes.iter().enumerate() {
        if p.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Process #{} has no name", i + 1),
            ));
        } else if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", p.name),
            ));
        }

        if p.burst_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeBurst,
                format!("Process '{}' has negative burst time {}", p.name, p.burst_time),
            ));
        }

        if p.burst_time > 0 {
            total_burst = total_burst.and_then(|t| t.checked_add(p.burst_time));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.name, p.arrival_time
                ),
            ));
        }
    }

    if total_burst.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::BurstOverflow,
            format!("Total burst time exceeds {}", i64::MAX),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round-Robin quantum.
///
/// Returns the quantum on success. A missing quantum or one <= 0 is an
/// `InvalidParameter`.
pub fn validate_quantum(quantum: Option<i64>) -> Result<i64, SimulationError> {
    match quantum {
        Some(q) if q > 0 => Ok(q),
        Some(q) => Err(SimulationError::InvalidParameter(format!(
            "quantum must be positive, got {q}"
        ))),
        None => Err(SimulationError::InvalidParameter(
            "Round-Robin requires a quantum".into(),
        )),
    }
}

/// Parses burst times from free-form text.
///
/// Accepts integers separated by whitespace and/or commas, e.g. `"5 3 8"`
/// or `"5, 3, 8"`. Every bad token is reported.
pub fn parse_burst_times(input: &str) -> Result<Vec<i64>, SimulationError> {
    let mut bursts = Vec::new();
    let mut errors = Vec::new();

    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        match token.parse::<i64>() {
            Ok(b) if b < 0 => errors.push(ValidationError::new(
                ValidationErrorKind::NegativeBurst,
                format!("Burst time must be non-negative, got {b}"),
            )),
            Ok(b) => bursts.push(b),
            Err(_) => errors.push(ValidationError::new(
                ValidationErrorKind::NotAnInteger,
                format!("Burst time '{token}' is not an integer"),
            )),
        }
    }

    if bursts.is_empty() && errors.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Number of processes must be positive",
        ));
    }

    if errors.is_empty() {
        Ok(bursts)
    } else {
        Err(SimulationError::InvalidInput(errors))
    }
}
