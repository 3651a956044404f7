//! Error types for simulation runs.

use thiserror::Error;

use crate::validation::ValidationError;

/// Reasons a simulation is rejected before any scheduling decision.
///
/// The engines never fail part-way through a run: every check happens at
/// the boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Structurally invalid workload (empty, negative values, bad names, non-integers).
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Invalid algorithm parameter (e.g., Round-Robin quantum <= 0).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl SimulationError {
    /// Validation errors carried by an `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::InvalidParameter(_) => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
