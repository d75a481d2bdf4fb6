//! Simulation error type.

use std::error::Error;
use std::fmt;

use crate::validation::ValidationError;

/// Reasons a simulation call is rejected.
///
/// The policies themselves cannot fail; every variant describes input
/// that was refused before any timeline was built.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process set failed validation. Holds every detected issue.
    InvalidInput(Vec<ValidationError>),
    /// Round-Robin quantum below 1.
    InvalidQuantum(i64),
}

impl SimulationError {
    /// Validation issues carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::InvalidInput(errors) => errors,
            SimulationError::InvalidQuantum(_) => &[],
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid process set")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{e}")?;
                }
                Ok(())
            }
            SimulationError::InvalidQuantum(q) => {
                write!(f, "time quantum must be at least 1, got {q}")
            }
        }
    }
}

impl Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}
