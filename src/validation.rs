//! Input validation for process sets.
//!
//! Checks structural integrity of the process list before simulation.
//! Detects:
//! - Empty process sets
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate process IDs
//! - Timelines whose end would not fit in an `i64`
//!
//! Every policy validates its input up front, so a malformed list fails
//! the whole call instead of producing incorrect metrics.

use std::collections::HashSet;
use std::fmt;

use tracing::warn;

use crate::error::SimulationError;
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// A process has `burst_time < 1`.
    NonPositiveBurst,
    /// A process has `arrival_time < 0`.
    NegativeArrival,
    /// Two processes share the same ID.
    DuplicateId,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    TimelineOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
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

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. All burst times are >= 1
/// 4. All arrival times are >= 0
/// 5. `max(arrival) + sum(burst)` fits in an `i64`
///
/// Check 5 bounds every clock value the policies compute: no process can
/// finish later than the last arrival plus all work.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.display_name(),
                    p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.display_name(),
                    p.arrival_time
                ),
            ));
        }
    }

    let horizon = processes
        .iter()
        .try_fold(0_i64, |acc, p| acc.checked_add(p.burst_time.max(0)))
        .and_then(|work| {
            let last_arrival = processes.iter().map(|p| p.arrival_time.max(0)).max()?;
            last_arrival.checked_add(work)
        });
    if horizon.is_none() && !processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimelineOverflow,
            "Latest arrival plus total burst time exceeds the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        warn!(count = errors.len(), "rejected process set");
        Err(errors)
    }
}

/// Validates a Round-Robin time quantum (must be >= 1).
pub fn validate_quantum(quantum: i64) -> Result<(), SimulationError> {
    if quantum < 1 {
        warn!(quantum, "rejected time quantum");
        return Err(SimulationError::InvalidQuantum(quantum));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 1, 1).with_name("tiny"),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_zero_arrival_is_valid() {
        assert!(validate_processes(&[Process::new(1, 0, 1)]).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessSet);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, 0, 5), Process::new(1, 2, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new(1, 0, 0), Process::new(2, 0, -4)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new(1, -1, 2).with_name("early")];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
        assert!(errors[0].message.contains("early"));
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate id + zero burst + negative arrival
        let processes = vec![Process::new(1, 0, 2), Process::new(1, -3, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_timeline_overflow() {
        let processes = vec![Process::new(1, 0, i64::MAX), Process::new(2, 0, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimelineOverflow);

        // Late arrival pushes the end past the range even with small bursts
        let processes = vec![Process::new(1, i64::MAX - 1, 1), Process::new(2, 0, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimelineOverflow);
    }

    #[test]
    fn test_timeline_at_limit_is_valid() {
        let processes = vec![Process::new(1, 0, i64::MAX - 1), Process::new(2, 0, 1)];
        assert!(validate_processes(&processes).is_ok());
        assert!(validate_processes(&[Process::new(1, i64::MAX - 1, 1)]).is_ok());
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(1).is_ok());
        assert!(validate_quantum(10).is_ok());
        assert_eq!(
            validate_quantum(0).unwrap_err(),
            SimulationError::InvalidQuantum(0)
        );
        assert_eq!(
            validate_quantum(-2).unwrap_err(),
            SimulationError::InvalidQuantum(-2)
        );
    }
}
