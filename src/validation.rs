//! Input validation for simulation runs.
//!
//! Checks a process set before it enters the simulator. Detects:
//! - Empty input
//! - Negative arrival, duration or priority
//! - Duplicate process IDs
//! - Sets whose clock horizon does not fit in an `i64`
//!
//! Every record must pass; a single malformed record rejects the whole set.

use std::collections::HashSet;
use std::fmt;

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
    /// The process list is empty.
    EmptyInput,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has a negative burst.
    NegativeDuration,
    /// A process has a negative priority.
    NegativePriority,
    /// Two processes share the same ID.
    DuplicateId,
    /// Round Robin quantum is zero or negative.
    InvalidQuantum,
    /// Latest arrival plus total duration overflows the clock.
    ClockOverflow,
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

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. The list is non-empty
/// 2. Every process has `arrival >= 0`
/// 3. Every process has `duration >= 0`
/// 4. Every process has `priority >= 0`
/// 5. No duplicate process IDs
/// 6. The latest arrival plus the total duration fits in an `i64`, which
///    bounds every clock, wait and turnaround value of a run
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Process list is empty",
        )]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut latest_arrival: i64 = 0;
    let mut total_duration: Option<i64> = Some(0);

    for p in processes {
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.id, p.arrival),
            ));
        }
        if p.duration < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!("Process '{}' has negative duration {}", p.id, p.duration),
            ));
        }
        if p.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!("Process '{}' has negative priority {}", p.id, p.priority),
            ));
        }
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        latest_arrival = latest_arrival.max(p.arrival);
        total_duration = total_duration.and_then(|total| total.checked_add(p.duration.max(0)));
    }

    if total_duration
        .and_then(|total| latest_arrival.checked_add(total))
        .is_none()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::ClockOverflow,
            format!("Latest arrival {latest_arrival} plus total duration overflows the clock"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be positive, got {quantum}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P0", 0, 5, 1),
            Process::new("P1", 1, 3, 2),
            Process::new("P2", 2, 1, 3),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_zero_fields_are_valid() {
        let processes = vec![Process::new("P0", 0, 0, 0)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_single_bad_record_rejects_set() {
        let mut processes = sample_processes();
        processes.push(Process::new("bad", -1, 2, 0));

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
        assert!(errors[0].message.contains("bad"));
    }

    #[test]
    fn test_negative_duration_and_priority() {
        let processes = vec![Process::new("P0", 0, -3, -1)];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeDuration));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativePriority));
    }

    #[test]
    fn test_all_negative_rejected() {
        let processes = vec![Process::new("P0", -1, -1, -1), Process::new("P1", -2, -2, -2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P0", 0, 1, 0), Process::new("P0", 3, 2, 0)];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_clock_overflow() {
        let processes = vec![Process::new("A", i64::MAX - 1, 5, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ClockOverflow);

        // Durations alone can overflow.
        let half = i64::MAX / 2 + 1;
        let processes = vec![Process::new("A", 0, half, 0), Process::new("B", 0, half, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ClockOverflow);

        // Exactly reaching i64::MAX is fine.
        let processes = vec![Process::new("A", i64::MAX - 5, 5, 0)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(1).is_ok());
        assert_eq!(
            validate_quantum(0).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
        assert!(validate_quantum(-4).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = validate_quantum(0).unwrap_err();
        assert_eq!(err.to_string(), "Quantum must be positive, got 0");
    }
}
