//! The error taxonomy shared by the transcript, solver and oracle components.

use crate::transcript::ValidationResult;
use std::time::Duration;
use thiserror::Error;

/// An error raised while validating a scenario.
///
/// Each variant identifies one failure mode of a validation run, so that
/// callers can tell a misbehaving solver ([Timeout](OracleError::Timeout),
/// [Process](OracleError::Process)) from output-format drift
/// ([Protocol](OracleError::Protocol)) from the expected, primary failure of
/// a test run ([Mismatch](OracleError::Mismatch)). None of them is retried.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The solver did not terminate within its wall-clock bound.
    #[error("solver exceeded its {}ms wall-clock bound", .0.as_millis())]
    Timeout(Duration),

    /// The transcript misses an expected marker or is structurally malformed.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The actual canonical result differs from the expected one.
    ///
    /// Both canonical structures are carried for diagnostic inspection.
    #[error("answer set mismatch\n  actual:   {actual}\n  expected: {expected}")]
    Mismatch {
        /// The canonical result derived from the solver's transcript.
        actual: Box<ValidationResult>,
        /// The canonical result derived from the hand-authored transcript.
        expected: Box<ValidationResult>,
    },

    /// The solver process could not be driven to completion.
    #[error("solver process failure: {0}")]
    Process(String),
}

impl From<std::io::Error> for OracleError {
    fn from(e: std::io::Error) -> Self {
        OracleError::Process(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::{AnswerSetModel, ValidationResult};

    #[test]
    fn test_timeout_display() {
        let e = OracleError::Timeout(Duration::from_secs(1));
        assert_eq!("solver exceeded its 1000ms wall-clock bound", e.to_string());
    }

    #[test]
    fn test_protocol_display() {
        let e = OracleError::Protocol("enumeration marker not found".to_string());
        assert_eq!("protocol error: enumeration marker not found", e.to_string());
    }

    #[test]
    fn test_mismatch_display_carries_both_sides() {
        let actual = ValidationResult::new(true, vec![AnswerSetModel::empty()]);
        let expected = ValidationResult::new(false, vec![]);
        let e = OracleError::Mismatch {
            actual: Box::new(actual),
            expected: Box::new(expected),
        };
        let msg = e.to_string();
        assert!(msg.contains("actual:   satisfiable: true, models: [{}]"));
        assert!(msg.contains("expected: satisfiable: false, models: []"));
    }

    #[test]
    fn test_io_error_maps_to_process() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such solver");
        assert!(matches!(OracleError::from(io), OracleError::Process(_)));
    }
}
