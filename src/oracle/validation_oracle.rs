use crate::errors::OracleError;
use crate::transcript::{canonicalize_result, TranscriptParser, ValidationResult};

/// The equivalence-checking oracle.
///
/// The oracle parses the solver's raw transcript and the hand-authored
/// expected transcript with their respective line separators, canonicalizes
/// both results, and asserts structural equality. Since both sides go through
/// the same pipeline, actual and expected are always compared in the same
/// normal form.
///
/// # Example
///
/// ```
/// # use asporacle::oracle::ValidationOracle;
/// let oracle = ValidationOracle::default();
/// let actual = "Solving...\r\nAnswer: 1\r\nb a\r\nSATISFIABLE\r\n\r\nModels       : 1\r\n";
/// assert!(oracle.validate(actual, "Answer: 1\na b\nSATISFIABLE").is_ok());
/// ```
pub struct ValidationOracle {
    solver_parser: TranscriptParser,
    authored_parser: TranscriptParser,
}

impl Default for ValidationOracle {
    fn default() -> Self {
        ValidationOracle {
            solver_parser: TranscriptParser::for_solver_output(),
            authored_parser: TranscriptParser::for_authored_output(),
        }
    }
}

impl ValidationOracle {
    /// Validates a raw solver transcript against a hand-authored expected one.
    ///
    /// `actual_raw` is a full solver transcript (markers included);
    /// `expected` is a bare enumeration region as written in test fixtures.
    /// On mismatch, the returned [OracleError::Mismatch] carries both
    /// canonical structures for diagnostic inspection.
    pub fn validate(&self, actual_raw: &str, expected: &str) -> Result<(), OracleError> {
        let actual = self.solver_parser.parse_transcript(actual_raw)?;
        let expected = self.authored_parser.parse_enumeration(expected)?;
        self.check(actual, expected)
    }

    /// Canonicalizes and compares two already-parsed results.
    pub fn check(
        &self,
        actual: ValidationResult,
        expected: ValidationResult,
    ) -> Result<(), OracleError> {
        let actual = canonicalize_result(actual);
        let expected = canonicalize_result(expected);
        if actual == expected {
            Ok(())
        } else {
            Err(OracleError::Mismatch {
                actual: Box::new(actual),
                expected: Box::new(expected),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver_transcript(enumeration: &str) -> String {
        format!(
            "clingo version 5.4.0\r\nReading from scenario1.lp ...\r\nSolving...\r\n{}\r\n\r\nModels       : 0\r\nTime         : 0.002s\r\n",
            enumeration
        )
    }

    #[test]
    fn test_validate_unsatisfiable() {
        let oracle = ValidationOracle::default();
        let actual = solver_transcript("UNSATISFIABLE");
        assert!(oracle.validate(&actual, "UNSATISFIABLE").is_ok());
    }

    #[test]
    fn test_validate_empty_model() {
        let oracle = ValidationOracle::default();
        let actual = solver_transcript("Answer: 1\r\n\r\nSATISFIABLE");
        assert!(oracle.validate(&actual, "Answer: 1\n\nSATISFIABLE").is_ok());
    }

    #[test]
    fn test_validate_is_invariant_to_model_order() {
        let oracle = ValidationOracle::default();
        let actual = solver_transcript(
            "Answer: 1\r\nmove(1,0,-1,1)\r\nAnswer: 2\r\nmove(1,1,0,1)\r\nSATISFIABLE",
        );
        let expected = "Answer: 1\nmove(1,1,0,1)\nAnswer: 2\nmove(1,0,-1,1)\nSATISFIABLE";
        assert!(oracle.validate(&actual, expected).is_ok());
    }

    #[test]
    fn test_validate_is_invariant_to_atom_order() {
        let oracle = ValidationOracle::default();
        let actual = solver_transcript("Answer: 1\r\nrobot(1,2,2,1) robot(1,2,2,0)\r\nSATISFIABLE");
        let expected = "Answer: 1\nrobot(1,2,2,0) robot(1,2,2,1)\nSATISFIABLE";
        assert!(oracle.validate(&actual, expected).is_ok());
    }

    #[test]
    fn test_validate_mismatch_carries_both_canonical_structures() {
        let oracle = ValidationOracle::default();
        let actual = solver_transcript("Answer: 1\r\nb a\r\nSATISFIABLE");
        let err = oracle.validate(&actual, "UNSATISFIABLE").unwrap_err();
        match err {
            OracleError::Mismatch { actual, expected } => {
                assert!(actual.is_satisfiable());
                assert_eq!(1, actual.n_models());
                // the carried structure is canonical
                assert_eq!(
                    vec!["a".to_string(), "b".to_string()],
                    actual.models()[0].atoms().to_vec()
                );
                assert!(!expected.is_satisfiable());
                assert_eq!(0, expected.n_models());
            }
            e => panic!("expected a mismatch, got {}", e),
        }
    }

    #[test]
    fn test_validate_detects_differing_verdicts_with_same_models() {
        let oracle = ValidationOracle::default();
        let actual = solver_transcript("SATISFIABLE");
        assert!(oracle.validate(&actual, "UNSATISFIABLE").is_err());
    }

    #[test]
    fn test_validate_detects_missing_model() {
        let oracle = ValidationOracle::default();
        let actual = solver_transcript("Answer: 1\r\na\r\nSATISFIABLE");
        let expected = "Answer: 1\na\nAnswer: 2\nb\nSATISFIABLE";
        assert!(oracle.validate(&actual, expected).is_err());
    }

    #[test]
    fn test_validate_propagates_protocol_errors() {
        let oracle = ValidationOracle::default();
        assert!(matches!(
            oracle.validate("garbage with no markers", "UNSATISFIABLE"),
            Err(OracleError::Protocol(_))
        ));
    }

    #[test]
    fn test_check_on_parsed_results() {
        let oracle = ValidationOracle::default();
        let parser = TranscriptParser::for_authored_output();
        let r0 = parser
            .parse_enumeration("Answer: 1\nb a\nSATISFIABLE")
            .unwrap();
        let r1 = parser
            .parse_enumeration("Answer: 1\na b\nSATISFIABLE")
            .unwrap();
        assert!(oracle.check(r0, r1).is_ok());
    }
}
