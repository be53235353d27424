use super::ValidationOracle;
use crate::errors::OracleError;
use crate::solver::{ClingoInvoker, SolverConfig};

/// The answer sets are enumerated exhaustively unless a limit is given.
const UNBOUNDED_ANSWER_LIMIT: usize = 0;

/// An end-to-end harness for scenario fixtures.
///
/// One call writes the scenario facts to a per-invocation scratch input,
/// runs the solver, and validates the resulting transcript against a
/// hand-authored expected outcome. This is the only assertion surface a
/// fixture author needs.
///
/// # Example
///
/// ```no_run
/// # use asporacle::oracle::ScenarioHarness;
/// # use asporacle::solver::SolverConfig;
/// let harness = ScenarioHarness::new(
///     SolverConfig::new("clingo")
///         .with_rule_file("scenario1.lp")
///         .with_rule_file("rules.lp"),
/// );
/// harness
///     .validate_scenario(
///         "init(object(robot,1),value(at,pair(2,4))).
///          init(object(robot,2),value(at,pair(2,4))).",
///         1,
///         "UNSATISFIABLE",
///     )
///     .unwrap();
/// ```
pub struct ScenarioHarness {
    invoker: ClingoInvoker,
    oracle: ValidationOracle,
}

impl ScenarioHarness {
    /// Builds a harness around the given solver configuration.
    pub fn new(config: SolverConfig) -> Self {
        ScenarioHarness {
            invoker: ClingoInvoker::new(config),
            oracle: ValidationOracle::default(),
        }
    }

    /// Returns the invoker driving the external solver.
    pub fn invoker(&self) -> &ClingoInvoker {
        &self.invoker
    }

    /// Validates a scenario, enumerating all of its answer sets.
    pub fn validate_scenario(
        &self,
        scenario_facts: &str,
        horizon_bound: usize,
        expected: &str,
    ) -> Result<(), OracleError> {
        self.validate_scenario_with_limit(
            scenario_facts,
            horizon_bound,
            UNBOUNDED_ANSWER_LIMIT,
            expected,
        )
    }

    /// Validates a scenario with an explicit answer-set enumeration limit.
    pub fn validate_scenario_with_limit(
        &self,
        scenario_facts: &str,
        horizon_bound: usize,
        answer_limit: usize,
        expected: &str,
    ) -> Result<(), OracleError> {
        let raw = self
            .invoker
            .invoke(scenario_facts, horizon_bound, answer_limit)?;
        self.oracle.validate(&raw, expected)
    }
}

#[cfg(all(test, target_family = "unix"))]
mod tests {
    use super::*;
    use crate::solver::StderrPolicy;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use std::time::Duration;

    fn fake_solver(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("fake-solver.sh");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&path, permissions).unwrap();
        path
    }

    const TWO_MODEL_BODY: &str = r"printf 'clingo version 5.4.0\r\nSolving...\r\nAnswer: 1\r\nmove(1,1,0,1)\r\nAnswer: 2\r\nmove(1,0,-1,1)\r\nSATISFIABLE\r\n\r\nModels       : 2\r\n'";

    #[test]
    fn test_validate_scenario_ok() {
        let dir = tempfile::tempdir().unwrap();
        let harness = ScenarioHarness::new(SolverConfig::new(fake_solver(&dir, TWO_MODEL_BODY)));
        // expected lists the models in the other order
        let expected = "Answer: 1\nmove(1,0,-1,1)\nAnswer: 2\nmove(1,1,0,1)\nSATISFIABLE";
        harness.validate_scenario("init.", 1, expected).unwrap();
    }

    #[test]
    fn test_validate_scenario_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let harness = ScenarioHarness::new(SolverConfig::new(fake_solver(&dir, TWO_MODEL_BODY)));
        let err = harness
            .validate_scenario("init.", 1, "UNSATISFIABLE")
            .unwrap_err();
        assert!(matches!(err, OracleError::Mismatch { .. }));
    }

    #[test]
    fn test_validate_scenario_surfaces_solver_failures() {
        let dir = tempfile::tempdir().unwrap();
        let body = format!("echo 'no such rule file' >&2\n{}", TWO_MODEL_BODY);
        let harness = ScenarioHarness::new(
            SolverConfig::new(fake_solver(&dir, &body))
                .with_stderr_policy(StderrPolicy::Fail)
                .with_timeout(Duration::from_secs(2)),
        );
        assert!(matches!(
            harness.validate_scenario("init.", 1, "UNSATISFIABLE"),
            Err(OracleError::Process(_))
        ));
    }
}
