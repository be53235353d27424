use std::path::{Path, PathBuf};
use std::time::Duration;
use strum_macros::{Display, EnumString};

/// The wall-clock bound applied to solver invocations by default.
pub const DEFAULT_SOLVER_TIMEOUT: Duration = Duration::from_secs(1);

/// The policy applied when the solver writes to its error stream.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum StderrPolicy {
    /// Log the error stream as a warning and keep the transcript.
    Warn,
    /// Abort the invocation with a process failure.
    Fail,
}

/// The configuration of an external solver invocation.
///
/// The solver program and its rule files are explicit values supplied once at
/// construction; nothing is read from hard-coded locations. Rule files are
/// passed to the solver in the order they were added, before the scenario
/// facts file.
///
/// # Example
///
/// ```
/// # use asporacle::solver::{SolverConfig, StderrPolicy};
/// # use std::time::Duration;
/// let config = SolverConfig::new("clingo")
///     .with_rule_file("encodings/scenario1.lp")
///     .with_rule_file("encodings/rules.lp")
///     .with_timeout(Duration::from_secs(2))
///     .with_stderr_policy(StderrPolicy::Fail);
/// assert_eq!(2, config.rule_files().len());
/// ```
#[derive(Clone, Debug)]
pub struct SolverConfig {
    program: PathBuf,
    rule_files: Vec<PathBuf>,
    timeout: Duration,
    stderr_policy: StderrPolicy,
}

impl SolverConfig {
    /// Builds a configuration for the given solver program.
    ///
    /// The timeout defaults to [DEFAULT_SOLVER_TIMEOUT] and the error-stream
    /// policy to [StderrPolicy::Warn].
    pub fn new<P>(program: P) -> Self
    where
        P: Into<PathBuf>,
    {
        SolverConfig {
            program: program.into(),
            rule_files: Vec::new(),
            timeout: DEFAULT_SOLVER_TIMEOUT,
            stderr_policy: StderrPolicy::Warn,
        }
    }

    /// Appends a rule file to the solver's input set.
    pub fn with_rule_file<P>(mut self, path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.rule_files.push(path.into());
        self
    }

    /// Sets the wall-clock bound for one invocation.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the policy applied to a non-empty solver error stream.
    pub fn with_stderr_policy(mut self, policy: StderrPolicy) -> Self {
        self.stderr_policy = policy;
        self
    }

    /// Returns the solver program path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns the rule files, in invocation order.
    pub fn rule_files(&self) -> &[PathBuf] {
        &self.rule_files
    }

    /// Returns the wall-clock bound for one invocation.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the policy applied to a non-empty solver error stream.
    pub fn stderr_policy(&self) -> StderrPolicy {
        self.stderr_policy
    }
}
