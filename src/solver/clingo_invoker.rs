use super::{SolverConfig, StderrPolicy};
use crate::errors::OracleError;
use log::{debug, info, warn};
use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// An invoker for clingo-style answer-set solvers.
///
/// The solver is executed as a system command following the positional
/// contract `<rule files...> <facts file> <answer limit> -c maxstep=<bound>`,
/// where the facts file is a fresh temporary file holding the scenario facts
/// of this invocation. Both output streams are captured; the invocation is
/// bounded by the wall-clock timeout of the [SolverConfig].
///
/// # Example
///
/// ```no_run
/// # use asporacle::solver::{ClingoInvoker, SolverConfig};
/// let invoker = ClingoInvoker::new(
///     SolverConfig::new("clingo")
///         .with_rule_file("scenario1.lp")
///         .with_rule_file("rules.lp"),
/// );
/// let raw = invoker
///     .invoke("init(object(robot,1),value(at,pair(2,2))).", 1, 0)
///     .unwrap();
/// assert!(raw.contains("Solving..."));
/// ```
pub struct ClingoInvoker {
    config: SolverConfig,
}

impl ClingoInvoker {
    /// Builds a new invoker from an explicit solver configuration.
    pub fn new(config: SolverConfig) -> Self {
        ClingoInvoker { config }
    }

    /// Returns the configuration of this invoker.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns `true` iff the configured solver program can be spawned.
    ///
    /// Probes the program with `--version`; only a spawn failure (typically a
    /// missing executable) makes the solver unavailable.
    pub fn is_available(&self) -> bool {
        Command::new(self.config.program())
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    /// Runs the solver on the given scenario facts and returns its raw transcript.
    ///
    /// The `horizon_bound` is bound to the `maxstep` constant of the rule
    /// encoding; `answer_limit` caps the number of enumerated answer sets
    /// (0 enumerates all of them).
    ///
    /// The call blocks until the solver terminates or the configured timeout
    /// elapses; on expiry the solver is killed and [OracleError::Timeout] is
    /// raised. A non-empty error stream is handled according to the
    /// configured [StderrPolicy]. The exit status is logged but not
    /// inspected, as clingo-style solvers report their verdict through it.
    pub fn invoke(
        &self,
        scenario_facts: &str,
        horizon_bound: usize,
        answer_limit: usize,
    ) -> Result<String, OracleError> {
        let mut facts_file = tempfile::Builder::new()
            .prefix("scenario-")
            .suffix(".lp")
            .tempfile()?;
        facts_file.write_all(scenario_facts.as_bytes())?;
        facts_file.flush()?;
        let mut command = Command::new(self.config.program());
        command
            .args(self.config.rule_files())
            .arg(facts_file.path())
            .arg(answer_limit.to_string())
            .arg("-c")
            .arg(format!("maxstep={}", horizon_bound))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        info!(
            "launching solver {:?} with horizon bound {} and answer limit {}",
            self.config.program(),
            horizon_bound,
            answer_limit
        );
        let mut child = command.spawn()?;
        let stdout_reader = spawn_stream_reader(child.stdout.take());
        let stderr_reader = spawn_stream_reader(child.stderr.take());
        match wait_with_deadline(&mut child, self.config.timeout())? {
            Some(status) => debug!("solver exited with status {}", status),
            None => {
                child.kill().ok();
                child.wait().ok();
                return Err(OracleError::Timeout(self.config.timeout()));
            }
        }
        let stdout = join_stream_reader(stdout_reader)?;
        let stderr = join_stream_reader(stderr_reader)?;
        if !stderr.trim().is_empty() {
            match self.config.stderr_policy() {
                StderrPolicy::Warn => warn!("solver error stream: {}", stderr.trim()),
                StderrPolicy::Fail => {
                    return Err(OracleError::Process(format!(
                        "solver wrote to its error stream: {}",
                        stderr.trim()
                    )))
                }
            }
        }
        Ok(stdout)
    }
}

fn spawn_stream_reader<R>(stream: Option<R>) -> JoinHandle<std::io::Result<String>>
where
    R: Read + Send + 'static,
{
    let mut stream = stream.expect("stream is piped at spawn time");
    thread::spawn(move || {
        let mut buffer = String::new();
        stream.read_to_string(&mut buffer)?;
        Ok(buffer)
    })
}

fn join_stream_reader(handle: JoinHandle<std::io::Result<String>>) -> Result<String, OracleError> {
    handle
        .join()
        .map_err(|_| OracleError::Process("solver stream reader panicked".to_string()))?
        .map_err(OracleError::from)
}

fn wait_with_deadline(child: &mut Child, timeout: Duration) -> std::io::Result<Option<ExitStatus>> {
    let start = Instant::now();
    loop {
        match child.try_wait()? {
            Some(status) => return Ok(Some(status)),
            None => {
                if start.elapsed() >= timeout {
                    return Ok(None);
                }
                thread::sleep(WAIT_POLL_INTERVAL);
            }
        }
    }
}
