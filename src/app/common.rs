use anyhow::{Context, Result};
use asporacle::solver::{SolverConfig, StderrPolicy};
use clap::{Arg, ArgMatches};
use std::{fs, str::FromStr, time::Duration};

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_arg(help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help(help)
        .required(true)
}

pub(crate) const ARG_EXPECTED: &str = "EXPECTED";

pub(crate) fn expected_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_EXPECTED)
        .short("e")
        .long("expected")
        .empty_values(false)
        .multiple(false)
        .help("the file containing the hand-authored expected transcript")
        .required(true)
}

pub(crate) const ARG_SOLVER: &str = "SOLVER";
pub(crate) const ARG_RULES: &str = "RULES";
pub(crate) const ARG_TIMEOUT_MS: &str = "TIMEOUT_MS";
pub(crate) const ARG_ON_STDERR: &str = "ON_STDERR";

pub(crate) fn solver_config_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_SOLVER)
            .long("solver")
            .empty_values(false)
            .multiple(false)
            .default_value("clingo")
            .help("the answer-set solver program to invoke"),
        Arg::with_name(ARG_RULES)
            .long("rules")
            .empty_values(false)
            .multiple(true)
            .number_of_values(1)
            .help("a rule file handed to the solver before the scenario facts"),
        Arg::with_name(ARG_TIMEOUT_MS)
            .long("timeout-ms")
            .empty_values(false)
            .multiple(false)
            .default_value("1000")
            .help("the solver wall-clock bound, in milliseconds"),
        Arg::with_name(ARG_ON_STDERR)
            .long("on-stderr")
            .empty_values(false)
            .multiple(false)
            .possible_values(&["warn", "fail"])
            .default_value("warn")
            .help("the policy applied when the solver writes to its error stream"),
    ]
}

pub(crate) fn create_solver_config(arg_matches: &ArgMatches<'_>) -> Result<SolverConfig> {
    let mut config = SolverConfig::new(arg_matches.value_of(ARG_SOLVER).unwrap());
    if let Some(rule_files) = arg_matches.values_of(ARG_RULES) {
        for rule_file in rule_files {
            config = config.with_rule_file(rule_file);
        }
    }
    let timeout_ms = arg_matches
        .value_of(ARG_TIMEOUT_MS)
        .unwrap()
        .parse::<u64>()
        .context("while parsing the solver timeout")?;
    let stderr_policy = StderrPolicy::from_str(arg_matches.value_of(ARG_ON_STDERR).unwrap())
        .expect("policy names are constrained by clap");
    Ok(config
        .with_timeout(Duration::from_millis(timeout_ms))
        .with_stderr_policy(stderr_policy))
}

pub(crate) fn read_file_to_string(file_path: &str) -> Result<String> {
    fs::read_to_string(file_path).with_context(|| format!(r#"while reading file "{}""#, file_path))
}
