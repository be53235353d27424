use super::{app_helper, command::Command, common};
use anyhow::{Context, Result};
use asporacle::oracle::ScenarioHarness;
use clap::{App, AppSettings, Arg, SubCommand};
use log::info;

const CMD_NAME: &str = "run";

const ARG_HORIZON: &str = "HORIZON";
const ARG_ANSWER_LIMIT: &str = "ANSWER_LIMIT";

pub(crate) struct RunCommand;

impl RunCommand {
    pub(crate) fn new() -> Self {
        RunCommand
    }
}

impl<'a> Command<'a> for RunCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Runs the solver on a scenario and validates its answer sets")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg("the file containing the scenario facts"))
            .arg(common::expected_arg())
            .args(&common::solver_config_args())
            .arg(
                Arg::with_name(ARG_HORIZON)
                    .long("horizon")
                    .empty_values(false)
                    .multiple(false)
                    .default_value("1")
                    .help("the maximum discrete time step the solver searches up to"),
            )
            .arg(
                Arg::with_name(ARG_ANSWER_LIMIT)
                    .long("answer-limit")
                    .empty_values(false)
                    .multiple(false)
                    .default_value("0")
                    .help("the maximum number of answer sets to enumerate (0 for all)"),
            )
            .arg(app_helper::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &clap::ArgMatches<'_>) -> Result<()> {
        let facts = common::read_file_to_string(arg_matches.value_of(common::ARG_INPUT).unwrap())?;
        let expected =
            common::read_file_to_string(arg_matches.value_of(common::ARG_EXPECTED).unwrap())?;
        let horizon_bound = arg_matches
            .value_of(ARG_HORIZON)
            .unwrap()
            .parse::<usize>()
            .context("while parsing the horizon bound")?;
        let answer_limit = arg_matches
            .value_of(ARG_ANSWER_LIMIT)
            .unwrap()
            .parse::<usize>()
            .context("while parsing the answer limit")?;
        let harness = ScenarioHarness::new(common::create_solver_config(arg_matches)?);
        harness.validate_scenario_with_limit(&facts, horizon_bound, answer_limit, expected.trim_end())?;
        info!("scenario validated successfully");
        Ok(())
    }
}
