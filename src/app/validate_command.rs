use super::{app_helper, command::Command, common};
use anyhow::Result;
use asporacle::oracle::ValidationOracle;
use clap::{App, AppSettings, SubCommand};
use log::info;

const CMD_NAME: &str = "validate";

pub(crate) struct ValidateCommand;

impl ValidateCommand {
    pub(crate) fn new() -> Self {
        ValidateCommand
    }
}

impl<'a> Command<'a> for ValidateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Validates a saved solver transcript against an expected one")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg("the file containing the raw solver transcript"))
            .arg(common::expected_arg())
            .arg(app_helper::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &clap::ArgMatches<'_>) -> Result<()> {
        let actual = common::read_file_to_string(arg_matches.value_of(common::ARG_INPUT).unwrap())?;
        let expected =
            common::read_file_to_string(arg_matches.value_of(common::ARG_EXPECTED).unwrap())?;
        ValidationOracle::default().validate(&actual, expected.trim_end())?;
        info!("validation succeeded");
        Ok(())
    }
}
