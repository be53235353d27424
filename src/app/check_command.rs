use super::{app_helper, command::Command, common};
use anyhow::Result;
use asporacle::transcript::TranscriptParser;
use clap::{App, AppSettings, Arg, SubCommand};
use log::info;

const CMD_NAME: &str = "check";

const ARG_FORMAT: &str = "FORMAT";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks a transcript file parses and reports its outcome")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg("the transcript file to check"))
            .arg(
                Arg::with_name(ARG_FORMAT)
                    .long("format")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["native", "authored"])
                    .default_value("authored")
                    .help("the transcript format (native solver output or hand-authored)"),
            )
            .arg(app_helper::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &clap::ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let content = common::read_file_to_string(file)?;
        let result = match arg_matches.value_of(ARG_FORMAT).unwrap() {
            "native" => TranscriptParser::for_solver_output().parse_transcript(&content)?,
            "authored" => {
                TranscriptParser::for_authored_output().parse_enumeration(content.trim_end())?
            }
            _ => unreachable!(),
        };
        info!(
            "satisfiable: {}, models enumerated: {}",
            result.is_satisfiable(),
            result.n_models()
        );
        Ok(())
    }
}
