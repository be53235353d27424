mod app_helper;
pub(crate) use app_helper::AppHelper;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod command;
pub(crate) use command::Command;

pub(crate) mod common;

mod run_command;
pub(crate) use run_command::RunCommand;

mod validate_command;
pub(crate) use validate_command::ValidateCommand;
