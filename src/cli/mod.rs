//! Command-line interface: argument parsing, commands and terminal output.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
pub mod context;
pub mod exit_status;
pub mod glyphs;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = run::run(args)?;
    Ok(status.into())
}
