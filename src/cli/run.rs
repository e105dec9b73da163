//! Dispatch a parsed command to its handler.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{check::check, edit, init::init, list::list},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Toggle(cmd)) => edit::toggle(cmd),
        Some(Command::Set(cmd)) => edit::set(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
