//! Inspects how tri-state optional values look on every boundary they
//! are written to.

use clap::Parser;

mod cli;
use cli::Cli;

mod cmd;
use cmd::Command;

mod utils;

fn main() -> eyre::Result<()> {
    let Cli { command, verbosity } = Cli::parse();

    verbosity.setup()?;
    log::debug!("Running {command:?}");

    command.handle()
}
