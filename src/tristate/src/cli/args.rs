use clap::{ArgAction, Args};

/// Logging flags shared by every subcommand.
#[derive(Clone, Copy, Debug, Args)]
pub struct Verbosity {
    /// Logs which conversions a value goes through.
    ///
    /// `-v` shows rejected inputs and chosen formats, `-vv` also
    /// shows every capability fallback.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only logs warnings and errors.
    #[clap(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Verbosity {
    /// Installs the terminal logger at the selected level.
    pub fn setup(self) -> eyre::Result<()> {
        simple_logger::init_with_level(self.log_level())?;
        Ok(())
    }

    fn log_level(self) -> log::Level {
        match (self.quiet, self.verbose) {
            (true, _) => log::Level::Warn,
            (false, 0) => log::Level::Info,
            (false, 1) => log::Level::Debug,
            (false, _) => log::Level::Trace,
        }
    }
}
