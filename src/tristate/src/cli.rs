use clap::{Parser, Subcommand, ValueEnum};
use tristate_opt::{Kind, NullKind, OmitKind, OmitNullKind};

use crate::cmd::*;

mod args;

/// The CLI interface for the tristate application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: TristateCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by tristate.
#[derive(Debug, Subcommand)]
pub enum TristateCommand {
    Encode(encode::Encode),
    Decode(decode::Decode),
}

impl Command for TristateCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Encode(encode) => encode.handle(),
            Self::Decode(decode) => decode.handle(),
        }
    }
}

/// The container flavor to work with.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Flavor {
    /// Either null or set.
    Nullable,
    /// Either unset or set.
    Omittable,
    /// Unset, null or set.
    NullableOmittable,
}

impl Flavor {
    /// Gets the name of the flavor as its [`Kind`] reports it.
    pub fn name(self) -> &'static str {
        match self {
            Self::Nullable => NullKind::NAME,
            Self::Omittable => OmitKind::NAME,
            Self::NullableOmittable => OmitNullKind::NAME,
        }
    }
}

/// The boundary a value is written to or read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// A JSON document.
    Document,
    /// The text encoding.
    Text,
    /// The binary encoding.
    Binary,
    /// A storage column primitive, given and printed as JSON.
    Column,
}

/// The payload type of the value.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum Payload {
    /// A UTF-8 string.
    #[default]
    String,
    /// A signed 64-bit integer.
    Int,
    /// A 64-bit float.
    Float,
    /// A boolean.
    Bool,
}
