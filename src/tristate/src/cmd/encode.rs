use clap::Args;
use serde::Serialize;
use tristate_opt::{Kind, State, value};

use super::{Command, dispatch};
use crate::{
    cli::{Flavor, Format, Payload},
    utils,
};

/// Subcommand for encoding a value into one of the formats.
#[derive(Debug, Args)]
pub struct Encode {
    /// The container flavor of the value.
    #[clap(value_enum)]
    flavor: Flavor,

    /// The format to encode into.
    #[clap(value_enum)]
    format: Format,

    /// The payload of a set value, in its text form.
    ///
    /// When omitted, the value is in the empty state of its flavor
    /// unless one of the state flags says otherwise.
    value: Option<String>,

    /// Encodes an explicit null value.
    #[clap(long, conflicts_with_all = ["value", "unset"])]
    null: bool,

    /// Encodes an unset value.
    #[clap(long, conflicts_with = "value")]
    unset: bool,

    /// The payload type the value is parsed as.
    #[clap(short, long, value_enum, default_value_t)]
    payload: Payload,
}

impl Encode {
    fn state(&self) -> Option<State> {
        if self.null {
            Some(State::Null)
        } else if self.unset {
            Some(State::Unset)
        } else if self.value.is_some() {
            Some(State::Set)
        } else {
            None
        }
    }
}

impl Command for Encode {
    fn handle(self) -> eyre::Result<()> {
        let state = self.state();
        dispatch!(
            self.flavor,
            self.payload,
            encode(state, self.value, self.format)
        )
    }
}

fn encode<T, K>(state: Option<State>, value: Option<String>, format: Format) -> eyre::Result<()>
where
    T: tristate_opt::Encode + tristate_opt::Decode + Serialize,
    K: Kind,
{
    let payload = value
        .map(|v| value::decode_text::<T>(v.as_bytes()))
        .transpose()?;
    let opt = utils::build::<T, K>(state.unwrap_or(K::EMPTY), payload)?;

    log::debug!("Encoding {} {} value as {format:?}", opt.state(), K::NAME);

    match format {
        Format::Document => utils::print_bytes(&opt.to_json()?),
        Format::Text => utils::print_bytes(&opt.to_text()?),
        Format::Binary => utils::print_bytes(&opt.to_binary()?),
        Format::Column => utils::write_json_report(None, &opt.to_column()?),
    }
}
