use std::path::PathBuf;

use clap::Args;
use serde::{Serialize, de::DeserializeOwned};
use tristate_opt::{Kind, Opt};

use super::{Command, dispatch};
use crate::{
    cli::{Flavor, Format, Payload},
    utils,
};

/// Subcommand for decoding a value from one of the formats.
#[derive(Debug, Args)]
pub struct Decode {
    /// The container flavor of the value.
    #[clap(value_enum)]
    flavor: Flavor,

    /// The format to decode from.
    #[clap(value_enum)]
    format: Format,

    /// The encoded input.
    ///
    /// Pass an empty string for empty input. Column input is a JSON
    /// scalar such as `null`, `5` or `"hi"`.
    input: String,

    /// Interprets the input as hex-encoded bytes.
    #[clap(long)]
    hex: bool,

    /// The payload type the value is decoded as.
    #[clap(short, long, value_enum, default_value_t)]
    payload: Payload,

    /// An optional file to write the JSON report to.
    ///
    /// Defaults to printing it to stdout.
    #[clap(short)]
    out: Option<PathBuf>,
}

/// What a decoded value turned out to be.
#[derive(Serialize)]
struct Report<'a, T> {
    flavor: &'static str,
    state: &'static str,
    value: Option<&'a T>,
}

impl Command for Decode {
    fn handle(self) -> eyre::Result<()> {
        let input = if self.hex {
            utils::decode_hex(&self.input)?
        } else {
            self.input.into_bytes()
        };

        log::debug!("Decoding {} value from {} bytes", self.flavor.name(), input.len());

        dispatch!(
            self.flavor,
            self.payload,
            decode(&input, self.format, self.out)
        )
    }
}

fn decode<T, K>(input: &[u8], format: Format, out: Option<PathBuf>) -> eyre::Result<()>
where
    T: tristate_opt::Decode + Serialize + DeserializeOwned,
    K: Kind,
{
    let opt: Opt<T, K> = match format {
        Format::Document => Opt::from_json(input)?,
        Format::Text => Opt::from_text(input)?,
        Format::Binary => Opt::from_binary(input)?,
        Format::Column => Opt::from_column(utils::primitive_from_json(input)?)?,
    };

    let report = Report {
        flavor: K::NAME,
        state: opt.state().as_str(),
        value: opt.get(),
    };
    utils::write_json_report(out, &report)
}
