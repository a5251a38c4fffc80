use std::{
    fs,
    io::{self, BufWriter, IsTerminal, Write},
    path::PathBuf,
};

use serde::Serialize;
use serde_json::Value;
use tristate_opt::{Kind, Opt, Primitive, State};

/// Builds a value of flavor `K` in the requested state.
///
/// Fails when the flavor cannot hold `state`, or when a set value has
/// no payload.
pub fn build<T, K: Kind>(state: State, payload: Option<T>) -> eyre::Result<Opt<T, K>> {
    match (state, payload) {
        (State::Set, Some(v)) => Ok(Opt::from_value(v)),
        (State::Set, None) => eyre::bail!("set value requires a payload"),

        // `from_option` picks null whenever the flavor allows it.
        (State::Null, _) if K::ALLOWS_NULL => Ok(Opt::from_option(None)),
        // The empty state is unset whenever the flavor allows it.
        (State::Unset, _) if K::ALLOWS_UNSET => Ok(Opt::default()),

        (state, _) => eyre::bail!("{} values cannot be {state}", K::NAME),
    }
}

/// Prints raw bytes to stdout, escaping everything that is not
/// printable ASCII.
pub fn print_bytes(bytes: &[u8]) -> eyre::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", bytes.escape_ascii())?;
    Ok(())
}

/// Decodes hex-encoded input into bytes, ignoring surrounding
/// whitespace.
pub fn decode_hex(input: &str) -> eyre::Result<Vec<u8>> {
    Ok(hex::decode(input.trim())?)
}

/// Parses a JSON scalar into a storage column primitive.
pub fn primitive_from_json(input: &[u8]) -> eyre::Result<Primitive> {
    let primitive = match serde_json::from_slice(input)? {
        Value::Null => Primitive::Null,
        Value::Bool(v) => Primitive::Bool(v),
        Value::Number(n) => match n.as_i64() {
            Some(v) => Primitive::Int(v),
            None => n
                .as_f64()
                .map(Primitive::Float)
                .ok_or_else(|| eyre::eyre!("number {n} does not fit a column"))?,
        },
        Value::String(v) => Primitive::Str(v),
        other => eyre::bail!("column input must be a JSON scalar, got {other}"),
    };

    Ok(primitive)
}

/// Writes `report` as JSON to the file at `out`, or to stdout.
///
/// Files and pipes receive compact JSON. An interactive terminal gets
/// the pretty-printed form followed by a newline.
pub fn write_json_report<T: Serialize>(out: Option<PathBuf>, report: &T) -> eyre::Result<()> {
    match out {
        Some(path) => {
            let mut writer = BufWriter::new(fs::File::create(&path)?);
            serde_json::to_writer(&mut writer, report)?;
            writer.flush()?;
            log::debug!("Wrote report to '{}'", path.display());
        }

        None => {
            let mut stdout = io::stdout().lock();
            if stdout.is_terminal() {
                serde_json::to_writer_pretty(&mut stdout, report)?;
                writeln!(stdout)?;
            } else {
                serde_json::to_writer(&mut stdout, report)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tristate_opt::{NullKind, OmitKind, OmitNullKind};

    use super::*;

    #[test]
    fn builds_allowed_states() {
        let v = build::<i64, OmitNullKind>(State::Unset, None).unwrap();
        assert_eq!(v.state(), State::Unset);
        let v = build::<i64, OmitNullKind>(State::Null, None).unwrap();
        assert_eq!(v.state(), State::Null);
        let v = build::<i64, NullKind>(State::Set, Some(3)).unwrap();
        assert_eq!(v.get(), Some(&3));
    }

    #[test]
    fn rejects_foreign_states() {
        assert!(build::<i64, NullKind>(State::Unset, None).is_err());
        assert!(build::<i64, OmitKind>(State::Null, None).is_err());
        assert!(build::<i64, OmitKind>(State::Set, None).is_err());
    }

    #[test]
    fn hex_input() {
        assert_eq!(decode_hex("0168690a").unwrap(), b"\x01hi\n");
        assert_eq!(decode_hex(" 00\n").unwrap(), [0x00]);
        assert!(decode_hex("").unwrap().is_empty());
        assert!(decode_hex("016").is_err());
        assert!(decode_hex("zz").is_err());
    }

    #[test]
    fn column_input() {
        assert_eq!(primitive_from_json(b"null").unwrap(), Primitive::Null);
        assert_eq!(primitive_from_json(b"5").unwrap(), Primitive::Int(5));
        assert_eq!(primitive_from_json(b"1.5").unwrap(), Primitive::Float(1.5));
        assert_eq!(
            primitive_from_json(br#""hi""#).unwrap(),
            Primitive::Str(String::from("hi"))
        );
        assert!(primitive_from_json(b"[1]").is_err());
    }
}
