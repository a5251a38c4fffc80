use crate::{Error, Kind, Opt, State};

/// The pair of tag bytes a tagged encoding uses.
#[derive(Clone, Copy)]
pub(super) struct Tags {
    pub null: u8,
    pub set: u8,
}

/// Writes `value` with `payload` encoding the set case.
///
/// Absent values become empty output, except null in tagged flavors
/// which becomes the single null tag.
pub(super) fn encode<T, K, F>(value: &Opt<T, K>, tags: Tags, payload: F) -> Result<Vec<u8>, Error>
where
    K: Kind,
    F: FnOnce(&T) -> Result<Vec<u8>, tristate_value::Error>,
{
    let Some(v) = value.get() else {
        return Ok(match value.state() {
            State::Null if K::TAGGED => vec![tags.null],
            _ => Vec::new(),
        });
    };

    let body = payload(v)?;
    if !K::TAGGED {
        return Ok(body);
    }

    let mut out = Vec::with_capacity(body.len() + 1);
    out.push(tags.set);
    out.extend_from_slice(&body);
    Ok(out)
}

/// Reads a value written by [`encode`].
pub(super) fn decode<T, K, F>(input: &[u8], tags: Tags, payload: F) -> Result<Opt<T, K>, Error>
where
    K: Kind,
    F: FnOnce(&[u8]) -> Result<T, tristate_value::Error>,
{
    let Some((&tag, rest)) = input.split_first() else {
        return Ok(Opt::absent(K::EMPTY));
    };

    if !K::TAGGED {
        return Ok(Opt::from_value(payload(input)?));
    }

    if tag == tags.null {
        Ok(Opt::absent(State::Null))
    } else if tag == tags.set {
        Ok(Opt::from_value(payload(rest)?))
    } else {
        log::debug!("Rejected {} input with tag byte {tag:#04x}", K::NAME);
        Err(Error::InvalidTagByte(tag))
    }
}
