use std::{net::Ipv4Addr, str};

use tristate_opt::{Decode, Encode, Error, Nullable, NullableOmittable, Omittable, value};

/// An address that only knows its textual form.
#[derive(Clone, Debug, PartialEq)]
struct Addr(Ipv4Addr);

impl Encode for Addr {
    fn encode_text(&self) -> Option<Result<Vec<u8>, value::Error>> {
        Some(Ok(self.0.to_string().into_bytes()))
    }
}

impl Decode for Addr {
    fn decode_text(text: &[u8]) -> Option<Result<Self, value::Error>> {
        let parsed = str::from_utf8(text)
            .map_err(value::Error::from)
            .and_then(|s| s.parse().map(Addr).map_err(value::Error::custom));
        Some(parsed)
    }
}

/// A payload with no conversions at all.
struct Opaque;

impl Encode for Opaque {}

#[test]
fn tri_state_text() -> Result<(), Error> {
    let mut v = NullableOmittable::from_value(String::from("hi"));
    assert_eq!(v.to_text()?, b"1hi");

    v.clear_to_null();
    assert_eq!(v.to_text()?, b"0");

    v.clear_to_unset();
    assert!(v.to_text()?.is_empty());

    Ok(())
}

#[test]
fn tri_state_text_decoding() -> Result<(), Error> {
    assert!(NullableOmittable::<String>::from_text(b"")?.is_unset());
    assert!(NullableOmittable::<String>::from_text(b"0")?.is_null());
    assert_eq!(
        NullableOmittable::<String>::from_text(b"1hi")?,
        NullableOmittable::from_value(String::from("hi"))
    );
    assert_eq!(
        NullableOmittable::<String>::from_text(b"1")?,
        NullableOmittable::from_value(String::new())
    );
    assert!(matches!(
        NullableOmittable::<String>::from_text(b"xhi"),
        Err(Error::InvalidTagByte(b'x'))
    ));

    Ok(())
}

#[test]
fn tri_state_binary() -> Result<(), Error> {
    let mut v = NullableOmittable::from_value(String::from("hello"));
    assert_eq!(v.to_binary()?, b"\x01hello");

    v.clear_to_null();
    assert_eq!(v.to_binary()?, [0x00]);

    v.clear_to_unset();
    assert!(v.to_binary()?.is_empty());

    assert!(NullableOmittable::<String>::from_binary(&[0x00])?.is_null());
    assert!(NullableOmittable::<String>::from_binary(&[])?.is_unset());
    assert_eq!(
        NullableOmittable::<String>::from_binary(b"\x01hello")?,
        NullableOmittable::from_value(String::from("hello"))
    );
    assert!(matches!(
        NullableOmittable::<String>::from_binary(&[0x02]),
        Err(Error::InvalidTagByte(0x02))
    ));

    Ok(())
}

#[test]
fn text_capability_is_used() -> Result<(), Error> {
    let addr = Addr(Ipv4Addr::new(1, 1, 1, 1));

    let v = NullableOmittable::from_value(addr.clone());
    assert_eq!(v.to_text()?, b"11.1.1.1");
    assert_eq!(v.to_binary()?, b"\x011.1.1.1");

    assert_eq!(NullableOmittable::<Addr>::from_binary(b"\x011.1.1.1")?, v);
    assert_eq!(Nullable::<Addr>::from_text(b"1.1.1.1")?, Nullable::from_value(addr));

    Ok(())
}

#[test]
fn payload_parse_errors_surface() {
    assert!(matches!(
        NullableOmittable::<Addr>::from_text(b"1not an address"),
        Err(Error::Value(value::Error::Custom(..)))
    ));
    assert!(matches!(
        Omittable::<u8>::from_text(b"300"),
        Err(Error::Value(value::Error::ParseInt(..)))
    ));
}

#[test]
fn unsupported_payloads() {
    assert!(matches!(
        Nullable::from_value(Opaque).to_text(),
        Err(Error::Value(value::Error::UnsupportedTextEncoding(..)))
    ));
    assert!(matches!(
        NullableOmittable::from_value(Opaque).to_binary(),
        Err(Error::Value(value::Error::UnsupportedBinaryEncoding(..)))
    ));

    // Absent values never touch the payload conversion.
    assert!(Nullable::<Opaque>::null().to_text().is_ok());
}
