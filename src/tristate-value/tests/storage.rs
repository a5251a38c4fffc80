use time::macros::datetime;
use tristate_value::*;

struct Bare;

impl Encode for Bare {}

struct Cents(u32);

impl Encode for Cents {
    fn storage_value(&self) -> Option<Result<Primitive, Error>> {
        Some(Ok(Primitive::Str(format!("{}.{:02}", self.0 / 100, self.0 % 100))))
    }

    // Never reached; the custom storage value has priority.
    fn encode_binary(&self) -> Option<Result<Vec<u8>, Error>> {
        Some(Ok(self.0.to_le_bytes().to_vec()))
    }
}

struct Ratio(f64);

impl Encode for Ratio {
    fn storage_value(&self) -> Option<Result<Primitive, Error>> {
        Some(Ok(Primitive::Float(self.0)))
    }
}

/// Refuses to store a fraction with a zero denominator.
struct Fraction(i64, i64);

impl Encode for Fraction {
    fn storage_value(&self) -> Option<Result<Primitive, Error>> {
        let res = match self.1 {
            0 => Err(Error::UnrepresentableCustomValue(std::any::type_name::<Self>())),
            d => Ok(Primitive::Float(self.0 as f64 / d as f64)),
        };
        Some(res)
    }
}

struct Both;

impl Encode for Both {
    fn encode_binary(&self) -> Option<Result<Vec<u8>, Error>> {
        Some(Ok(vec![0xB1]))
    }

    fn encode_text(&self) -> Option<Result<Vec<u8>, Error>> {
        Some(Ok(b"text".to_vec()))
    }
}

struct TextOnly;

impl Encode for TextOnly {
    fn encode_text(&self) -> Option<Result<Vec<u8>, Error>> {
        Some(Ok(b"text".to_vec()))
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Int(1)
    }
}

#[test]
fn integers_widen_to_i64() -> Result<(), Error> {
    assert_eq!(to_storage_value(&200u8)?, Primitive::Int(200));
    assert_eq!(to_storage_value(&-5i8)?, Primitive::Int(-5));
    assert_eq!(to_storage_value(&70_000u32)?, Primitive::Int(70_000));
    assert_eq!(to_storage_value(&(i64::MAX as u64))?, Primitive::Int(i64::MAX));

    Ok(())
}

#[test]
fn large_unsigned_values_overflow() {
    let value = 1u64 << 63;
    assert!(matches!(
        to_storage_value(&value),
        Err(Error::IntegerOverflow(v)) if v == value
    ));
    assert!(matches!(
        to_storage_value(&u64::MAX),
        Err(Error::IntegerOverflow(..))
    ));
}

#[test]
fn scalars_map_to_their_primitives() -> Result<(), Error> {
    assert_eq!(to_storage_value(&1.5f32)?, Primitive::Float(1.5));
    assert_eq!(to_storage_value(&true)?, Primitive::Bool(true));
    assert_eq!(to_storage_value("hi")?, Primitive::Str("hi".into()));
    assert_eq!(
        to_storage_value(&vec![0u8, 255])?,
        Primitive::Bytes(vec![0, 255])
    );

    let at = datetime!(2000-01-01 2:30 UTC);
    assert_eq!(to_storage_value(&at)?, Primitive::Timestamp(at));

    Ok(())
}

#[test]
fn bare_structs_are_unsupported() {
    assert!(matches!(
        to_storage_value(&Bare),
        Err(Error::UnsupportedStorageType(name)) if name.ends_with("Bare")
    ));
}

#[test]
fn custom_storage_value_wins() -> Result<(), Error> {
    assert_eq!(to_storage_value(&Cents(1234))?, Primitive::Str("12.34".into()));
    Ok(())
}

#[test]
fn custom_floats_are_returned_verbatim() -> Result<(), Error> {
    assert_eq!(to_storage_value(&Ratio(0.5))?, Primitive::Float(0.5));
    assert_eq!(
        to_storage_value(&Ratio(f64::INFINITY))?,
        Primitive::Float(f64::INFINITY)
    );

    // Custom and structural paths agree on non-finite floats.
    assert!(matches!(to_storage_value(&Ratio(f64::NAN))?, Primitive::Float(v) if v.is_nan()));
    assert!(matches!(to_storage_value(&f64::NAN)?, Primitive::Float(v) if v.is_nan()));

    Ok(())
}

#[test]
fn custom_storage_value_errors_propagate() -> Result<(), Error> {
    assert_eq!(to_storage_value(&Fraction(1, 4))?, Primitive::Float(0.25));
    assert!(matches!(
        to_storage_value(&Fraction(1, 0)),
        Err(Error::UnrepresentableCustomValue(name)) if name.ends_with("Fraction")
    ));
    Ok(())
}

#[test]
fn binary_beats_text_beats_shape() -> Result<(), Error> {
    assert_eq!(to_storage_value(&Both)?, Primitive::Bytes(vec![0xB1]));
    assert_eq!(to_storage_value(&TextOnly)?, Primitive::Bytes(b"text".to_vec()));
    Ok(())
}

#[test]
fn boxed_and_borrowed_payloads_delegate() -> Result<(), Error> {
    assert_eq!(to_storage_value(&Box::new(3u16))?, Primitive::Int(3));
    assert_eq!(to_storage_value(&&Cents(5))?, Primitive::Str("0.05".into()));
    Ok(())
}

#[test]
fn column_reads_assign_primitives() -> Result<(), Error> {
    assert_eq!(from_storage_value::<u8>(Primitive::Int(200))?, 200);
    assert_eq!(from_storage_value::<f32>(Primitive::Int(2))?, 2.0);
    assert_eq!(from_storage_value::<String>(Primitive::Str("hi".into()))?, "hi");

    let at = datetime!(2000-01-01 2:30 UTC);
    assert_eq!(
        from_storage_value::<OffsetDateTime>(Primitive::Str("2000-01-01T02:30:00Z".into()))?,
        at
    );
    assert!(matches!(
        from_storage_value::<OffsetDateTime>(Primitive::Int(1)),
        Err(Error::UnsupportedAssign { from: "int", .. })
    ));

    Ok(())
}
