use super::indirect::indirect;
use super::int_parser::{parse_int, parse_uint};
use crate::common::Value;
use crate::errors::{DocastError, DocastResult, ErrorKind};
use std::fmt::{Debug, Display};

/// A fixed type that a dynamically typed [Value] can be coerced into.
///
/// Every implementation looks through references first, then converts with
/// strict overflow detection:
///
/// - numbers are range checked against the destination before converting,
///   floats truncate toward zero when the destination is an integer
/// - strings are parsed with the destination's textual grammar
/// - anything else is an [ErrorKind::UnsupportedType] error
///
/// # Examples
///
/// ```rust
/// use docast::cast::Coercible;
/// use docast::common::Value;
///
/// assert_eq!(u16::coerce(&Value::from("0x1F")).unwrap(), 31);
/// assert_eq!(i8::coerce(&Value::from(-1.9)).unwrap(), -1);
/// assert!(u8::coerce(&Value::from(-1)).unwrap_err().is_overflow());
/// ```
pub trait Coercible: Sized {
    /// Name of the destination type as it appears in error messages.
    const TARGET: &'static str;

    /// Converts `value` into `Self`.
    fn coerce(value: &Value) -> DocastResult<Self>;
}

// numeric source widened to its accumulation type
#[derive(Debug, Clone, Copy)]
enum Widened {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl Widened {
    fn of(value: &Value) -> Option<Widened> {
        match *value {
            Value::I8(v) => Some(Widened::Signed(v as i64)),
            Value::I16(v) => Some(Widened::Signed(v as i64)),
            Value::I32(v) => Some(Widened::Signed(v as i64)),
            Value::I64(v) => Some(Widened::Signed(v)),
            Value::ISize(v) => Some(Widened::Signed(v as i64)),
            Value::U8(v) => Some(Widened::Unsigned(v as u64)),
            Value::U16(v) => Some(Widened::Unsigned(v as u64)),
            Value::U32(v) => Some(Widened::Unsigned(v as u64)),
            Value::U64(v) => Some(Widened::Unsigned(v)),
            Value::USize(v) => Some(Widened::Unsigned(v as u64)),
            Value::F32(v) => Some(Widened::Float(v as f64)),
            Value::F64(v) => Some(Widened::Float(v)),
            _ => None,
        }
    }
}

pub(crate) fn unsupported(value: &Value, target: &str) -> DocastError {
    log::debug!("No conversion from {} to {}", value.type_name(), target);
    DocastError::new(
        &format!(
            "unable to cast {:?} of type {} to {}",
            value,
            value.type_name(),
            target
        ),
        ErrorKind::UnsupportedType,
    )
}

pub(crate) fn unparsable(input: &str, target: &str, cause: impl Display) -> DocastError {
    log::debug!("Failed to parse {:?} as {}: {}", input, target, cause);
    DocastError::new(
        &format!("unable to cast {:?} to {}: {}", input, target, cause),
        ErrorKind::ParseError,
    )
}

pub(crate) fn overflowed(source: impl Debug, target: &str) -> DocastError {
    log::debug!("{:?} does not fit in {}", source, target);
    DocastError::overflow()
}

fn parse_signed<T: TryFrom<i64>>(text: &str, target: &str) -> DocastResult<T> {
    let parsed = parse_int(text).map_err(|err| unparsable(text, target, err))?;
    T::try_from(parsed).map_err(|_| overflowed(parsed, target))
}

fn parse_unsigned<T: TryFrom<u64>>(text: &str, target: &str, bits: u32) -> DocastResult<T> {
    let parsed = parse_uint(text, bits).map_err(|err| unparsable(text, target, err))?;
    T::try_from(parsed).map_err(|_| overflowed(parsed, target))
}

macro_rules! impl_integer_coercible {
    ($ty:ty, $target:literal, |$text:ident| $parse:expr) => {
        impl Coercible for $ty {
            const TARGET: &'static str = $target;

            fn coerce(value: &Value) -> DocastResult<Self> {
                let value = indirect(value);
                if let Value::String($text) = value {
                    return $parse;
                }

                match Widened::of(value) {
                    Some(Widened::Signed(v)) => {
                        <$ty>::try_from(v).map_err(|_| overflowed(v, $target))
                    }
                    Some(Widened::Unsigned(v)) => {
                        <$ty>::try_from(v).map_err(|_| overflowed(v, $target))
                    }
                    Some(Widened::Float(v)) => {
                        // NaN fails both comparisons. `MAX as f64` may round up to
                        // the next power of two, which `try_from` still rejects.
                        if !(v >= <$ty>::MIN as f64 && v <= <$ty>::MAX as f64) {
                            return Err(overflowed(v, $target));
                        }
                        <$ty>::try_from(v as i128).map_err(|_| overflowed(v, $target))
                    }
                    None => Err(unsupported(value, $target)),
                }
            }
        }
    };
}

impl_integer_coercible!(i8, "i8", |text| parse_signed(text, "i8"));
impl_integer_coercible!(i16, "i16", |text| parse_signed(text, "i16"));
impl_integer_coercible!(i32, "i32", |text| parse_signed(text, "i32"));
impl_integer_coercible!(i64, "i64", |text| parse_signed(text, "i64"));
impl_integer_coercible!(isize, "isize", |text| parse_signed(text, "isize"));
impl_integer_coercible!(u8, "u8", |text| parse_unsigned(text, "u8", u8::BITS));
impl_integer_coercible!(u16, "u16", |text| parse_unsigned(text, "u16", u16::BITS));
impl_integer_coercible!(u32, "u32", |text| parse_unsigned(text, "u32", u32::BITS));
impl_integer_coercible!(u64, "u64", |text| parse_unsigned(text, "u64", u64::BITS));

impl Coercible for f64 {
    const TARGET: &'static str = "f64";

    fn coerce(value: &Value) -> DocastResult<Self> {
        let value = indirect(value);
        match value {
            Value::String(text) => {
                let parsed = text
                    .parse::<f64>()
                    .map_err(|err| unparsable(text, Self::TARGET, err))?;
                if parsed.is_infinite() {
                    return Err(overflowed(text, Self::TARGET));
                }
                Ok(parsed)
            }
            _ => match Widened::of(value) {
                Some(Widened::Signed(v)) => Ok(v as f64),
                Some(Widened::Unsigned(v)) => Ok(v as f64),
                Some(Widened::Float(v)) => Ok(v),
                None => Err(unsupported(value, Self::TARGET)),
            },
        }
    }
}

impl Coercible for f32 {
    const TARGET: &'static str = "f32";

    fn coerce(value: &Value) -> DocastResult<Self> {
        let value = indirect(value);
        match value {
            Value::F32(v) => Ok(*v),
            Value::String(text) => {
                let parsed = text
                    .parse::<f64>()
                    .map_err(|err| unparsable(text, Self::TARGET, err))?;
                narrow_float(parsed)
            }
            _ => match Widened::of(value) {
                Some(Widened::Signed(v)) => Ok(v as f32),
                Some(Widened::Unsigned(v)) => Ok(v as f32),
                Some(Widened::Float(v)) => narrow_float(v),
                None => Err(unsupported(value, Self::TARGET)),
            },
        }
    }
}

fn narrow_float(v: f64) -> DocastResult<f32> {
    if v < f32::MIN as f64 || v > f32::MAX as f64 {
        Err(overflowed(v, f32::TARGET))
    } else {
        Ok(v as f32)
    }
}
