use super::coercible::{unparsable, unsupported, Coercible};
use super::indirect::indirect_to_self_describing;
use crate::common::{Value, HYPHENATED_UUID_LEN};
use crate::errors::{DocastError, DocastResult, ErrorKind};
use chrono::SecondsFormat;

impl Coercible for String {
    const TARGET: &'static str = "String";

    fn coerce(value: &Value) -> DocastResult<Self> {
        let value = indirect_to_self_describing(value);
        match value {
            Value::String(v) => Ok(v.clone()),
            Value::Bytes(v) => String::from_utf8(v.clone()).map_err(|err| {
                log::debug!("Byte sequence is not valid UTF-8: {}", err);
                DocastError::new_with_cause(
                    &format!("unable to cast {:?} of type bytes to String", value),
                    ErrorKind::EncodingError,
                    err.into(),
                )
            }),
            Value::I8(v) => Ok(v.to_string()),
            Value::I16(v) => Ok(v.to_string()),
            Value::I32(v) => Ok(v.to_string()),
            Value::I64(v) => Ok(v.to_string()),
            Value::ISize(v) => Ok(v.to_string()),
            Value::U8(v) => Ok(v.to_string()),
            Value::U16(v) => Ok(v.to_string()),
            Value::U32(v) => Ok(v.to_string()),
            Value::U64(v) => Ok(v.to_string()),
            Value::USize(v) => Ok(v.to_string()),
            Value::F32(v) => Ok(format_float(*v as f64, v.to_string())),
            Value::F64(v) => Ok(format_float(*v, v.to_string())),
            Value::Timestamp(v) => Ok(v.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Value::Displayable(v) => Ok(v.to_string()),
            Value::Error(v) => Ok(v.to_string()),
            _ => Err(unsupported(value, Self::TARGET)),
        }
    }
}

// float Display is already the shortest round-trip form without exponent,
// only the infinities need a sign
fn format_float(v: f64, shortest: String) -> String {
    if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        shortest
    }
}

/// Coerces `value` to a string and checks that it is a UUID in the
/// hyphenated 36 character form. The input string is returned unchanged.
pub fn try_uuid(value: &Value) -> DocastResult<String> {
    let text = String::coerce(value)?;
    if let Err(err) = uuid::Uuid::parse_str(&text) {
        return Err(unparsable(&text, "uuid", err));
    }

    if text.len() != HYPHENATED_UUID_LEN {
        log::debug!("UUID {:?} is not in hyphenated form", text);
        return Err(DocastError::new(
            &format!(
                "uuid {:?} must be in hyphenated form of {} characters",
                text, HYPHENATED_UUID_LEN
            ),
            ErrorKind::ValidationError,
        ));
    }
    Ok(text)
}
