use super::coercible::unsupported;
use super::indirect::indirect;
use crate::common::util::{parse_date, parse_date_time};
use crate::common::Value;
use crate::errors::DocastResult;
use chrono::{DateTime, FixedOffset};

/// Coerces `value` to a date.
///
/// A timestamp is returned as is. A string must be exactly `YYYY-MM-DD` and
/// resolves to midnight UTC.
pub fn try_date(value: &Value) -> DocastResult<DateTime<FixedOffset>> {
    let value = indirect(value);
    match value {
        Value::Timestamp(v) => Ok(*v),
        Value::String(v) => parse_date(v),
        _ => Err(unsupported(value, "date")),
    }
}

/// Coerces `value` to a date time.
///
/// A timestamp is returned as is. A string must be exactly
/// `YYYY-MM-DDTHH:MM:SS` and is read as UTC.
pub fn try_date_time(value: &Value) -> DocastResult<DateTime<FixedOffset>> {
    let value = indirect(value);
    match value {
        Value::Timestamp(v) => Ok(*v),
        Value::String(v) => parse_date_time(v),
        _ => Err(unsupported(value, "date time")),
    }
}
