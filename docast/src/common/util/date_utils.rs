use crate::common::{DATE_FORMAT, DATE_LAYOUT, DATE_TIME_FORMAT, DATE_TIME_LAYOUT};
use crate::errors::{DocastError, DocastResult, ErrorKind};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// Checks `input` against a textual layout where `d` matches a single ASCII
/// digit and every other character must match itself.
#[inline]
pub(crate) fn matches_layout(input: &str, layout: &str) -> bool {
    input.len() == layout.len()
        && input
            .bytes()
            .zip(layout.bytes())
            .all(|(c, l)| if l == b'd' { c.is_ascii_digit() } else { c == l })
}

/// Parses a strict `YYYY-MM-DD` date at midnight UTC.
pub(crate) fn parse_date(input: &str) -> DocastResult<DateTime<FixedOffset>> {
    if !matches_layout(input, DATE_LAYOUT) {
        return Err(layout_mismatch(input, "YYYY-MM-DD"));
    }
    let date = NaiveDate::parse_from_str(input, DATE_FORMAT)?;
    Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}

/// Parses a strict `YYYY-MM-DDTHH:MM:SS` date time in UTC.
pub(crate) fn parse_date_time(input: &str) -> DocastResult<DateTime<FixedOffset>> {
    if !matches_layout(input, DATE_TIME_LAYOUT) {
        return Err(layout_mismatch(input, "YYYY-MM-DDTHH:MM:SS"));
    }
    let date_time = NaiveDateTime::parse_from_str(input, DATE_TIME_FORMAT)?;
    Ok(date_time.and_utc().fixed_offset())
}

/// Parses `input` with a chrono format string.
///
/// Formats carrying an offset keep it. Formats without one are read as UTC,
/// and a date-only format yields midnight.
pub(crate) fn parse_with_format(input: &str, format: &str) -> DocastResult<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_str(input, format) {
        return Ok(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
        return Ok(parsed.and_utc().fixed_offset());
    }
    let date = NaiveDate::parse_from_str(input, format)?;
    Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}

fn layout_mismatch(input: &str, layout: &str) -> DocastError {
    DocastError::new(
        &format!("cannot parse {:?} as {}", input, layout),
        ErrorKind::ParseError,
    )
}
