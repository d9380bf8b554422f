//! Coercion of dynamically typed [Value]s into fixed Rust types.
//!
//! Each `try_*` function resolves references, then converts with strict
//! overflow and parse failure detection. Numeric overflow of any width is
//! reported with the single [crate::errors::ErrorKind::Overflow] error.
//!
//! ```rust
//! use docast::cast::{try_int8, try_string, try_uint8};
//! use docast::common::Value;
//!
//! assert_eq!(try_uint8(&Value::from("255")).unwrap(), 255);
//! assert!(try_int8(&Value::from(200)).unwrap_err().is_overflow());
//! assert_eq!(try_string(&Value::from(123.5)).unwrap(), "123.5");
//! ```

mod coercible;
mod indirect;
mod int_parser;
mod temporal;
mod text;

pub use coercible::Coercible;
pub use temporal::{try_date, try_date_time};
pub use text::try_uuid;

use crate::common::Value;
use crate::errors::DocastResult;

#[inline]
pub fn try_uint8(value: &Value) -> DocastResult<u8> {
    u8::coerce(value)
}

#[inline]
pub fn try_uint16(value: &Value) -> DocastResult<u16> {
    u16::coerce(value)
}

#[inline]
pub fn try_uint32(value: &Value) -> DocastResult<u32> {
    u32::coerce(value)
}

#[inline]
pub fn try_uint64(value: &Value) -> DocastResult<u64> {
    u64::coerce(value)
}

#[inline]
pub fn try_int8(value: &Value) -> DocastResult<i8> {
    i8::coerce(value)
}

#[inline]
pub fn try_int16(value: &Value) -> DocastResult<i16> {
    i16::coerce(value)
}

#[inline]
pub fn try_int32(value: &Value) -> DocastResult<i32> {
    i32::coerce(value)
}

#[inline]
pub fn try_int64(value: &Value) -> DocastResult<i64> {
    i64::coerce(value)
}

#[inline]
pub fn try_float32(value: &Value) -> DocastResult<f32> {
    f32::coerce(value)
}

#[inline]
pub fn try_float64(value: &Value) -> DocastResult<f64> {
    f64::coerce(value)
}

/// Renders `value` as text. Self-describing values use their own string form.
#[inline]
pub fn try_string(value: &Value) -> DocastResult<String> {
    String::coerce(value)
}
