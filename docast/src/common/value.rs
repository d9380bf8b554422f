use crate::collection::Document;
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// A value that knows how to render itself as a string.
pub type SharedDisplay = Arc<dyn Display + Send + Sync>;

/// A value that represents an error.
pub type SharedError = Arc<dyn std::error::Error + Send + Sync>;

/// Compare two floats for equality with proper NaN handling.
#[inline]
fn num_eq_float(a: f64, b: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        true
    } else {
        a == b
    }
}

/// Represents a dynamically typed value held by a [Document] or handed to the
/// coercion functions in [crate::cast].
///
/// The variant set is closed: every source category a coercion can see is
/// listed here, so each conversion is an exhaustive `match`.
///
/// # Variants
/// - Null: absence of a value
/// - Bool: boolean true/false
/// - I8-I64, ISize: signed integers, ISize is the platform integer
/// - U8-U64, USize: unsigned integers
/// - F32/F64: floating point numbers
/// - String: text
/// - Bytes: raw byte sequence
/// - Timestamp: a point in time with its UTC offset
/// - Document: nested document
/// - Map: raw string keyed mapping, treated like a document when traversed
/// - Array: ordered list of values, always a leaf when flattening
/// - Ref: reference to another value, `Ref(None)` is a null reference
/// - Displayable: value with its own string representation
/// - Error: value that represents an error
///
/// # Usage
/// ```rust
/// use docast::common::Value;
///
/// let v1: Value = 42.into();
/// let v2 = Value::from("hello");
/// let v3 = Value::reference(Value::from(1.5));
/// assert!(v1.is_integer());
/// assert_eq!(v2.as_str(), Some("hello"));
/// assert_eq!(v3.type_name(), "reference");
/// ```
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    /// Platform sized signed integer, the target of `*_as_int` accessors.
    ISize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    USize(usize),
    F32(f32),
    F64(f64),
    String(String),
    /// Raw bytes. Serialized as standard base64 text.
    Bytes(Vec<u8>),
    /// A point in time with its UTC offset.
    Timestamp(DateTime<FixedOffset>),
    Document(Document),
    /// An untyped mapping. Traversed and flattened like a [Value::Document].
    Map(BTreeMap<String, Value>),
    /// Always a leaf when flattening.
    Array(Vec<Value>),
    /// Indirection to another value. `Ref(None)` is a null reference and
    /// resolves to [Value::Null] during coercion.
    Ref(Option<Box<Value>>),
    /// A value that renders itself through [Display].
    Displayable(SharedDisplay),
    Error(SharedError),
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(v) => write!(f, "Bool({})", v),
            Value::I8(v) => write!(f, "I8({})", v),
            Value::I16(v) => write!(f, "I16({})", v),
            Value::I32(v) => write!(f, "I32({})", v),
            Value::I64(v) => write!(f, "I64({})", v),
            Value::ISize(v) => write!(f, "ISize({})", v),
            Value::U8(v) => write!(f, "U8({})", v),
            Value::U16(v) => write!(f, "U16({})", v),
            Value::U32(v) => write!(f, "U32({})", v),
            Value::U64(v) => write!(f, "U64({})", v),
            Value::USize(v) => write!(f, "USize({})", v),
            Value::F32(v) => write!(f, "F32({:?})", v),
            Value::F64(v) => write!(f, "F64({:?})", v),
            Value::String(v) => write!(f, "String({:?})", v),
            Value::Bytes(v) => write!(f, "Bytes({:?})", v),
            Value::Timestamp(v) => write!(f, "Timestamp({})", v.to_rfc3339()),
            Value::Document(v) => write!(f, "Document({:?})", v),
            Value::Map(v) => write!(f, "Map({:?})", v),
            Value::Array(v) => write!(f, "Array({:?})", v),
            Value::Ref(Some(v)) => write!(f, "Ref({:?})", v),
            Value::Ref(None) => write!(f, "Ref(nil)"),
            Value::Displayable(v) => write!(f, "Displayable({:?})", v.to_string()),
            Value::Error(v) => write!(f, "Error({:?})", v.to_string()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.as_integer(), other.as_integer()) {
            return a == b;
        }

        if self.is_decimal() && other.is_decimal() {
            if let (Some(a), Some(b)) = (self.as_decimal(), other.as_decimal()) {
                return num_eq_float(a, b);
            }
        }

        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Document(a), Value::Document(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Ref(a), Value::Ref(b)) => a == b,
            (Value::Displayable(a), Value::Displayable(b)) => Arc::ptr_eq(a, b),
            (Value::Error(a), Value::Error(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Value {
    /// Creates a new [Value] from the given value that implements [`Into<Value>`].
    pub fn from<T: Into<Value>>(value: T) -> Value {
        value.into()
    }

    /// Creates a new [Value] from an [Option]. [None] becomes [Value::Null].
    pub fn from_option<T: Into<Value>>(value: Option<T>) -> Value {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }

    /// Creates a [Value::Array] from a vector of convertible values.
    pub fn from_vec<T: Into<Value>>(values: Vec<T>) -> Value {
        Value::Array(values.into_iter().map(Into::into).collect())
    }

    /// Wraps a value behind a reference.
    ///
    /// Coercions look through any number of references before converting.
    ///
    /// ```rust
    /// use docast::cast::try_int64;
    /// use docast::common::Value;
    ///
    /// let nested = Value::reference(Value::reference(Value::from(7i32)));
    /// assert_eq!(try_int64(&nested).unwrap(), 7);
    /// ```
    pub fn reference<T: Into<Value>>(value: T) -> Value {
        Value::Ref(Some(Box::new(value.into())))
    }

    /// A reference that points nowhere. Resolves to [Value::Null].
    pub fn null_reference() -> Value {
        Value::Ref(None)
    }

    /// Wraps anything with a custom string form.
    pub fn displayable<T: Display + Send + Sync + 'static>(value: T) -> Value {
        Value::Displayable(Arc::new(value))
    }

    /// Wraps an error value.
    pub fn error<E: std::error::Error + Send + Sync + 'static>(error: E) -> Value {
        Value::Error(Arc::new(error))
    }

    /// Returns a stable lowercase name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::ISize(_) => "isize",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::USize(_) => "usize",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Timestamp(_) => "timestamp",
            Value::Document(_) => "document",
            Value::Map(_) => "map",
            Value::Array(_) => "array",
            Value::Ref(_) => "reference",
            Value::Displayable(_) => "displayable",
            Value::Error(_) => "error",
        }
    }

    /// Returns the boolean value if the [Value] is [Value::Bool].
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string slice if the [Value] is [Value::String].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the bytes if the [Value] is [Value::Bytes].
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the timestamp if the [Value] is [Value::Timestamp].
    #[inline]
    pub fn as_timestamp(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Timestamp(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the document if the [Value] is [Value::Document].
    #[inline]
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the raw map if the [Value] is [Value::Map].
    #[inline]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the array if the [Value] is [Value::Array].
    #[inline]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Returns any integer variant widened to `i128`.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Value::I8(v) => Some(*v as i128),
            Value::I16(v) => Some(*v as i128),
            Value::I32(v) => Some(*v as i128),
            Value::I64(v) => Some(*v as i128),
            Value::ISize(v) => Some(*v as i128),
            Value::U8(v) => Some(*v as i128),
            Value::U16(v) => Some(*v as i128),
            Value::U32(v) => Some(*v as i128),
            Value::U64(v) => Some(*v as i128),
            Value::USize(v) => Some(*v as i128),
            _ => None,
        }
    }

    /// Returns any float variant widened to `f64`.
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(*v as f64),
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    pub fn is_document(&self) -> bool {
        matches!(self, Value::Document(_))
    }

    #[inline]
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Checks if the [Value] is [Value::Ref].
    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(self, Value::Ref(_))
    }

    /// True for every signed and unsigned width.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Value::I8(_)
                | Value::I16(_)
                | Value::I32(_)
                | Value::I64(_)
                | Value::ISize(_)
                | Value::U8(_)
                | Value::U16(_)
                | Value::U32(_)
                | Value::U64(_)
                | Value::USize(_)
        )
    }

    #[inline]
    pub fn is_decimal(&self) -> bool {
        matches!(self, Value::F32(_) | Value::F64(_))
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_decimal()
    }

    /// Checks if the value renders itself, either as a custom string or as an error.
    #[inline]
    pub fn is_self_describing(&self) -> bool {
        matches!(self, Value::Displayable(_) | Value::Error(_))
    }

    /// Takes the value, replacing it with [Value::Null].
    pub fn take(&mut self) -> Value {
        std::mem::replace(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::I8(value)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::I16(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Value::ISize(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::U8(value)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::U16(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::U32(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::U64(value)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::USize(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::F32(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value.fixed_offset())
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Document(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Value::Map(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Box<Value>> for Value {
    fn from(value: Box<Value>) -> Self {
        Value::Ref(Some(value))
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}
