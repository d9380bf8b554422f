use backtrace::Backtrace;
use serde::{de, ser};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

/// Message shared by every numeric overflow, whatever the target type.
pub const OVERFLOW_MESSAGE: &str = "desired type overflow";

/// Error kinds for docast operations
///
/// Each kind describes one category of failure so callers can tell an
/// out-of-range number from a value whose type has no conversion at all.
///
/// # Examples
///
/// ```rust
/// use docast::cast::try_uint8;
/// use docast::common::Value;
/// use docast::errors::ErrorKind;
///
/// let err = try_uint8(&Value::from(256)).unwrap_err();
/// assert_eq!(err.kind(), &ErrorKind::Overflow);
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// The destination type cannot represent the source magnitude
    Overflow,
    /// No conversion rule exists for the source type
    UnsupportedType,
    /// A string failed to parse as the destination's textual grammar
    ParseError,
    /// Parsed lexically but failed a semantic check (uuid canonical form)
    ValidationError,
    /// Error encoding or decoding data
    EncodingError,
    /// The operation is not valid with the given arguments
    InvalidOperation,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Overflow => write!(f, "Overflow"),
            ErrorKind::UnsupportedType => write!(f, "Unsupported type"),
            ErrorKind::ParseError => write!(f, "Parse error"),
            ErrorKind::ValidationError => write!(f, "Validation error"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
        }
    }
}

/// Custom docast error type.
///
/// `DocastError` carries the error message, its kind and an optional cause.
/// A backtrace is captured unresolved at construction and only symbolized
/// when the error is debug-printed.
///
/// # Examples
///
/// ```rust
/// use docast::errors::{DocastError, ErrorKind};
///
/// let cause = DocastError::new("invalid digit found in string", ErrorKind::ParseError);
/// let err = DocastError::new_with_cause(
///     "unable to cast \"x\" to i8",
///     ErrorKind::ParseError,
///     cause,
/// );
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct DocastError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<DocastError>>,
    backtrace: Backtrace,
}

impl DocastError {
    /// Creates a new `DocastError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        DocastError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Backtrace::new_unresolved(),
        }
    }

    /// Creates a new `DocastError` wrapping the error that caused it.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: DocastError) -> Self {
        DocastError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Backtrace::new_unresolved(),
        }
    }

    /// The numeric overflow error. Every coercion reports the same one.
    pub fn overflow() -> Self {
        DocastError::new(OVERFLOW_MESSAGE, ErrorKind::Overflow)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&DocastError> {
        self.cause.as_deref()
    }

    pub fn is_overflow(&self) -> bool {
        self.error_kind == ErrorKind::Overflow
    }
}

impl PartialEq for DocastError {
    fn eq(&self, other: &Self) -> bool {
        self.error_kind == other.error_kind && self.message == other.message
    }
}

impl Display for DocastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for DocastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => {
                let mut backtrace = self.backtrace.clone();
                backtrace.resolve();
                write!(f, "{}\n{:?}", self.message, backtrace)
            }
        }
    }
}

impl Error for DocastError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for docast operations.
pub type DocastResult<T> = Result<T, DocastError>;

impl de::Error for DocastError {
    fn custom<T: Display>(msg: T) -> Self {
        DocastError::new(&msg.to_string(), ErrorKind::EncodingError)
    }
}

impl ser::Error for DocastError {
    fn custom<T: Display>(msg: T) -> Self {
        DocastError::new(&msg.to_string(), ErrorKind::EncodingError)
    }
}

impl From<serde_json::Error> for DocastError {
    fn from(err: serde_json::Error) -> Self {
        DocastError::new(&format!("JSON error: {}", err), ErrorKind::EncodingError)
    }
}

impl From<std::string::FromUtf8Error> for DocastError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DocastError::new(
            &format!("UTF-8 encoding error: {}", err),
            ErrorKind::EncodingError,
        )
    }
}

impl From<chrono::ParseError> for DocastError {
    fn from(err: chrono::ParseError) -> Self {
        DocastError::new(&err.to_string(), ErrorKind::ParseError)
    }
}
