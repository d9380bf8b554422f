use crate::common::{DEFAULT_TIME_FORMAT, FIELD_SEPARATOR, FLAT_SEPARATOR};
use crate::errors::{DocastError, DocastResult, ErrorKind};
use std::sync::LazyLock;

/// Configuration used by the `Document` methods that take none explicitly.
pub(crate) static DEFAULT_CONFIG: LazyLock<DocumentConfig> = LazyLock::new(DocumentConfig::default);

/// Separators and formats used when addressing and reshaping a
/// [Document](crate::collection::Document).
///
/// The plain `Document` methods use [DocumentConfig::default]: `.` for dotted
/// paths, `_` for flat keys and `%Y-%m-%dT%H:%M:%S%.f` for string timestamps.
/// The `*_with_config` variants take an explicit configuration instead.
///
/// # Examples
///
/// ```rust
/// use docast::collection::Document;
/// use docast::document_config::DocumentConfig;
///
/// let config = DocumentConfig::builder()
///     .field_separator('/')
///     .flat_separator('-')
///     .build()
///     .unwrap();
///
/// let mut doc = Document::new();
/// doc.put_field_with("a/b", 1, &config);
/// assert!(doc.flatten_with_config(&config).contains_key("a-b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentConfig {
    field_separator: char,
    flat_separator: char,
    time_format: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig {
            field_separator: FIELD_SEPARATOR,
            flat_separator: FLAT_SEPARATOR,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl DocumentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> DocumentConfigBuilder {
        DocumentConfigBuilder::new()
    }

    /// Separator between segments of a dotted path.
    pub fn field_separator(&self) -> char {
        self.field_separator
    }

    /// Separator between segments of a flat key.
    pub fn flat_separator(&self) -> char {
        self.flat_separator
    }

    /// Chrono format used to read string timestamps.
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    fn validate_separator(name: &str, separator: char) -> DocastResult<()> {
        if separator.is_alphanumeric() || separator.is_whitespace() {
            log::error!("{} cannot be {:?}", name, separator);
            return Err(DocastError::new(
                &format!("{} cannot be {:?}", name, separator),
                ErrorKind::InvalidOperation,
            ));
        }
        Ok(())
    }

    fn validate(&self) -> DocastResult<()> {
        Self::validate_separator("Field separator", self.field_separator)?;
        Self::validate_separator("Flat separator", self.flat_separator)?;
        if self.field_separator == self.flat_separator {
            log::error!("Field separator and flat separator must differ");
            return Err(DocastError::new(
                "Field separator and flat separator must differ",
                ErrorKind::InvalidOperation,
            ));
        }
        if self.time_format.is_empty() {
            log::error!("Time format cannot be empty");
            return Err(DocastError::new(
                "Time format cannot be empty",
                ErrorKind::InvalidOperation,
            ));
        }
        Ok(())
    }
}

/// Fluent builder for [DocumentConfig].
///
/// The first invalid setting is captured and returned from [build](Self::build),
/// later settings are ignored once an error is held.
#[derive(Debug, Default)]
pub struct DocumentConfigBuilder {
    error: Option<DocastError>,
    config: DocumentConfig,
}

impl DocumentConfigBuilder {
    pub fn new() -> Self {
        DocumentConfigBuilder {
            error: None,
            config: DocumentConfig::default(),
        }
    }

    pub fn field_separator(mut self, separator: char) -> Self {
        if self.error.is_none() {
            match DocumentConfig::validate_separator("Field separator", separator) {
                Ok(()) => self.config.field_separator = separator,
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    pub fn flat_separator(mut self, separator: char) -> Self {
        if self.error.is_none() {
            match DocumentConfig::validate_separator("Flat separator", separator) {
                Ok(()) => self.config.flat_separator = separator,
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    pub fn time_format(mut self, format: &str) -> Self {
        if self.error.is_none() {
            if format.is_empty() {
                log::error!("Time format cannot be empty");
                self.error = Some(DocastError::new(
                    "Time format cannot be empty",
                    ErrorKind::InvalidOperation,
                ));
            } else {
                self.config.time_format = format.to_string();
            }
        }
        self
    }

    /// Returns the configuration, or the first error captured by a setter.
    /// Settings that are valid alone but conflict with each other fail here.
    pub fn build(self) -> DocastResult<DocumentConfig> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.config.validate()?;
        Ok(self.config)
    }
}
