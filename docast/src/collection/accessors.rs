use crate::cast::{try_date_time, try_uuid, Coercible};
use crate::collection::Document;
use crate::common::util::parse_with_format;
use crate::common::Value;
use crate::document_config::{DocumentConfig, DEFAULT_CONFIG};
use crate::errors::DocastResult;
use chrono::{DateTime, FixedOffset};

impl Document {
    /// Coerces the value at a dotted `path` into `T`.
    ///
    /// A missing path is coerced as [Value::Null] and therefore fails. All
    /// `must_get_field_as_*` methods are shorthands for this.
    ///
    /// ```rust
    /// use docast::doc;
    ///
    /// let doc = doc! { size: "0x10" };
    /// assert_eq!(doc.try_get_field::<u32>("size").unwrap(), 16);
    /// assert!(doc.try_get_field::<u32>("missing").is_err());
    /// ```
    pub fn try_get_field<T: Coercible>(&self, path: &str) -> DocastResult<T> {
        self.cast_field(path, &DEFAULT_CONFIG, T::coerce)
    }

    pub fn try_get_field_with<T: Coercible>(
        &self,
        path: &str,
        config: &DocumentConfig,
    ) -> DocastResult<T> {
        self.cast_field(path, config, T::coerce)
    }

    /// Like [try_get_field](Self::try_get_field), but any failure yields
    /// `T::default()`. All `get_field_as_*` numeric and string accessors are
    /// shorthands for this.
    pub fn get_field_or_default<T: Coercible + Default>(&self, path: &str) -> T {
        self.cast_field_or_default(path, T::coerce)
    }

    /// Returns the field as a UUID string, or an empty string when it is not
    /// one in hyphenated form.
    pub fn get_field_as_uuid(&self, path: &str) -> String {
        self.cast_field_or_default(path, try_uuid)
    }

    pub fn must_get_field_as_uuid(&self, path: &str) -> DocastResult<String> {
        self.cast_field(path, &DEFAULT_CONFIG, try_uuid)
    }

    /// Returns the field as a point in time.
    ///
    /// A timestamp value is returned as is. A string is parsed with `format`,
    /// or with the configured time format when `None`. Anything else, and any
    /// parse failure, yields `None`.
    pub fn get_field_as_time(
        &self,
        path: &str,
        format: Option<&str>,
    ) -> Option<DateTime<FixedOffset>> {
        self.get_field_as_time_with(path, format, &DEFAULT_CONFIG)
    }

    pub fn get_field_as_time_with(
        &self,
        path: &str,
        format: Option<&str>,
        config: &DocumentConfig,
    ) -> Option<DateTime<FixedOffset>> {
        match self.field_ref(path, config)? {
            Value::Timestamp(v) => Some(*v),
            Value::String(v) => {
                let format = format.unwrap_or(config.time_format());
                match parse_with_format(v, format) {
                    Ok(parsed) => Some(parsed),
                    Err(err) => {
                        log::debug!("Field {:?} is not a time in {:?}: {}", path, format, err);
                        None
                    }
                }
            }
            _ => None,
        }
    }

    /// Coerces the field with the strict date time rules of
    /// [try_date_time](crate::cast::try_date_time).
    pub fn must_get_field_as_time(&self, path: &str) -> DocastResult<DateTime<FixedOffset>> {
        self.cast_field(path, &DEFAULT_CONFIG, try_date_time)
    }

    /// Returns a nested document or map as a [Document], or `None` for any
    /// other value.
    pub fn get_field_as_object(&self, path: &str) -> Option<Document> {
        match self.field_ref(path, &DEFAULT_CONFIG)? {
            Value::Document(doc) => Some(doc.clone()),
            Value::Map(map) => Some(Document::from_map(map.clone())),
            _ => None,
        }
    }

    fn cast_field<T>(
        &self,
        path: &str,
        config: &DocumentConfig,
        cast: impl FnOnce(&Value) -> DocastResult<T>,
    ) -> DocastResult<T> {
        match self.field_ref(path, config) {
            Some(value) => cast(value),
            None => cast(&Value::Null),
        }
    }

    fn cast_field_or_default<T: Default>(
        &self,
        path: &str,
        cast: impl FnOnce(&Value) -> DocastResult<T>,
    ) -> T {
        match self.cast_field(path, &DEFAULT_CONFIG, cast) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("Field {:?} falls back to default: {}", path, err);
                T::default()
            }
        }
    }
}

macro_rules! typed_accessors {
    ($($ty:ty => $get:ident, $must:ident;)*) => {
        impl Document {
            $(
                #[doc = concat!(
                    "Returns the field coerced to `", stringify!($ty),
                    "`, or its default when missing or not coercible."
                )]
                pub fn $get(&self, path: &str) -> $ty {
                    self.get_field_or_default::<$ty>(path)
                }

                #[doc = concat!("Coerces the field to `", stringify!($ty), "`.")]
                pub fn $must(&self, path: &str) -> DocastResult<$ty> {
                    self.try_get_field::<$ty>(path)
                }
            )*
        }
    };
}

typed_accessors! {
    String => get_field_as_string, must_get_field_as_string;
    isize => get_field_as_int, must_get_field_as_int;
    i8 => get_field_as_int8, must_get_field_as_int8;
    i16 => get_field_as_int16, must_get_field_as_int16;
    i32 => get_field_as_int32, must_get_field_as_int32;
    i64 => get_field_as_int64, must_get_field_as_int64;
    u8 => get_field_as_uint8, must_get_field_as_uint8;
    u16 => get_field_as_uint16, must_get_field_as_uint16;
    u32 => get_field_as_uint32, must_get_field_as_uint32;
    u64 => get_field_as_uint64, must_get_field_as_uint64;
    f32 => get_field_as_float32, must_get_field_as_float32;
    f64 => get_field_as_float64, must_get_field_as_float64;
}
