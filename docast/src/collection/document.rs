use crate::common::util::split_path;
use crate::common::Value;
use crate::document_config::{DocumentConfig, DEFAULT_CONFIG};
use im::OrdMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

/// A string keyed document holding dynamically typed [Value]s.
///
/// Documents nest: a value may itself be a [Value::Document], or a raw
/// [Value::Map] that is treated the same way when a path is traversed.
/// Nested values are addressed with a dotted path such as `"user.name"`,
/// the separator comes from [DocumentConfig].
///
/// Backed by a persistent `im::OrdMap`, so cloning is O(1) and each clone is
/// fully independent after mutation. Key order carries no meaning.
///
/// # Examples
///
/// ```rust
/// use docast::collection::Document;
/// use docast::common::Value;
/// use docast::doc;
///
/// let mut doc = doc! {
///     user: { name: "Alice", age: 30 },
/// };
/// doc.put_field("user.address.city", "Paris");
///
/// assert_eq!(doc.get_field("user.name"), Value::from("Alice"));
/// assert_eq!(doc.get_field_as_int64("user.age"), 30);
/// assert_eq!(doc.flatten().get("user_address_city"), Value::from("Paris"));
/// ```
#[derive(Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    data: OrdMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: OrdMap::new(),
        }
    }

    /// Creates a document holding the entries of a [BTreeMap]. Nested values
    /// are kept as they are.
    pub fn from_map(map: BTreeMap<String, Value>) -> Self {
        Document {
            data: map.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of top level entries.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Associates `value` with the top level `key`, replacing any previous
    /// value. The key is taken literally, separators in it are not special.
    ///
    /// ```rust
    /// use docast::collection::Document;
    /// use docast::common::Value;
    ///
    /// let mut doc = Document::new();
    /// doc.put("a.b", 1);
    /// assert_eq!(doc.get("a.b"), Value::from(1));
    /// assert!(doc.get_field("a.b").is_null());
    /// ```
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    /// Returns the top level value under `key`, or [Value::Null] when absent.
    pub fn get(&self, key: &str) -> Value {
        self.data.get(key).cloned().unwrap_or_default()
    }

    /// Removes the top level `key` and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Top level keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.data.keys().map(String::as_str)
    }

    /// Top level entries in ascending key order.
    pub fn iter(&self) -> im::ordmap::Iter<'_, String, Value> {
        self.data.iter()
    }

    /// Copies the top level entries into a [BTreeMap].
    pub fn to_map(&self) -> BTreeMap<String, Value> {
        self.data
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns the value at a dotted `path`.
    ///
    /// [Value::Null] is returned when any segment is missing or when an
    /// intermediate value is neither a document nor a map.
    pub fn get_field(&self, path: &str) -> Value {
        self.get_field_with(path, &DEFAULT_CONFIG)
    }

    pub fn get_field_with(&self, path: &str, config: &DocumentConfig) -> Value {
        self.field_ref(path, config).cloned().unwrap_or_default()
    }

    /// Stores `value` at a dotted `path`, creating intermediate documents.
    ///
    /// An intermediate scalar is replaced by an empty document, and an
    /// intermediate map is converted into a document with its entries kept.
    pub fn put_field(&mut self, path: &str, value: impl Into<Value>) {
        self.put_field_with(path, value, &DEFAULT_CONFIG)
    }

    pub fn put_field_with(&mut self, path: &str, value: impl Into<Value>, config: &DocumentConfig) {
        let segments = split_path(path, config.field_separator());
        self.deep_put(&segments, value.into());
    }

    /// Removes every top level entry holding [Value::Null].
    pub fn omit_empty(&mut self) -> &mut Self {
        let empty: Vec<String> = self
            .data
            .iter()
            .filter(|(_, value)| value.is_null())
            .map(|(key, _)| key.clone())
            .collect();
        for key in empty {
            self.data.remove(&key);
        }
        self
    }

    /// Removes the given top level keys.
    pub fn omit_key(&mut self, keys: &[&str]) -> &mut Self {
        for key in keys {
            self.data.remove(*key);
        }
        self
    }

    pub(crate) fn field_ref(&self, path: &str, config: &DocumentConfig) -> Option<&Value> {
        let segments = split_path(path, config.field_separator());
        let (first, rest) = segments.split_first()?;
        let mut current = self.data.get(*first)?;
        for segment in rest {
            current = match current {
                Value::Document(doc) => doc.data.get(*segment)?,
                Value::Map(map) => map.get(*segment)?,
                _ => return None,
            };
        }
        Some(current)
    }

    pub(crate) fn deep_put(&mut self, segments: &[&str], value: Value) {
        match segments {
            [] => {}
            [key] => {
                self.data.insert(key.to_string(), value);
            }
            [key, rest @ ..] => {
                let mut level = match self.data.remove(*key) {
                    Some(Value::Document(doc)) => doc,
                    Some(Value::Map(map)) => Document::from_map(map),
                    _ => Document::new(),
                };
                level.deep_put(rest, value);
                self.data.insert(key.to_string(), Value::Document(level));
            }
        }
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = im::ordmap::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Document {
            data: iter.into_iter().collect(),
        }
    }
}

pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Creates a [Document] with JSON-like syntax.
///
/// # Examples
///
/// ```rust
/// use docast::doc;
///
/// // Empty document
/// let empty = doc!{};
///
/// let flat = doc!{ type: "detector", version: 1 };
///
/// // values in parentheses are evaluated as expressions
/// let age = 44;
/// let event = doc!{
///     detector: {
///         faceAppeared: { age: (age), phase: "happened" },
///         rectangle: [0.53, 0.12]
///     },
///     "time_begin": "2019-03-27T11:10:14",
/// };
/// assert_eq!(event.size(), 2);
/// assert_eq!(flat.size(), 2);
/// ```
#[macro_export]
macro_rules! doc {
    ({}) => {
        $crate::collection::Document::new()
    };

    () => {
        $crate::collection::Document::new()
    };

    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::doc!($($key : $value),*)
    };

    ($($key:tt : $value:tt),* $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::doc_value;

            let mut doc = $crate::collection::Document::new();
            $(
                doc.put(
                    $crate::collection::normalize(stringify!($key)),
                    $crate::doc_value!($value),
                );
            )*
            doc
        }
    };
}

/// Helper macro converting values for the [doc!] macro.
/// Handles nested documents, arrays and expressions.
#[macro_export]
macro_rules! doc_value {
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        {
            $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
        }
    };

    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
