//! Conversion between nested documents and single level documents keyed by
//! flat keys.
//!
//! A flat key joins the path segments with the flat separator (default `_`).
//! A separator that is part of a segment name is escaped by doubling it, so
//! `{"time_utc": {"offset": 3}}` flattens to `{"time__utc_offset": 3}` and
//! nests back to the original document.

use crate::collection::Document;
use crate::common::util::split_path;
use crate::common::{Value, FLAT_SEPARATOR};
use crate::document_config::{DocumentConfig, DEFAULT_CONFIG};
use smallvec::SmallVec;

impl Document {
    /// Flattens nested documents and maps into flat keys joined with `_`.
    ///
    /// Arrays and all other values are leaves. A nested document without
    /// entries contributes no key at all.
    ///
    /// ```rust
    /// use docast::doc;
    /// use docast::common::Value;
    ///
    /// let doc = doc! { event: { detector: "face", time_utc: 3 } };
    /// let flat = doc.flatten();
    /// assert_eq!(flat.get("event_detector"), Value::from("face"));
    /// assert_eq!(flat.get("event_time__utc"), Value::from(3));
    /// assert_eq!(flat.nested(), doc);
    /// ```
    pub fn flatten(&self) -> Document {
        self.flatten_with(FLAT_SEPARATOR)
    }

    pub fn flatten_with_config(&self, config: &DocumentConfig) -> Document {
        self.flatten_with(config.flat_separator())
    }

    pub fn flatten_with(&self, separator: char) -> Document {
        if self.is_empty() {
            return self.clone();
        }

        let escaped: String = [separator, separator].iter().collect();
        let mut flat = Document::new();
        flatten_entries(self.iter(), "", separator, &escaped, &mut flat);
        flat
    }

    /// Rebuilds nested documents from flat keys joined with `_`.
    pub fn nested(&self) -> Document {
        self.nested_with(FLAT_SEPARATOR)
    }

    pub fn nested_with_config(&self, config: &DocumentConfig) -> Document {
        self.nested_with(config.flat_separator())
    }

    pub fn nested_with(&self, separator: char) -> Document {
        if self.is_empty() {
            return self.clone();
        }

        let mut nested = Document::new();
        for (key, value) in self.iter() {
            let segments = split_flat_key_with(key, separator);
            let segments: SmallVec<[&str; 8]> = segments.iter().map(String::as_str).collect();
            nested.deep_put(&segments, value.clone());
        }
        nested
    }
}

fn flatten_entries<'a>(
    entries: impl Iterator<Item = (&'a String, &'a Value)>,
    prefix: &str,
    separator: char,
    escaped: &str,
    flat: &mut Document,
) {
    for (field, value) in entries {
        let key = format!("{}{}", prefix, field.replace(separator, escaped));
        match value {
            Value::Document(doc) => {
                let prefix = format!("{}{}", key, separator);
                flatten_entries(doc.iter(), &prefix, separator, escaped, flat);
            }
            Value::Map(map) => {
                let prefix = format!("{}{}", key, separator);
                flatten_entries(map.iter(), &prefix, separator, escaped, flat);
            }
            _ => flat.put(key, value.clone()),
        }
    }
}

/// Splits a flat key joined with `_` into its unescaped segments.
///
/// ```rust
/// use docast::collection::split_flat_key;
///
/// assert_eq!(split_flat_key("event_detector"), vec!["event", "detector"]);
/// assert_eq!(split_flat_key("time__utc"), vec!["time_utc"]);
/// assert_eq!(split_flat_key("_listed"), vec!["_listed"]);
/// ```
pub fn split_flat_key(key: &str) -> Vec<String> {
    split_flat_key_with(key, FLAT_SEPARATOR)
}

/// Splits a flat key on `separator`.
///
/// A separator is a boundary only when it is neither the first nor the last
/// character and has no separator on either side. Doubled separators inside
/// a segment are unescaped to a single one.
pub fn split_flat_key_with(key: &str, separator: char) -> Vec<String> {
    if !key.contains(separator) {
        return vec![key.to_string()];
    }

    let chars: Vec<(usize, char)> = key.char_indices().collect();
    let mut boundaries: SmallVec<[usize; 8]> = SmallVec::new();
    let mut prev_is_separator = false;
    for (i, &(position, c)) in chars.iter().enumerate() {
        if c != separator {
            prev_is_separator = false;
            continue;
        }
        if i == 0 {
            prev_is_separator = true;
            continue;
        }
        if i == chars.len() - 1 {
            break;
        }
        if chars[i + 1].1 != separator && !prev_is_separator {
            boundaries.push(position);
        }
        prev_is_separator = true;
    }

    let escaped: String = [separator, separator].iter().collect();
    let single = separator.to_string();
    let mut segments = Vec::with_capacity(boundaries.len() + 1);
    let mut start = 0;
    for boundary in boundaries {
        segments.push(key[start..boundary].replace(&escaped, &single));
        start = boundary + separator.len_utf8();
    }
    segments.push(key[start..].replace(&escaped, &single));
    segments
}

/// Turns a dotted path into the flat key its value gets from [Document::flatten].
///
/// ```rust
/// use docast::collection::flatten_field;
///
/// assert_eq!(flatten_field("event.time_utc"), "event_time__utc");
/// ```
pub fn flatten_field(path: &str) -> String {
    flatten_field_with(path, &DEFAULT_CONFIG)
}

pub fn flatten_field_with(path: &str, config: &DocumentConfig) -> String {
    let separator = config.flat_separator();
    let escaped: String = [separator, separator].iter().collect();
    let single = separator.to_string();
    split_path(path, config.field_separator())
        .iter()
        .map(|segment| segment.replace(separator, &escaped))
        .collect::<Vec<_>>()
        .join(single.as_str())
}
