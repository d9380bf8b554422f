//! # docast - strict dynamic casting and nested JSON documents
//!
//! `docast` converts dynamically typed values into fixed Rust types with
//! strict overflow and parse failure detection, and offers a string keyed
//! [Document](collection::Document) with dotted path access and a lossless
//! flatten / nested transform.
//!
//! ## Quick Start
//!
//! ```rust
//! use docast::cast::{try_int64, try_uint8};
//! use docast::common::Value;
//! use docast::doc;
//!
//! // coercion
//! assert_eq!(try_uint8(&Value::from("0xff")).unwrap(), 255);
//! assert!(try_uint8(&Value::from(256)).unwrap_err().is_overflow());
//! assert_eq!(try_int64(&Value::reference(1.9)).unwrap(), 1);
//!
//! // documents
//! let mut doc = doc! { event: { detector: "face" } };
//! doc.put_field("event.time_utc", "2019-03-27T11:10:14");
//!
//! let flat = doc.flatten();
//! assert!(flat.contains_key("event_time__utc"));
//! assert_eq!(flat.nested(), doc);
//! ```
//!
//! ## Module Organization
//!
//! - [`cast`] - Coercion of [`common::Value`] into fixed types
//! - [`collection`] - The [`collection::Document`] model, flat keys and JSON codec
//! - [`common`] - The dynamic [`common::Value`] type and shared constants
//! - [`document_config`] - Separators and time format used by documents
//! - [`errors`] - Error types and result definitions

pub mod cast;
pub mod collection;
pub mod common;
pub mod document_config;
pub mod errors;
