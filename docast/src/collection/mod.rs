mod accessors;
mod codec;
mod document;
mod flatten;

pub use document::*;
pub use flatten::{flatten_field, flatten_field_with, split_flat_key, split_flat_key_with};
