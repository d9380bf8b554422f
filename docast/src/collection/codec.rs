use crate::collection::Document;
use crate::common::Value;
use crate::errors::{DocastError, DocastResult, ErrorKind};

impl Document {
    /// Encodes the document as a JSON object.
    pub fn to_json(&self) -> DocastResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|err| {
            log::error!("Failed to encode document: {}", err);
            DocastError::from(err)
        })
    }

    /// Decodes a JSON object. Nested objects become documents, integers
    /// become [Value::I64] (or [Value::U64] above `i64::MAX`).
    pub fn from_json(bytes: &[u8]) -> DocastResult<Document> {
        serde_json::from_slice(bytes).map_err(|err| {
            log::error!("Failed to decode document: {}", err);
            DocastError::from(err)
        })
    }

    /// Column form of the document: `None` when it is empty, its JSON
    /// encoding otherwise.
    pub fn stored_value(&self) -> DocastResult<Option<Vec<u8>>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.to_json().map(Some)
    }

    /// Reads a document back from its column form. Only a byte sequence
    /// holding a JSON object is accepted.
    pub fn scan(value: &Value) -> DocastResult<Document> {
        match value {
            Value::Bytes(bytes) => Document::from_json(bytes),
            other => {
                log::error!("Cannot scan a document from {}", other.type_name());
                Err(DocastError::new(
                    &format!("failed to unmarshal JSON value: {:?}", other),
                    ErrorKind::EncodingError,
                ))
            }
        }
    }
}
