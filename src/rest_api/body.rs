//! Request body decoding
//!
//! Bodies are read as raw bytes so that malformed JSON and wrong shapes
//! surface as the API's own messages rather than extractor rejections.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::{RestError, RestResult};
use crate::schema::Record;

/// Parses the body as any JSON value
pub fn parse_json(body: &[u8]) -> RestResult<Value> {
    serde_json::from_slice(body).map_err(|_| RestError::MalformedJson)
}

/// Body of a bulk create: an array whose every element is an object.
///
/// The element check covers the whole array before any record is looked at.
pub fn record_batch(body: &[u8]) -> RestResult<Vec<Record>> {
    let Value::Array(items) = parse_json(body)? else {
        return Err(RestError::NotAnArray);
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(record) => Ok(record),
            _ => Err(RestError::NonRecordElement),
        })
        .collect()
}

/// Body of an update: a single object
pub fn single_record(body: &[u8]) -> RestResult<Record> {
    match parse_json(body)? {
        Value::Object(record) => Ok(record),
        _ => Err(RestError::NotARecord),
    }
}

/// Converts an already validated record into a typed payload
pub fn decode<T: DeserializeOwned>(record: Record) -> RestResult<T> {
    serde_json::from_value(Value::Object(record))
        .map_err(|e| RestError::Internal(format!("validated record did not decode: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NewDevice;

    #[test]
    fn test_malformed_json() {
        assert_eq!(
            record_batch(b"[{dkjghk: 10, dfgf}]"),
            Err(RestError::MalformedJson)
        );
        assert_eq!(single_record(b""), Err(RestError::MalformedJson));
    }

    #[test]
    fn test_batch_must_be_array() {
        assert_eq!(record_batch(br#"{"koo": 123}"#), Err(RestError::NotAnArray));
    }

    #[test]
    fn test_batch_elements_must_be_objects() {
        assert_eq!(
            record_batch(b"[{}, [], {}, {}]"),
            Err(RestError::NonRecordElement)
        );
        assert_eq!(record_batch(b"[1]"), Err(RestError::NonRecordElement));
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(record_batch(b"[]").unwrap().len(), 0);
    }

    #[test]
    fn test_update_must_be_object() {
        assert_eq!(single_record(b"[]"), Err(RestError::NotARecord));
        assert_eq!(single_record(b"\"name\""), Err(RestError::NotARecord));
        assert!(single_record(b"{}").unwrap().is_empty());
    }

    #[test]
    fn test_batch_keeps_document_order() {
        let records = record_batch(br#"[{"power": 1, "name": "One"}]"#).unwrap();
        let keys: Vec<_> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["power", "name"]);
    }

    #[test]
    fn test_decode() {
        let record = single_record(br#"{"name": "Koo1", "scientist_id": 5, "power": 0}"#).unwrap();
        let device: NewDevice = decode(record).unwrap();
        assert_eq!(device.scientist_id, 5);
    }
}
