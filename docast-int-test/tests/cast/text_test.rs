use docast::cast::{try_string, try_uuid};
use docast::common::Value;
use docast::errors::ErrorKind;
use std::fmt;

struct Camera(u32);

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "camera-{}", self.0)
    }
}

#[test]
fn test_string_from_self_describing_values() {
    assert_eq!(try_string(&Value::from("text")).unwrap(), "text");
    assert_eq!(try_string(&Value::from(b"bytes".to_vec())).unwrap(), "bytes");
    assert_eq!(try_string(&Value::from(-42)).unwrap(), "-42");
    assert_eq!(try_string(&Value::from(u64::MAX)).unwrap(), "18446744073709551615");
    assert_eq!(try_string(&Value::from(0.25)).unwrap(), "0.25");
    assert_eq!(try_string(&Value::displayable(Camera(7))).unwrap(), "camera-7");
    assert_eq!(try_string(&Value::reference("inner")).unwrap(), "inner");
}

#[test]
fn test_string_rejects_invalid_utf8() {
    let err = try_string(&Value::from(vec![0xffu8, 0xfe])).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::EncodingError);
}

#[test]
fn test_string_unsupported_sources() {
    for value in [Value::Null, Value::from(true), Value::Array(vec![])] {
        let err = try_string(&value).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnsupportedType, "casting {:?}", value);
    }
}

#[test]
fn test_uuid() {
    let id = "523bbaf3-7ef1-4f4a-8713-ab8217a8f182";
    assert_eq!(try_uuid(&Value::from(id)).unwrap(), id);
    assert_eq!(try_uuid(&Value::from(id.as_bytes())).unwrap(), id);

    let generated = uuid::Uuid::new_v4().to_string();
    assert_eq!(try_uuid(&Value::from(&generated)).unwrap(), generated);
}

#[test]
fn test_uuid_failures() {
    let err = try_uuid(&Value::from("not an uuid")).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ParseError);
    let err = try_uuid(&Value::from(b"not an uuid".to_vec())).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ParseError);
    assert!(try_uuid(&Value::from(123)).is_err());

    let simple = "523bbaf37ef14f4a8713ab8217a8f182";
    let err = try_uuid(&Value::from(simple)).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ValidationError);
}
