use docast::cast::{
    try_int16, try_int32, try_int64, try_int8, try_uint16, try_uint32, try_uint64, try_uint8,
};
use docast::common::Value;
use docast::errors::ErrorKind;
use docast_int_test::test_util::value_of;
use serde_json::json;

fn out_of_uint8_range() -> Vec<Value> {
    vec![
        Value::from(-1i8),
        Value::from(-1i16),
        Value::from(-1i32),
        Value::from(-1i64),
        Value::from(-1isize),
        Value::from(256i16),
        Value::from(256u16),
        Value::from(256i32),
        Value::from(256u32),
        Value::from(256i64),
        Value::from(256u64),
        Value::from(1024usize),
        Value::from(256.0f32),
        Value::from(255.9f32),
        Value::from(255.5f64),
        Value::from(-1.0f64),
        Value::reference(1024),
    ]
}

#[test]
fn test_uint8_overflow_matrix() {
    for value in out_of_uint8_range() {
        let err = try_uint8(&value).unwrap_err();
        assert!(err.is_overflow(), "{:?} should overflow u8, got {}", value, err);
    }
}

#[test]
fn test_uint8_success_matrix() {
    let cases = vec![
        (Value::from(0i8), 0u8),
        (Value::from(1i16), 1),
        (Value::from(128i32), 128),
        (Value::from(255i64), 255),
        (Value::from(255u64), 255),
        (Value::from(255usize), 255),
        (Value::from(1.5f64), 1),
        (Value::from(255.0f32), 255),
        (Value::from("0"), 0),
        (Value::from("128"), 128),
        (Value::from("0xff"), 255),
        (Value::from("0b1000_0000"), 128),
        (Value::reference(Value::reference(42)), 42),
    ];
    for (value, expected) in cases {
        assert_eq!(try_uint8(&value).unwrap(), expected, "casting {:?}", value);
    }
}

#[test]
fn test_uint8_string_failures_are_parse_errors() {
    for text in ["-1", "256", "1024", "", "1.5", "ff", "_1"] {
        let err = try_uint8(&Value::from(text)).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::ParseError, "casting {:?}", text);
        assert!(!err.is_overflow());
    }
}

#[test]
fn test_unsigned_boundaries() {
    assert_eq!(try_uint16(&Value::from(u16::MAX)).unwrap(), u16::MAX);
    assert!(try_uint16(&Value::from(u16::MAX as u32 + 1)).unwrap_err().is_overflow());
    assert_eq!(try_uint32(&Value::from("4294967295")).unwrap(), u32::MAX);
    assert!(try_uint32(&Value::from(u32::MAX as u64 + 1)).unwrap_err().is_overflow());
    assert_eq!(try_uint64(&Value::from(u64::MAX)).unwrap(), u64::MAX);
    assert!(try_uint64(&Value::from(-1)).unwrap_err().is_overflow());
    assert!(try_uint64(&Value::from("18446744073709551616")).is_err());
}

#[test]
fn test_signed_boundaries() {
    assert_eq!(try_int8(&Value::from(-128)).unwrap(), i8::MIN);
    assert!(try_int8(&Value::from(128)).unwrap_err().is_overflow());
    assert!(try_int8(&Value::from("-129")).unwrap_err().is_overflow());
    assert_eq!(try_int16(&Value::from("-0x8000")).unwrap(), i16::MIN);
    assert!(try_int16(&Value::from(40000u32)).unwrap_err().is_overflow());
    assert_eq!(try_int32(&Value::from(i32::MAX as i64)).unwrap(), i32::MAX);
    assert!(try_int32(&Value::from(i32::MAX as i64 + 1)).unwrap_err().is_overflow());
}

#[test]
fn test_int64_matrix() {
    assert_eq!(try_int64(&Value::from("4294967295")).unwrap(), 4294967295);
    assert_eq!(try_int64(&Value::from(i64::MAX as u64)).unwrap(), i64::MAX);
    assert_eq!(try_int64(&Value::from(u32::MAX)).unwrap(), u32::MAX as i64);
    assert!(try_int64(&Value::from(u64::MAX)).unwrap_err().is_overflow());
    assert!(try_int64(&Value::from(i64::MAX as u64 + 1)).unwrap_err().is_overflow());
    let err = try_int64(&Value::from("18446744073709551616")).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ParseError);
    assert!(try_int64(&Value::from(1e19)).unwrap_err().is_overflow());
    assert_eq!(try_int64(&Value::from(-1.9)).unwrap(), -1);
}

#[test]
fn test_json_sourced_values() {
    assert_eq!(try_uint8(&value_of(json!(255))).unwrap(), 255);
    assert!(try_uint8(&value_of(json!(-1))).unwrap_err().is_overflow());
    assert_eq!(try_uint8(&value_of(json!(1.5))).unwrap(), 1);
    assert_eq!(try_int64(&value_of(json!(u64::MAX >> 1))).unwrap(), i64::MAX);
    assert!(try_int64(&value_of(json!(u64::MAX))).unwrap_err().is_overflow());
    assert_eq!(try_int32(&value_of(json!("0o17"))).unwrap(), 15);
}

#[test]
fn test_unsupported_sources() {
    let values = vec![
        Value::Null,
        Value::null_reference(),
        Value::from(true),
        value_of(json!({ "a": 1 })),
        value_of(json!([1, 2])),
        Value::from(vec![1u8, 2]),
    ];
    for value in values {
        let err = try_int32(&value).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnsupportedType, "casting {:?}", value);
    }
}
