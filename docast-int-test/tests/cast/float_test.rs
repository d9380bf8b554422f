use docast::cast::{try_float32, try_float64};
use docast::common::Value;
use docast::errors::ErrorKind;

#[test]
fn test_float64_from_numbers() {
    assert_eq!(try_float64(&Value::from(1)).unwrap(), 1.0);
    assert_eq!(try_float64(&Value::from(u64::MAX)).unwrap(), u64::MAX as f64);
    assert_eq!(try_float64(&Value::from(0.5f32)).unwrap(), 0.5);
    assert_eq!(try_float64(&Value::reference(2.25)).unwrap(), 2.25);
}

#[test]
fn test_float64_from_strings() {
    assert_eq!(try_float64(&Value::from("0.72228586673736572")).unwrap(), 0.72228586673736572);
    assert_eq!(try_float64(&Value::from("-1e3")).unwrap(), -1000.0);
    assert!(try_float64(&Value::from("1e400")).unwrap_err().is_overflow());

    let err = try_float64(&Value::from("one")).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ParseError);
}

#[test]
fn test_float32_range() {
    assert_eq!(try_float32(&Value::from(1.5)).unwrap(), 1.5f32);
    assert_eq!(try_float32(&Value::from("3.25")).unwrap(), 3.25f32);
    assert!(try_float32(&Value::from(1e39)).unwrap_err().is_overflow());
    assert!(try_float32(&Value::from("1e39")).unwrap_err().is_overflow());
    assert!(try_float32(&Value::from(f64::MAX)).unwrap_err().is_overflow());
}

#[test]
fn test_float_unsupported_sources() {
    let err = try_float64(&Value::from(false)).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnsupportedType);
    let err = try_float32(&Value::Null).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnsupportedType);
}
