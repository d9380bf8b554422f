use chrono::{NaiveDate, TimeZone, Utc};
use docast::collection::Document;
use docast::common::Value;
use docast::doc;
use docast::document_config::DocumentConfig;
use docast::errors::ErrorKind;
use docast_int_test::test_util::detector_event;

#[test]
fn test_numeric_accessors_on_detector_event() {
    let event = detector_event().unwrap();
    assert_eq!(event.get_field_as_int64("event.detector.faceAppeared.age"), 44);
    assert_eq!(event.get_field_as_uint8("event.detector.faceAppeared.gender"), 2);
    assert_eq!(event.get_field_as_int("version"), 1);
    let quality = event.get_field_as_float64("event.detector.faceAppeared.quality");
    assert!((quality - 0.7222858667373657).abs() < 1e-12);
    assert_eq!(event.get_field_as_int32("event.detector.faceAppeared.rectangle.x"), 0);
    assert_eq!(event.get_field_as_int32("missing.path"), 0);
    assert_eq!(event.get_field_as_int32("source"), 0);
}

#[test]
fn test_strict_accessors_report_errors() {
    let event = detector_event().unwrap();
    let err = event.must_get_field_as_int8("missing").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnsupportedType);
    let err = event.must_get_field_as_uint16("type").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ParseError);
    let err = event.must_get_field_as_string("source.server").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnsupportedType);
}

#[test]
fn test_string_and_uuid_accessors() {
    let event = detector_event().unwrap();
    assert_eq!(event.get_field_as_string("source.video.name"), "Camera");
    assert_eq!(event.get_field_as_string("version"), "1");
    assert_eq!(event.get_field_as_string("source.detector.name"), "");
    assert_eq!(event.get_field_as_uuid("id"), "0d49659f-1edc-49f2-872a-5ead1db8390a");
    assert_eq!(event.get_field_as_uuid("type"), "");
    assert!(event.must_get_field_as_uuid("source.server.id").is_err());
}

#[test]
fn test_time_accessors() {
    let event = detector_event().unwrap();
    let expected = NaiveDate::from_ymd_opt(2019, 3, 27)
        .and_then(|date| date.and_hms_milli_opt(8, 10, 14, 920))
        .unwrap()
        .and_utc();
    assert_eq!(event.get_field_as_time("time.utc", None), Some(expected.fixed_offset()));
    assert_eq!(event.get_field_as_time("time.utc", Some("%d.%m.%Y")), None);
    assert_eq!(event.get_field_as_time("version", None), None);
    assert!(event.must_get_field_as_time("time.utc").is_err());

    let doc = doc! { day: "27.03.2019", at: "2019-03-27T11:10:14" };
    assert_eq!(
        doc.get_field_as_time("day", Some("%d.%m.%Y")),
        Some(Utc.with_ymd_and_hms(2019, 3, 27, 0, 0, 0).unwrap().fixed_offset())
    );
    assert_eq!(
        doc.must_get_field_as_time("at").unwrap(),
        Utc.with_ymd_and_hms(2019, 3, 27, 11, 10, 14).unwrap()
    );
}

#[test]
fn test_object_accessor() {
    let event = detector_event().unwrap();
    let kind = event.get_field_as_object("event.detector.type").unwrap();
    assert_eq!(kind, doc! { id: "faceAppeared", name: "faceAppeared" });
    assert_eq!(event.get_field_as_object("type"), None);
    assert_eq!(event.get_field_as_object("missing"), None);
}

#[test]
fn test_put_field_then_read_back() {
    let mut doc = Document::new();
    doc.put_field("event.detector.faceAppeared.age", 44);
    doc.put_field("event.detector.faceAppeared.phase", "happened");
    doc.put_field("version", "0x2");

    assert_eq!(doc.get_field_as_uint8("event.detector.faceAppeared.age"), 44);
    assert_eq!(doc.get_field("event.detector.faceAppeared.phase"), Value::from("happened"));
    assert_eq!(doc.try_get_field::<u64>("version").unwrap(), 2);
    assert_eq!(doc.get_field_as_object("event.detector").map(|d| d.size()), Some(1));
}

#[test]
fn test_custom_field_separator() {
    let config = DocumentConfig::builder().field_separator('/').build().unwrap();
    let mut doc = Document::new();
    doc.put_field_with("video/source.name", "Camera", &config);

    assert_eq!(doc.get_field_with("video/source.name", &config), Value::from("Camera"));
    assert_eq!(doc.get_field("video.source.name"), Value::Null);
    assert_eq!(
        doc.try_get_field_with::<String>("video/source.name", &config).unwrap(),
        "Camera"
    );
}

#[test]
fn test_omit_helpers() {
    let mut event = detector_event().unwrap();
    event.put("nothing", Value::Null);
    event.omit_empty().omit_key(&["event", "source", "time"]);

    let keys: Vec<&str> = event.keys().collect();
    assert_eq!(keys, vec!["id", "type", "version"]);
}
