use docast::collection::Document;
use docast::common::Value;
use docast::errors::ErrorKind;
use docast_int_test::test_util::{detector_event, random_document, seeded_rng, DETECTOR_EVENT};

#[test]
fn test_decode_detector_event() {
    let event = Document::from_json(DETECTOR_EVENT.as_bytes()).unwrap();
    assert_eq!(event.size(), 6);
    assert!(event.get("event").is_document());
    assert!(matches!(event.get("version"), Value::I64(1)));
    assert!(event.get_field("event.detector.faceAppeared.quality").is_decimal());
}

#[test]
fn test_column_round_trip() {
    let event = detector_event().unwrap();
    let stored = event.stored_value().unwrap().unwrap();
    let scanned = Document::scan(&Value::from(stored)).unwrap();
    assert_eq!(scanned.keys().collect::<Vec<_>>(), event.keys().collect::<Vec<_>>());
    assert_eq!(scanned.get("source"), event.get("source"));
    assert_eq!(scanned.get("time"), event.get("time"));
    assert_eq!(scanned.flatten().size(), event.flatten().size());
}

#[test]
fn test_random_documents_survive_json() {
    for seed in 0..32 {
        let mut rng = seeded_rng(seed);
        let doc = random_document(&mut rng, 2);
        let decoded = Document::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(decoded, doc, "seed {}", seed);
    }
}

#[test]
fn test_empty_document_is_stored_as_null() {
    assert_eq!(Document::new().stored_value().unwrap(), None);
}

#[test]
fn test_scan_failures() {
    let err = Document::scan(&Value::from(DETECTOR_EVENT)).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::EncodingError);

    let err = Document::scan(&Value::from(b"not json".to_vec())).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::EncodingError);
}
