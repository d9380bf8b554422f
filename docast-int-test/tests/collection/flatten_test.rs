use docast::collection::{flatten_field, split_flat_key, split_flat_key_with, Document};
use docast::common::Value;
use docast::document_config::DocumentConfig;
use docast_int_test::test_util::{detector_event, random_document, seeded_rng, DETECTOR_EVENT};

#[test]
fn test_split_flat_key() {
    assert_eq!(
        split_flat_key("event_detector_faceAppeared_time__begin_datetime"),
        vec!["event", "detector", "faceAppeared", "time_begin", "datetime"]
    );
    assert_eq!(
        split_flat_key("event_detector_listed__face__detected_rectangle_x"),
        vec!["event", "detector", "listed_face_detected", "rectangle", "x"]
    );
}

#[test]
fn test_flatten_detector_event() {
    let event = detector_event().unwrap();
    let flat = event.flatten();

    assert_eq!(flat.get("type"), Value::from("detector"));
    assert_eq!(flat.get("version"), Value::from(1));
    assert_eq!(flat.get("event_detector_faceAppeared_age"), Value::from(44));
    assert_eq!(flat.get("event_detector_faceAppeared_rectangle_index"), Value::from(78));
    assert_eq!(
        flat.get("event_detector_faceAppeared_time__begin_utc"),
        Value::from("2019-03-27T08:10:14.640000")
    );
    assert_eq!(flat.get("source_video_name"), Value::from("Camera"));
    assert!(flat.iter().all(|(_, value)| !value.is_document()));

    let key = flatten_field("event.detector.faceAppeared.time_begin.datetime");
    assert_eq!(flat.get(&key), Value::from("2019-03-27T11:10:14.640000"));
}

#[test]
fn test_detector_event_round_trip() {
    let event = detector_event().unwrap();
    let nested = event.flatten().nested();
    assert_eq!(nested, event);

    assert_eq!(nested.to_json().unwrap(), event.to_json().unwrap());

    let expected: serde_json::Value = serde_json::from_str(DETECTOR_EVENT).unwrap();
    let actual: serde_json::Value = serde_json::from_slice(&nested.to_json().unwrap()).unwrap();
    assert_eq!(actual["event"]["detector"]["type"], expected["event"]["detector"]["type"]);
    assert_eq!(actual["source"], expected["source"]);
}

#[test]
fn test_random_round_trip() {
    for seed in 0..64 {
        let mut rng = seeded_rng(seed);
        let doc = random_document(&mut rng, 3);
        let flat = doc.flatten();
        assert_eq!(flat.nested(), doc, "seed {}", seed);
    }
}

#[test]
fn test_random_round_trip_custom_separator() {
    let config = DocumentConfig::builder().flat_separator('-').build().unwrap();
    for seed in 100..132 {
        let mut rng = seeded_rng(seed);
        let doc = random_document(&mut rng, 3);
        let flat = doc.flatten_with_config(&config);
        assert!(flat.keys().all(|key| !key.contains("--")), "seed {}", seed);
        assert_eq!(flat.nested_with_config(&config), doc, "seed {}", seed);
    }
}

#[test]
fn test_flat_keys_split_into_paths() {
    let event = detector_event().unwrap();
    for (key, value) in event.flatten().iter() {
        let path = split_flat_key_with(key, '_').join(".");
        assert_eq!(&event.get_field(&path), value, "key {}", key);
    }
}

#[test]
fn test_nested_of_empty_document() {
    let empty = Document::new();
    assert_eq!(empty.flatten(), empty);
    assert_eq!(empty.nested(), empty);
}
