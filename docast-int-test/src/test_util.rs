use docast::collection::Document;
use docast::common::Value;
use docast::errors::DocastResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A detector event as produced by a video analytics server. Key names mix
/// camel case and underscores, values mix integers, floats and strings.
pub const DETECTOR_EVENT: &str = r#"{"type":"detector","event":{"detector":{"faceAppeared":{"age":44,"gender":2,"phase":"happened","quality":0.72228586673736572,"rectangle":{"h":0.56259259259259253,"index":78,"w":0.3164583333333334,"x":0.53187499999999999,"y":0.12888888888888889},"time_begin":{"datetime":"2019-03-27T11:10:14.640000","utc":"2019-03-27T08:10:14.640000"}},"type":{"id":"faceAppeared","name":"faceAppeared"}}},"version":1,"id":"0d49659f-1edc-49f2-872a-5ead1db8390a","time":{"datetime":"2019-03-27T11:10:14.920000","utc":"2019-03-27T08:10:14.920000"},"source":{"detector":{"id":"A-SHAULUKHOV/AVDetector.1/EventSupplier","name":""},"server":{"id":"A-SHAULUKHOV","name":""},"video":{"id":"A-SHAULUKHOV/DeviceIpint.1/SourceEndpoint.video:0:0","name":"Camera"}}}"#;

pub fn detector_event() -> DocastResult<Document> {
    Document::from_json(DETECTOR_EVENT.as_bytes())
}

/// Converts a `serde_json` value into a [Value] through its serde impls.
pub fn value_of(json: serde_json::Value) -> Value {
    match serde_json::from_value(json) {
        Ok(value) => value,
        Err(err) => panic!("not a valid value: {}", err),
    }
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Identifier-like key: lowercase words joined by single underscores, with
/// no leading or trailing underscore.
pub fn random_identifier(rng: &mut impl Rng) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    let words = rng.random_range(1..=3);
    (0..words)
        .map(|_| {
            let len = rng.random_range(1..=6);
            (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("_")
}

fn random_leaf(rng: &mut impl Rng) -> Value {
    match rng.random_range(0..5) {
        0 => Value::from(rng.random_range(-1000i64..1000)),
        1 => Value::from(rng.random::<bool>()),
        2 => Value::from(random_identifier(rng)),
        3 => Value::from(rng.random_range(0..100) as f64 / 4.0),
        _ => Value::from_vec(vec![rng.random_range(0i64..10), rng.random_range(0i64..10)]),
    }
}

/// Random document nested up to `depth` levels. Every nested document has
/// at least one entry, so flattening loses nothing.
pub fn random_document(rng: &mut impl Rng, depth: usize) -> Document {
    let mut doc = Document::new();
    let entries = rng.random_range(1..=4);
    for _ in 0..entries {
        let key = random_identifier(rng);
        if depth > 0 && rng.random_bool(0.4) {
            doc.put(key, random_document(rng, depth - 1));
        } else {
            doc.put(key, random_leaf(rng));
        }
    }
    doc
}
