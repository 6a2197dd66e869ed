//! Codec tests

use cachet_domain::Error;
use cachet_providers::codec;
use serde_json::json;

#[test]
fn test_encode_is_plain_json() {
    assert_eq!(codec::encode(&json!("v")).unwrap(), b"\"v\"".to_vec());
    assert_eq!(
        codec::encode(&json!({"a": [1, 2]})).unwrap(),
        br#"{"a":[1,2]}"#.to_vec()
    );
}

#[test]
fn test_decode_payload() {
    assert_eq!(codec::decode(b"null").unwrap(), json!(null));
    assert_eq!(codec::decode(br#"{"n":1.5}"#).unwrap(), json!({"n": 1.5}));
}

#[test]
fn test_decode_rejects_garbage() {
    assert!(matches!(
        codec::decode(b"\xff\xfe"),
        Err(Error::Json { .. })
    ));
    assert!(matches!(codec::decode(b""), Err(Error::Json { .. })));
}
