//! Document key validation vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use ribbon_core::{DocumentKey, DOCUMENT_SUFFIX};


#[test]
fn key_vectors() {
    for v in vector_loader::load("keys.json") {
        let res = DocumentKey::parse(v.key.clone());

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.client_code().as_str(), err.code, "vector={}", v.description);
            assert!(e.client_message().is_some(), "vector={}", v.description);
            continue;
        }

        let key = res.expect("expected valid key");
        assert_eq!(key.as_str(), v.key, "vector={}", v.description);
        assert_eq!(key.file_name(), format!("{}{}", v.key, DOCUMENT_SUFFIX));
    }
}

#[test]
fn overlong_key_rejected() {
    let raw = "k".repeat(ribbon_core::document::MAX_KEY_BYTES + 1);
    let err = DocumentKey::parse(raw).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "bad_request");

    let raw = "k".repeat(ribbon_core::document::MAX_KEY_BYTES);
    assert!(DocumentKey::parse(raw).is_ok());
}

#[test]
fn from_file_name_filters_non_documents() {
    assert_eq!(
        DocumentKey::from_file_name("note1.json").unwrap().as_str(),
        "note1"
    );
    assert!(DocumentKey::from_file_name("note1.txt").is_none());
    assert!(DocumentKey::from_file_name(".json").is_none());
    assert!(DocumentKey::from_file_name(".note1.json.tmp").is_none());
}

#[test]
fn deserialize_validates() {
    let ok: DocumentKey = serde_json::from_str(r#""note1""#).unwrap();
    assert_eq!(ok.as_str(), "note1");

    let bad: Result<DocumentKey, _> = serde_json::from_str(r#""../x""#);
    assert!(bad.is_err());
}
